use crate::{
    api::Project,
    components::{
        empty_state::EmptyState, error::InlineErrorMessage, layout::Layout, loader::Loader,
    },
    state::directory::use_directory,
    utils::time::format_display_date,
};
use leptos::*;

pub fn sorted_projects(projects: &[Project]) -> Vec<Project> {
    let mut sorted = projects.to_vec();
    sorted.sort_by(|a, b| a.key.cmp(&b.key));
    sorted
}

#[component]
pub fn ProjectsPanel() -> impl IntoView {
    let state = use_directory().state;
    let error = Signal::derive(move || state.with(|s| s.projects_error.clone()));

    view! {
        <Layout title="Projects" subtitle="Active client engagements">
            <InlineErrorMessage error=error />
            {move || {
                if state.with(|s| s.loading) {
                    return view! { <Loader /> }.into_view();
                }
                let projects = state.with(|s| sorted_projects(&s.projects));
                if projects.is_empty() {
                    if error.with(Option::is_some) {
                        return ().into_view();
                    }
                    return view! { <EmptyState title="No projects" /> }.into_view();
                }
                view! {
                    <div class="overflow-x-auto rounded-lg border border-border">
                        <table class="min-w-full divide-y divide-border text-sm">
                            <thead class="bg-surface-muted">
                                <tr>
                                    <th class="px-4 py-2 text-left font-medium text-fg-muted">"Key"</th>
                                    <th class="px-4 py-2 text-left font-medium text-fg-muted">"Name"</th>
                                    <th class="px-4 py-2 text-left font-medium text-fg-muted">"Client"</th>
                                    <th class="px-4 py-2 text-left font-medium text-fg-muted">"Lead"</th>
                                    <th class="px-4 py-2 text-left font-medium text-fg-muted">"Started"</th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-border bg-surface-elevated">
                                {projects
                                    .into_iter()
                                    .map(|p| view! {
                                        <tr>
                                            <td class="px-4 py-2 font-mono text-fg">
                                                <span class="mr-2 inline-block rounded bg-surface-muted px-1 text-xs">{p.initial}</span>
                                                {p.key}
                                            </td>
                                            <td class="px-4 py-2 text-fg">{p.name}</td>
                                            <td class="px-4 py-2 text-fg-muted">{p.client}</td>
                                            <td class="px-4 py-2 text-fg-muted">{p.lead}</td>
                                            <td class="px-4 py-2 text-fg-muted">{format_display_date(&p.date)}</td>
                                        </tr>
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    </div>
                }.into_view()
            }}
        </Layout>
    }
}
