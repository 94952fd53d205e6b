use super::{components::employee_href, view_model::direct_reports};
use crate::{
    api::{decode_path_segment, resolve_manager, ApiClient, Employee},
    components::{error::InlineErrorMessage, layout::Layout, loader::Loader},
    state::directory::use_directory,
};
use leptos::*;
use leptos_router::use_params_map;

#[component]
pub fn EmployeeDetailPage() -> impl IntoView {
    let params = use_params_map();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let directory = use_directory().state;
    let email = move || {
        params.with(|p| p.get("email").map(|raw| decode_path_segment(raw)).unwrap_or_default())
    };
    let employee = create_local_resource(
        move || (email(), directory.with(|s| s.generation)),
        move |(email, _)| {
            let api = api.clone();
            async move { api.get_employee(&email).await }
        },
    );
    let all = Signal::derive(move || directory.with(|s| s.employees.clone()));

    view! {
        <Layout title="Employee" subtitle="Directory profile">
            <a href="/employees" class="mb-4 inline-block text-sm text-action-primary-bg hover:underline">
                "Back to employees"
            </a>
            {move || match employee.get() {
                None => view! { <Loader /> }.into_view(),
                Some(Err(err)) => {
                    let error = Signal::derive(move || Some(err.clone()));
                    view! { <InlineErrorMessage error=error /> }.into_view()
                }
                Some(Ok(employee)) => view! { <EmployeeProfile employee=employee directory=all /> }.into_view(),
            }}
        </Layout>
    }
}

#[component]
pub fn EmployeeProfile(employee: Employee, #[prop(into)] directory: Signal<Vec<Employee>>) -> impl IntoView {
    let (manager, reports) = directory.with_untracked(|all| {
        (resolve_manager(all, &employee).cloned(), direct_reports(all, &employee))
    });
    let declared = employee.reporting_manager.trim().to_string();
    let facts = [
        Some(("Department", employee.department.clone())),
        Some(("Role", employee.role.clone())),
        employee.location.clone().map(|v| ("Location", v)),
        employee.phone.clone().map(|v| ("Phone", v)),
        employee.status.clone().map(|v| ("Status", v)),
    ];

    view! {
        <section class="rounded-lg bg-surface-elevated border border-border p-6 space-y-4">
            <div class="flex items-center gap-4">
                <div class="h-14 w-14 rounded-full bg-action-primary-bg text-action-primary-text flex items-center justify-center text-lg font-semibold">
                    {employee.display_initials()}
                </div>
                <div>
                    <h2 class="text-lg font-semibold text-fg">{employee.name.clone()}</h2>
                    <a href=format!("mailto:{}", employee.email) class="text-sm text-action-primary-bg hover:underline">
                        {employee.email.clone()}
                    </a>
                </div>
            </div>
            <dl class="grid grid-cols-2 gap-2 text-sm">
                {facts
                    .into_iter()
                    .flatten()
                    .map(|(label, value)| view! {
                        <dt class="text-fg-muted">{label}</dt>
                        <dd class="text-fg">{value}</dd>
                    })
                    .collect_view()}
            </dl>
            {match (manager, declared.is_empty()) {
                (Some(m), _) => view! {
                    <p class="text-sm text-fg">
                        "Reports to "
                        <a href=employee_href(&m.email) class="text-action-primary-bg hover:underline">{m.name.clone()}</a>
                    </p>
                }.into_view(),
                (None, false) => view! {
                    <p class="text-sm text-fg-muted">{format!("Reports to {} (not in directory)", declared)}</p>
                }.into_view(),
                (None, true) => ().into_view(),
            }}
            {(!reports.is_empty()).then(|| view! {
                <div>
                    <h3 class="text-sm font-semibold text-fg">"Direct reports"</h3>
                    <ul class="mt-1 text-sm">
                        {reports
                            .into_iter()
                            .map(|r| view! {
                                <li>
                                    <a href=employee_href(&r.email) class="text-action-primary-bg hover:underline">{r.name}</a>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </div>
            })}
        </section>
    }
}
