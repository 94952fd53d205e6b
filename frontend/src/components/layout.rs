use crate::{components::icon_button::IconButton, state::directory::use_directory};
use leptos::*;
use leptos_meta::Title;

pub const NAV_LINKS: [(&str, &str); 4] = [
    ("/", "Home"),
    ("/holidays", "Holidays"),
    ("/employees", "Employees"),
    ("/projects", "Projects"),
];

#[component]
pub fn NavBar() -> impl IntoView {
    let directory = use_directory();
    let loading = Signal::derive(move || directory.state.with(|s| s.loading));
    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a href="/" class="text-xl font-semibold text-fg">"Staffboard"</a>
                    <nav class="flex items-center space-x-4">
                        {NAV_LINKS
                            .iter()
                            .map(|(href, label)| view! {
                                <a
                                    href=*href
                                    class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                                >
                                    {*label}
                                </a>
                            })
                            .collect_view()}
                        <IconButton
                            label="Refresh directory"
                            on_click=directory.reload
                            disabled=loading
                        >
                            <svg class="h-5 w-5" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 4v5h.582m15.356 2A8.001 8.001 0 004.582 9m0 0H9m11 11v-5h-.581m0 0a8.003 8.003 0 01-15.357-2m15.357 2H15" />
                            </svg>
                        </IconButton>
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] subtitle: Option<String>,
    children: Children,
) -> impl IntoView {
    let page_title = title
        .as_ref()
        .map(|t| format!("{} | Staffboard", t))
        .unwrap_or_else(|| "Staffboard".to_string());
    view! {
        <Title text=page_title/>
        <div class="min-h-screen bg-surface">
            <NavBar/>
            <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                {title.map(|title| view! {
                    <div class="mb-6">
                        <h1 class="text-2xl font-bold text-fg">{title}</h1>
                        {subtitle.map(|s| view! { <p class="mt-1 text-sm text-fg-muted">{s}</p> })}
                    </div>
                })}
                {children()}
            </main>
        </div>
    }
}
