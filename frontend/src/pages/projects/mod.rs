use leptos::*;

mod panel;

pub use panel::{sorted_projects, ProjectsPanel};

#[component]
pub fn ProjectsPage() -> impl IntoView {
    view! { <ProjectsPanel /> }
}
