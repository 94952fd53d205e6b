use leptos::*;

mod components;
mod detail;
mod panel;
mod view_model;

pub use detail::EmployeeDetailPage;
pub use panel::EmployeesPanel;

#[component]
pub fn EmployeesPage() -> impl IntoView {
    view! { <EmployeesPanel /> }
}
