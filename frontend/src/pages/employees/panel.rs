use super::{components::EmployeeCard, view_model::use_employees_view_model};
use crate::{
    components::{
        empty_state::EmptyState, error::InlineErrorMessage, icon_button::IconButton,
        layout::Layout, loader::Loader,
    },
    state::directory::use_directory,
};
use leptos::*;

#[component]
pub fn EmployeesPanel() -> impl IntoView {
    let vm = use_employees_view_model();
    let state = use_directory().state;
    let query = vm.query;
    let all = vm.all;
    let visible = vm.visible;
    let error = Signal::derive(move || state.with(|s| s.employees_error.clone()));
    let clear = Callback::new(move |_| query.set(String::new()));
    let no_query = Signal::derive(move || query.with(|q| q.is_empty()));

    view! {
        <Layout title="Employees" subtitle="Everyone in the directory">
            <div class="mb-4 flex items-center gap-2">
                <input
                    type="search"
                    placeholder="Search by name, department or role"
                    class="w-full max-w-md rounded-md border border-border bg-surface-elevated px-3 py-2 text-sm"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <IconButton label="Clear search" on_click=clear disabled=no_query>
                    <svg class="h-5 w-5" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" />
                    </svg>
                </IconButton>
            </div>
            <InlineErrorMessage error=error />
            {move || {
                if state.with(|s| s.loading) {
                    return view! { <Loader /> }.into_view();
                }
                let employees = visible.get();
                if employees.is_empty() {
                    if error.with(Option::is_some) {
                        return ().into_view();
                    }
                    return view! {
                        <EmptyState title="No employees" description="Try a different search." />
                    }.into_view();
                }
                view! {
                    <ul class="grid grid-cols-1 gap-4 md:grid-cols-2 lg:grid-cols-3">
                        {employees
                            .into_iter()
                            .map(|employee| view! { <EmployeeCard employee=employee directory=all /> })
                            .collect_view()}
                    </ul>
                }.into_view()
            }}
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ApiError;
    use crate::state::directory::DirectoryState;
    use crate::test_support::helpers::{provide_directory, sample_employee};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn lists_directory_employees() {
        let html = render_to_string(move || {
            leptos_meta::provide_meta_context();
            provide_directory(DirectoryState {
                employees: vec![
                    sample_employee("Asha Rao", "Dev Patel"),
                    sample_employee("Dev Patel", ""),
                ],
                ..Default::default()
            });
            view! { <EmployeesPanel /> }
        });
        assert!(html.contains("Asha Rao"));
        assert!(html.contains("Reports to Dev Patel (Engineer)"));
        assert!(html.contains("Clear search"));
    }

    #[test]
    fn empty_directory_shows_empty_state() {
        let html = render_to_string(move || {
            leptos_meta::provide_meta_context();
            provide_directory(DirectoryState::default());
            view! { <EmployeesPanel /> }
        });
        assert!(html.contains("No employees"));
    }

    #[test]
    fn holiday_failure_does_not_leak_into_employees() {
        let html = render_to_string(move || {
            leptos_meta::provide_meta_context();
            provide_directory(DirectoryState {
                employees: vec![sample_employee("Asha Rao", "")],
                holidays_error: Some(ApiError::holidays_unavailable(
                    "No holiday calendar has been published",
                )),
                ..Default::default()
            });
            view! { <EmployeesPanel /> }
        });
        assert!(html.contains("Asha Rao"));
        assert!(!html.contains("HOLIDAYS_UNAVAILABLE"));
    }

    #[test]
    fn employee_failure_replaces_empty_state() {
        let html = render_to_string(move || {
            leptos_meta::provide_meta_context();
            provide_directory(DirectoryState {
                holidays_error: Some(ApiError::holidays_unavailable("No holiday calendar")),
                employees_error: Some(ApiError::request_failed("Directory is offline")),
                ..Default::default()
            });
            view! { <EmployeesPanel /> }
        });
        assert!(html.contains("Directory is offline"));
        assert!(html.contains("Code: REQUEST_FAILED"));
        assert!(!html.contains("No employees"));
        assert!(!html.contains("HOLIDAYS_UNAVAILABLE"));
    }
}
