use crate::{api::Employee, state::directory::use_directory};
use leptos::*;

pub fn filter_employees(employees: &[Employee], query: &str) -> Vec<Employee> {
    employees
        .iter()
        .filter(|e| e.matches_query(query))
        .cloned()
        .collect()
}

/// Employees whose `reportingManager` names `manager`, compared the way
/// `resolve_manager` compares.
pub fn direct_reports(employees: &[Employee], manager: &Employee) -> Vec<Employee> {
    let name = manager.name.trim();
    if name.is_empty() {
        return Vec::new();
    }
    employees
        .iter()
        .filter(|e| !e.email.eq_ignore_ascii_case(&manager.email))
        .filter(|e| e.reporting_manager.trim().eq_ignore_ascii_case(name))
        .cloned()
        .collect()
}

#[derive(Clone, Copy)]
pub struct EmployeesViewModel {
    pub query: RwSignal<String>,
    pub all: Signal<Vec<Employee>>,
    pub visible: Signal<Vec<Employee>>,
}

pub fn use_employees_view_model() -> EmployeesViewModel {
    let state = use_directory().state;
    let query = create_rw_signal(String::new());
    let all = Signal::derive(move || state.with(|s| s.employees.clone()));
    let visible = Signal::derive(move || {
        let query = query.get();
        all.with(|employees| filter_employees(employees, &query))
    });
    EmployeesViewModel {
        query,
        all,
        visible,
    }
}
