use crate::api::{encode_path_segment, resolve_manager, Employee};
use leptos::*;

/// Route of the profile page for `email`.
pub fn employee_href(email: &str) -> String {
    format!("/employees/{}", encode_path_segment(email.trim()))
}

fn manager_line(employees: &[Employee], employee: &Employee) -> Option<String> {
    let declared = employee.reporting_manager.trim();
    if declared.is_empty() {
        return None;
    }
    Some(match resolve_manager(employees, employee) {
        Some(manager) => format!("Reports to {} ({})", manager.name, manager.role),
        None => format!("Reports to {} (not in directory)", declared),
    })
}

#[component]
pub fn EmployeeCard(employee: Employee, #[prop(into)] directory: Signal<Vec<Employee>>) -> impl IntoView {
    let manager = directory.with_untracked(|all| manager_line(all, &employee));
    let initials = employee.display_initials();
    let details = [employee.location.clone(), employee.phone.clone()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" · ");
    view! {
        <li class="rounded-lg bg-surface-elevated border border-border p-4 flex gap-4">
            {match employee.avatar.clone() {
                Some(src) => view! {
                    <img src=src alt=employee.name.clone() class="h-12 w-12 rounded-full object-cover"/>
                }.into_view(),
                None => view! {
                    <div class="h-12 w-12 rounded-full bg-action-primary-bg text-action-primary-text flex items-center justify-center font-semibold">
                        {initials}
                    </div>
                }.into_view(),
            }}
            <div class="min-w-0">
                <a href=employee_href(&employee.email) class="text-sm font-semibold text-fg hover:underline">
                    {employee.name.clone()}
                </a>
                <p class="text-xs text-fg-muted">{format!("{} · {}", employee.role, employee.department)}</p>
                <a href=format!("mailto:{}", employee.email) class="text-xs text-action-primary-bg hover:underline">
                    {employee.email.clone()}
                </a>
                {(!details.is_empty()).then(|| view! { <p class="text-xs text-fg-muted">{details}</p> })}
                {manager.map(|m| view! { <p class="mt-1 text-xs text-fg-muted">{m}</p> })}
                {employee.status.clone().map(|s| view! {
                    <span class="mt-1 inline-block rounded bg-surface-muted px-2 text-xs text-fg-muted">{s}</span>
                })}
            </div>
        </li>
    }
}
