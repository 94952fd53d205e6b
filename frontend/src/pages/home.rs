use crate::{
    api::{Holiday, HolidayType},
    components::{error::InlineErrorMessage, layout::Layout, loader::Loader},
    state::directory::use_directory,
    utils::time::{format_display_date, today},
};
use chrono::NaiveDate;
use leptos::*;

/// First holiday observed on or after `today`, with its group label.
pub fn next_holiday(groups: &[HolidayType], today: NaiveDate) -> Option<(String, Holiday)> {
    groups
        .iter()
        .flat_map(|g| g.holidays.iter().map(move |h| (g, h)))
        .filter_map(|(g, h)| h.observed_on().map(|d| (d, g, h)))
        .filter(|(d, _, _)| *d >= today)
        .min_by_key(|(d, _, _)| *d)
        .map(|(_, g, h)| (g.holiday_type.clone(), h.clone()))
}

#[component]
fn CountCard(
    label: &'static str,
    href: &'static str,
    #[prop(into)] count: Signal<usize>,
) -> impl IntoView {
    view! {
        <a href=href class="block rounded-lg bg-surface-elevated shadow-sm border border-border p-6 hover:shadow-md">
            <p class="text-sm font-medium text-fg-muted">{label}</p>
            <p class="mt-2 text-3xl font-semibold text-fg">{move || count.get()}</p>
        </a>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let directory = use_directory();
    let state = directory.state;
    let holidays = Signal::derive(move || state.with(|s| s.holiday_count()));
    let employees = Signal::derive(move || state.with(|s| s.employees.len()));
    let projects = Signal::derive(move || state.with(|s| s.projects.len()));
    let holidays_error = Signal::derive(move || state.with(|s| s.holidays_error.clone()));
    let employees_error = Signal::derive(move || state.with(|s| s.employees_error.clone()));
    let projects_error = Signal::derive(move || state.with(|s| s.projects_error.clone()));
    let upcoming = move || state.with(|s| next_holiday(&s.holidays, today()));

    view! {
        <Layout title="Staffboard" subtitle="Holidays, people and projects at a glance">
            <InlineErrorMessage error=holidays_error />
            <InlineErrorMessage error=employees_error />
            <InlineErrorMessage error=projects_error />
            <Show when=move || !state.with(|s| s.loading) fallback=|| view! { <Loader /> }>
                <div class="grid grid-cols-1 gap-4 sm:grid-cols-3">
                    <CountCard label="Holidays" href="/holidays" count=holidays />
                    <CountCard label="Employees" href="/employees" count=employees />
                    <CountCard label="Projects" href="/projects" count=projects />
                </div>
                <div class="mt-6 rounded-lg bg-surface-elevated border border-border p-6">
                    <h2 class="text-lg font-semibold text-fg">"Next holiday"</h2>
                    {move || match upcoming() {
                        Some((kind, holiday)) => view! {
                            <p class="mt-2 text-fg">
                                <span class="font-medium">{holiday.name.clone()}</span>
                                " on "
                                {format_display_date(&holiday.holiday_date)}
                                <span class="ml-2 text-xs text-fg-muted">{kind}</span>
                            </p>
                        }.into_view(),
                        None => view! {
                            <p class="mt-2 text-fg-muted">"No upcoming holidays."</p>
                        }.into_view(),
                    }}
                </div>
            </Show>
        </Layout>
    }
}
