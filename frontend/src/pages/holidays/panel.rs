use super::{
    components::HolidayGroupList,
    view_model::{available_years, parse_year_choice, use_holidays_view_model},
};
use crate::{
    components::{
        empty_state::EmptyState, error::InlineErrorMessage, layout::Layout, loader::Loader,
    },
    state::directory::use_directory,
};
use leptos::*;

#[component]
pub fn HolidaysPanel() -> impl IntoView {
    let vm = use_holidays_view_model();
    let directory = use_directory();
    let year = vm.year;
    let holidays = vm.holidays;
    let years = move || directory.state.with(|s| available_years(&s.holidays));

    view! {
        <Layout title="Holidays" subtitle="Company holiday calendar">
            <div class="mb-4 flex items-center gap-2">
                <label for="holiday-year" class="text-sm font-medium text-fg">"Year"</label>
                <select
                    id="holiday-year"
                    class="rounded-md border border-border bg-surface-elevated px-3 py-1 text-sm"
                    on:change=move |ev| year.set(parse_year_choice(&event_target_value(&ev)))
                >
                    <option value="" selected=move || year.get().is_none()>"All years"</option>
                    {move || years()
                        .into_iter()
                        .map(|y| view! {
                            <option value=y.to_string() selected=move || year.get() == Some(y)>
                                {y}
                            </option>
                        })
                        .collect_view()}
                </select>
            </div>
            {move || match holidays.get() {
                None => view! { <Loader /> }.into_view(),
                Some(Err(err)) => {
                    let error = Signal::derive(move || Some(err.clone()));
                    view! { <InlineErrorMessage error=error /> }.into_view()
                }
                Some(Ok(groups)) if groups.is_empty() => view! {
                    <EmptyState
                        title="No holidays"
                        description="Nothing is scheduled for the selected year."
                    />
                }.into_view(),
                Some(Ok(groups)) => view! { <HolidayGroupList groups=groups /> }.into_view(),
            }}
        </Layout>
    }
}
