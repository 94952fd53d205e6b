use crate::{
    api::{Holiday, HolidayType},
    utils::time::{format_display_date, format_range},
};
use leptos::*;

#[component]
fn HolidayRow(holiday: Holiday) -> impl IntoView {
    let range = holiday
        .span()
        .ok()
        .filter(|span| span.is_multi_day())
        .map(|span| format!("{} ({} days)", format_range(span.start, span.end), span.days()));
    view! {
        <li class="py-3 flex items-start justify-between">
            <div>
                <p class="text-sm font-medium text-fg">{holiday.name.clone()}</p>
                {range.map(|r| view! { <p class="text-xs text-fg-muted">{r}</p> })}
                <p class="text-xs text-fg-muted">{holiday.location_label()}</p>
            </div>
            <time datetime=holiday.holiday_date.clone() class="text-sm text-fg-muted whitespace-nowrap">
                {format_display_date(&holiday.holiday_date)}
            </time>
        </li>
    }
}

#[component]
pub fn HolidayGroupList(groups: Vec<HolidayType>) -> impl IntoView {
    view! {
        <div class="space-y-6">
            {groups
                .into_iter()
                .map(|group| {
                    let count = group.holidays.len();
                    view! {
                        <section class="rounded-lg bg-surface-elevated border border-border p-4">
                            <h2 class="text-lg font-semibold text-fg">
                                {group.holiday_type}
                                <span class="ml-2 text-sm font-normal text-fg-muted">{format!("({})", count)}</span>
                            </h2>
                            <ul class="divide-y divide-border">
                                {group.holidays
                                    .into_iter()
                                    .map(|holiday| view! { <HolidayRow holiday=holiday /> })
                                    .collect_view()}
                            </ul>
                        </section>
                    }
                })
                .collect_view()}
        </div>
    }
}
