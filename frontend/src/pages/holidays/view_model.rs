use super::repository::HolidaysRepository;
use crate::{
    api::{ApiClient, ApiError, HolidayType},
    state::directory::{use_directory, DirectoryState},
};
use leptos::*;
use std::rc::Rc;

/// Resource key: the selected year plus the directory reload generation, so
/// the navbar refresh also refetches this page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HolidaysQuery {
    pub year: Option<i32>,
    pub generation: u32,
}

#[derive(Clone, Copy)]
pub struct HolidaysViewModel {
    pub year: RwSignal<Option<i32>>,
    pub holidays: Resource<HolidaysQuery, Result<Vec<HolidayType>, ApiError>>,
}

/// Years observed anywhere in `groups`, newest first.
pub fn available_years(groups: &[HolidayType]) -> Vec<i32> {
    let mut years: Vec<i32> = groups
        .iter()
        .flat_map(|g| g.holidays.iter())
        .filter_map(|h| h.observed_year())
        .collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}

/// Value of the year `<select>`; anything but a number means "all years".
pub fn parse_year_choice(value: &str) -> Option<i32> {
    value.trim().parse().ok()
}

/// Tracks both signals when called inside a reactive scope.
pub fn holidays_query(
    year: RwSignal<Option<i32>>,
    directory: RwSignal<DirectoryState>,
) -> HolidaysQuery {
    HolidaysQuery {
        year: year.get(),
        generation: directory.with(|s| s.generation),
    }
}

pub fn use_holidays_view_model() -> HolidaysViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = HolidaysRepository::new_with_client(Rc::new(api));

    let directory = use_directory();
    let year = create_rw_signal(None::<i32>);
    let holidays = create_local_resource(
        move || holidays_query(year, directory.state),
        move |query| {
            let repo = repository.clone();
            async move { repo.fetch(query.year).await }
        },
    );

    HolidaysViewModel { year, holidays }
}
