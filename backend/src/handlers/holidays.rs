use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::{
    error::AppError,
    models::HolidaysResponse,
    state::AppState,
    store::HolidayFilter,
};

const NO_CALENDAR_MESSAGE: &str = "No holiday calendar has been published";

#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct HolidayListQuery {
    /// Four-digit year of the observed holiday date.
    pub year: Option<String>,
    /// Location name; holidays without locations always match.
    #[validate(length(max = 64))]
    pub location: Option<String>,
}

/// Accepts exactly four ASCII digits, so `+2025` and `02025` are rejected.
fn parse_year(raw: &str) -> Result<i32, AppError> {
    let invalid = || AppError::BadRequest(format!("Invalid year: {}", raw));
    if raw.len() != 4 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let year: i32 = raw.parse().map_err(|_| invalid())?;
    if year < 1000 {
        return Err(invalid());
    }
    Ok(year)
}

impl HolidayListQuery {
    pub fn into_filter(self) -> Result<HolidayFilter, AppError> {
        self.validate()?;
        let year = match self.year.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(parse_year(raw)?),
        };
        let location = self
            .location
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty());
        Ok(HolidayFilter { year, location })
    }
}

pub async fn list_holidays(
    State(state): State<AppState>,
    Query(query): Query<HolidayListQuery>,
) -> Result<Json<HolidaysResponse>, AppError> {
    let filter = query.into_filter()?;
    if !state.store.has_holidays() {
        tracing::warn!("Holiday list requested but the calendar is empty");
        return Ok(Json(HolidaysResponse::unavailable(NO_CALENDAR_MESSAGE)));
    }

    let response = HolidaysResponse::ok(String::new(), state.store.holidays(&filter));
    let count = response.holiday_count();
    Ok(Json(HolidaysResponse {
        message: format!("{} holiday(s) found", count),
        ..response
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_query_means_no_filter() {
        let filter = HolidayListQuery {
            year: Some("  ".into()),
            location: Some("".into()),
        }
        .into_filter()
        .expect("filter");
        assert_eq!(filter, HolidayFilter::default());
    }

    #[test]
    fn non_numeric_or_short_year_is_rejected() {
        for raw in ["twenty", "25", "+2025", "02025", "0999", "20 5"] {
            let result = HolidayListQuery {
                year: Some(raw.into()),
                location: None,
            }
            .into_filter();
            assert!(matches!(result, Err(AppError::BadRequest(_))), "{raw}");
        }
    }

    #[test]
    fn four_digit_year_is_accepted() {
        let filter = HolidayListQuery {
            year: Some(" 2025 ".into()),
            location: None,
        }
        .into_filter()
        .expect("filter");
        assert_eq!(filter.year, Some(2025));
    }
}
