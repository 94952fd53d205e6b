//! Holiday calendar shapes and the `HolidaysResponse` envelope.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Wire format for every date field in the holiday calendar.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
/// A single holiday entry as published by the calendar.
pub struct Holiday {
    pub id: String,
    pub name: String,
    /// First day of the holiday period (`YYYY-MM-DD`).
    pub start_date: String,
    /// Last day of the holiday period (`YYYY-MM-DD`), inclusive.
    pub end_date: String,
    /// The day the holiday is observed; lies within the period.
    pub holiday_date: String,
    /// Locations the holiday applies to. Empty means every location.
    #[serde(default)]
    pub location: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
    pub year: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HolidayDates {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub observed: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HolidayShapeError {
    #[error("holiday {id}: {field} is not a YYYY-MM-DD date ({value:?})")]
    MalformedDate {
        id: String,
        field: &'static str,
        value: String,
    },
    #[error("holiday {id}: start_date {start} is after end_date {end}")]
    InvertedRange {
        id: String,
        start: NaiveDate,
        end: NaiveDate,
    },
    #[error("holiday {id}: holiday_date {observed} falls outside {start}..={end}")]
    OutsideRange {
        id: String,
        observed: NaiveDate,
        start: NaiveDate,
        end: NaiveDate,
    },
    #[error("holiday {id}: name is empty")]
    EmptyName { id: String },
    #[error("holiday {id}: year {year:?} does not match holiday_date {observed}")]
    YearMismatch {
        id: String,
        year: String,
        observed: NaiveDate,
    },
    #[error("holiday type label is empty")]
    EmptyHolidayType,
}

fn parse_date(id: &str, field: &'static str, value: &str) -> Result<NaiveDate, HolidayShapeError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        HolidayShapeError::MalformedDate {
            id: id.to_string(),
            field,
            value: value.to_string(),
        }
    })
}

impl Holiday {
    pub fn dates(&self) -> Result<HolidayDates, HolidayShapeError> {
        Ok(HolidayDates {
            start: parse_date(&self.id, "start_date", &self.start_date)?,
            end: parse_date(&self.id, "end_date", &self.end_date)?,
            observed: parse_date(&self.id, "holiday_date", &self.holiday_date)?,
        })
    }

    pub fn validate(&self) -> Result<HolidayDates, HolidayShapeError> {
        if self.name.trim().is_empty() {
            return Err(HolidayShapeError::EmptyName {
                id: self.id.clone(),
            });
        }
        let dates = self.dates()?;
        if dates.start > dates.end {
            return Err(HolidayShapeError::InvertedRange {
                id: self.id.clone(),
                start: dates.start,
                end: dates.end,
            });
        }
        if dates.observed < dates.start || dates.observed > dates.end {
            return Err(HolidayShapeError::OutsideRange {
                id: self.id.clone(),
                observed: dates.observed,
                start: dates.start,
                end: dates.end,
            });
        }
        // A non-numeric year label is tolerated; a numeric one must agree.
        if let Ok(year) = self.year.trim().parse::<i32>() {
            if year != dates.observed.year() {
                return Err(HolidayShapeError::YearMismatch {
                    id: self.id.clone(),
                    year: self.year.clone(),
                    observed: dates.observed,
                });
            }
        }
        Ok(dates)
    }

    pub fn observed_year(&self) -> Option<i32> {
        NaiveDate::parse_from_str(self.holiday_date.trim(), DATE_FORMAT)
            .ok()
            .map(|d| d.year())
    }

    pub fn applies_to_location(&self, location: &str) -> bool {
        let wanted = location.trim();
        self.location.is_empty()
            || self
                .location
                .iter()
                .any(|loc| loc.trim().eq_ignore_ascii_case(wanted))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
/// Holidays sharing one label, e.g. "Public" or "Optional".
pub struct HolidayType {
    pub holiday_type: String,
    #[serde(default)]
    pub holidays: Vec<Holiday>,
}

impl HolidayType {
    pub fn validate(&self) -> Result<(), HolidayShapeError> {
        if self.holiday_type.trim().is_empty() {
            return Err(HolidayShapeError::EmptyHolidayType);
        }
        for holiday in &self.holidays {
            holiday.validate()?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HolidaysData {
    #[serde(default)]
    pub holidays: Vec<HolidayType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
/// Envelope returned by `GET /api/holidays`.
pub struct HolidaysResponse {
    pub status: bool,
    pub message: String,
    #[serde(default)]
    pub data: HolidaysData,
}

impl HolidaysResponse {
    pub fn ok(message: impl Into<String>, holidays: Vec<HolidayType>) -> Self {
        Self {
            status: true,
            message: message.into(),
            data: HolidaysData { holidays },
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            status: false,
            message: message.into(),
            data: HolidaysData::default(),
        }
    }

    pub fn holiday_count(&self) -> usize {
        self.data.holidays.iter().map(|g| g.holidays.len()).sum()
    }

    pub fn validate(&self) -> Result<(), HolidayShapeError> {
        self.data.holidays.iter().try_for_each(HolidayType::validate)
    }
}

#[cfg(test)]
pub(crate) fn sample_holiday(id: &str, start: &str, observed: &str, end: &str) -> Holiday {
    Holiday {
        id: id.to_string(),
        name: format!("Holiday {id}"),
        start_date: start.to_string(),
        end_date: end.to_string(),
        holiday_date: observed.to_string(),
        location: vec!["Pune".into(), "Remote".into()],
        created_at: "2024-11-02T09:00:00Z".into(),
        updated_at: "2024-11-02T09:00:00Z".into(),
        year: observed.get(0..4).unwrap_or_default().to_string(),
    }
}
