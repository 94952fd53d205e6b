use chrono::{Datelike, NaiveDate};
use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub id: String,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub holiday_date: String,
    #[serde(default)]
    pub location: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
    pub year: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HolidaySpan {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub observed: NaiveDate,
}

impl HolidaySpan {
    pub fn is_multi_day(&self) -> bool {
        self.start != self.end
    }

    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

fn parse_field(holiday: &Holiday, field: &str, value: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        ApiError::validation(format!(
            "Holiday \"{}\" has a malformed {}: {}",
            holiday.name, field, value
        ))
    })
}

impl Holiday {
    /// Parses the three date fields and checks
    /// `start_date <= holiday_date <= end_date`.
    pub fn span(&self) -> Result<HolidaySpan, ApiError> {
        let span = HolidaySpan {
            start: parse_field(self, "start_date", &self.start_date)?,
            end: parse_field(self, "end_date", &self.end_date)?,
            observed: parse_field(self, "holiday_date", &self.holiday_date)?,
        };
        if span.start > span.end {
            return Err(ApiError::validation(format!(
                "Holiday \"{}\" starts after it ends ({} > {})",
                self.name, span.start, span.end
            )));
        }
        if span.observed < span.start || span.observed > span.end {
            return Err(ApiError::validation(format!(
                "Holiday \"{}\" is observed on {} outside {}..{}",
                self.name, span.observed, span.start, span.end
            )));
        }
        Ok(span)
    }

    /// Full shape check: the date rules of [`Holiday::span`], a non-empty
    /// name, and a numeric `year` that agrees with `holiday_date`.
    pub fn validate(&self) -> Result<HolidaySpan, ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::validation(format!(
                "Holiday {} has an empty name",
                self.id
            )));
        }
        let span = self.span()?;
        if let Ok(year) = self.year.trim().parse::<i32>() {
            if year != span.observed.year() {
                return Err(ApiError::validation(format!(
                    "Holiday \"{}\" is labelled {} but observed on {}",
                    self.name, self.year, span.observed
                )));
            }
        }
        Ok(span)
    }

    pub fn observed_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.holiday_date.trim(), DATE_FORMAT).ok()
    }

    pub fn observed_year(&self) -> Option<i32> {
        self.observed_on().map(|d| d.year())
    }

    pub fn location_label(&self) -> String {
        if self.location.is_empty() {
            "All locations".to_string()
        } else {
            self.location.join(", ")
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayType {
    pub holiday_type: String,
    #[serde(default)]
    pub holidays: Vec<Holiday>,
}

impl HolidayType {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.holiday_type.trim().is_empty() {
            return Err(ApiError::validation("Holiday group without a type label"));
        }
        self.holidays.iter().try_for_each(|h| h.validate().map(|_| ()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidaysData {
    #[serde(default)]
    pub holidays: Vec<HolidayType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidaysResponse {
    pub status: bool,
    pub message: String,
    #[serde(default)]
    pub data: HolidaysData,
}

impl HolidaysResponse {
    pub fn validate(&self) -> Result<(), ApiError> {
        self.data.holidays.iter().try_for_each(HolidayType::validate)
    }

    /// Unwraps the envelope: `status: false` becomes an error carrying the
    /// server message, otherwise the groups are validated and returned.
    pub fn into_result(self) -> Result<Vec<HolidayType>, ApiError> {
        if !self.status {
            let message = if self.message.trim().is_empty() {
                "Holiday calendar is unavailable".to_string()
            } else {
                self.message
            };
            return Err(ApiError::holidays_unavailable(message));
        }
        self.validate()?;
        Ok(self.data.holidays)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub name: String,
    pub email: String,
    pub department: String,
    pub role: String,
    #[serde(default)]
    pub reporting_manager: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initials: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Employee {
    /// Declared initials, or the first letter of up to two name parts.
    pub fn display_initials(&self) -> String {
        if let Some(initials) = self.initials.as_deref().map(str::trim) {
            if !initials.is_empty() {
                return initials.to_uppercase();
            }
        }
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }

    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        needle.is_empty()
            || [&self.name, &self.department, &self.role, &self.email]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Looks up the employee named by `employee.reporting_manager`. The reference
/// is a display name, so a rename or typo leaves it dangling.
pub fn resolve_manager<'a>(employees: &'a [Employee], employee: &Employee) -> Option<&'a Employee> {
    let wanted = employee.reporting_manager.trim();
    if wanted.is_empty() {
        return None;
    }
    employees
        .iter()
        .find(|candidate| candidate.name.trim().eq_ignore_ascii_case(wanted))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub key: String,
    pub initial: String,
    pub name: String,
    pub client: String,
    pub date: String,
    pub lead: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    fn with_code(msg: impl Into<String>, code: &str) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "VALIDATION_ERROR")
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNKNOWN")
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "REQUEST_FAILED")
    }

    pub fn holidays_unavailable(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "HOLIDAYS_UNAVAILABLE")
    }
}
