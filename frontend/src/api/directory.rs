use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

use super::{
    client::ApiClient,
    types::{ApiError, Employee, HolidayType, HolidaysResponse, Project},
};

// Characters that would end or split a URL path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub fn encode_path_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

pub fn decode_path_segment(value: &str) -> String {
    percent_decode_str(value).decode_utf8_lossy().into_owned()
}

impl ApiClient {
    /// Fetches the holiday calendar, optionally restricted to one year.
    /// An envelope with `status: false` surfaces as `HOLIDAYS_UNAVAILABLE`.
    pub async fn get_holidays(&self, year: Option<i32>) -> Result<Vec<HolidayType>, ApiError> {
        let query: Vec<(&str, String)> = year.map(|y| ("year", y.to_string())).into_iter().collect();
        let envelope: HolidaysResponse = self.get_json("/holidays", &query).await?;
        envelope.into_result()
    }

    pub async fn get_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.get_json("/employees", &[]).await
    }

    pub async fn get_employee(&self, email: &str) -> Result<Employee, ApiError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(ApiError::validation("Email is required"));
        }
        self.get_json(&format!("/employees/{}", encode_path_segment(email)), &[])
            .await
    }

    pub async fn get_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.get_json("/projects", &[]).await
    }
}
