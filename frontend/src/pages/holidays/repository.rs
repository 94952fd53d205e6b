use crate::api::{ApiClient, ApiError, HolidayType};
use std::rc::Rc;

#[derive(Clone)]
pub struct HolidaysRepository {
    client: Rc<ApiClient>,
}

impl HolidaysRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch(&self, year: Option<i32>) -> Result<Vec<HolidayType>, ApiError> {
        self.client.get_holidays(year).await
    }
}
