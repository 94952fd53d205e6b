use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::{error::AppError, models::Employee, state::AppState};

#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmployeeListQuery {
    /// Case-insensitive department name.
    #[validate(length(max = 64))]
    pub department: Option<String>,
}

#[derive(Debug, Validate)]
struct EmployeeEmail {
    #[validate(email)]
    email: String,
}

pub async fn list_employees(
    State(state): State<AppState>,
    Query(query): Query<EmployeeListQuery>,
) -> Result<Json<Vec<Employee>>, AppError> {
    query.validate()?;
    let department = query
        .department
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty());
    Ok(Json(state.store.employees(department)))
}

pub async fn get_employee(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Employee>, AppError> {
    EmployeeEmail {
        email: email.trim().to_string(),
    }
    .validate()?;
    state
        .store
        .employee_by_email(&email)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Employee {} not found", email)))
}
