#![allow(dead_code)] // OpenAPI doc stubs are only referenced by utoipa macros.

use crate::{
    error::ErrorResponse,
    handlers::{employees::EmployeeListQuery, health::HealthResponse, holidays::HolidayListQuery},
    models::{Employee, Holiday, HolidayType, HolidaysData, HolidaysResponse, Project},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        list_holidays_doc,
        list_employees_doc,
        get_employee_doc,
        list_projects_doc,
        health_doc
    ),
    components(
        schemas(
            Holiday,
            HolidayType,
            HolidaysData,
            HolidaysResponse,
            Employee,
            Project,
            HealthResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "Holidays", description = "Holiday calendar grouped by holiday type"),
        (name = "Directory", description = "Employees and projects"),
        (name = "System", description = "Service health")
    )
)]
pub struct ApiDoc;

#[utoipa::path(
    get,
    path = "/api/holidays",
    params(HolidayListQuery),
    responses(
        (status = 200, description = "Holiday envelope; status is false when no calendar is loaded", body = HolidaysResponse),
        (status = 400, description = "Malformed year or overlong location filter", body = ErrorResponse)
    ),
    tag = "Holidays"
)]
fn list_holidays_doc() {}

#[utoipa::path(
    get,
    path = "/api/employees",
    params(EmployeeListQuery),
    responses(
        (status = 200, description = "Employees sorted by name", body = [Employee]),
        (status = 400, description = "Department filter too long", body = ErrorResponse)
    ),
    tag = "Directory"
)]
fn list_employees_doc() {}

#[utoipa::path(
    get,
    path = "/api/employees/{email}",
    params(("email" = String, Path, description = "Employee email, case-insensitive")),
    responses(
        (status = 200, body = Employee),
        (status = 400, description = "Not an email address", body = ErrorResponse),
        (status = 404, description = "No employee with that email", body = ErrorResponse)
    ),
    tag = "Directory"
)]
fn get_employee_doc() {}

#[utoipa::path(
    get,
    path = "/api/projects",
    responses((status = 200, description = "Projects sorted by key", body = [Project])),
    tag = "Directory"
)]
fn list_projects_doc() {}

#[utoipa::path(
    get,
    path = "/api/health",
    responses((status = 200, body = HealthResponse)),
    tag = "System"
)]
fn health_doc() {}
