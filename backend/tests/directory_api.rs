use axum::http::StatusCode;

mod support;
use support::{get_json, seed_json, test_app};

#[tokio::test]
async fn employees_are_sorted_by_name() {
    let (status, body) = get_json(test_app(seed_json()), "/api/employees").await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<_> = body
        .as_array()
        .expect("array")
        .iter()
        .map(|e| e["name"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(names, vec!["Asha Rao", "Dev Patel", "Meera Iyer"]);
    assert_eq!(body[0]["reportingManager"], "Dev Patel");
    assert!(body[0].get("avatar").is_none());
}

#[tokio::test]
async fn department_filter_is_case_insensitive() {
    let (_, body) = get_json(test_app(seed_json()), "/api/employees?department=people").await;
    let list = body.as_array().expect("array");
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["email"], "meera.iyer@example.com");
}

#[tokio::test]
async fn employee_lookup_by_email() {
    let app = test_app(seed_json());
    let (status, body) = get_json(app.clone(), "/api/employees/ASHA.RAO@example.com").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Asha Rao");

    let (status, body) = get_json(app, "/api/employees/nobody@example.com").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn projects_are_sorted_by_key() {
    let (status, body) = get_json(test_app(seed_json()), "/api/projects").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["key"], "BILL");
    assert_eq!(body[1]["key"], "HRMS");
    assert_eq!(body[1]["lead"], "Asha Rao");
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = get_json(test_app(seed_json()), "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn malformed_email_is_a_validation_error() {
    let (status, body) = get_json(test_app(seed_json()), "/api/employees/not-an-email").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["details"]["errors"][0], "email: email");
}

#[tokio::test]
async fn overlong_department_filter_is_rejected() {
    let uri = format!("/api/employees?department={}", "x".repeat(65));
    let (status, body) = get_json(test_app(seed_json()), &uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["details"]["errors"][0], "department: length");
}
