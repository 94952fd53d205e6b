#![allow(dead_code)]
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use staffboard_backend::{
    app::build_router,
    config::Config,
    state::AppState,
    store::{DirectorySeed, DirectoryStore},
};
use tower::ServiceExt;

pub fn test_config() -> Config {
    Config::from_lookup(|_| None).expect("default config")
}

pub fn holiday_json(id: &str, name: &str, date: &str, location: &[&str]) -> Value {
    json!({
        "id": id,
        "name": name,
        "start_date": date,
        "end_date": date,
        "holiday_date": date,
        "location": location,
        "created_at": "2024-11-02T09:00:00Z",
        "updated_at": "2024-11-02T09:00:00Z",
        "year": &date[..4]
    })
}

pub fn employee_json(name: &str, email: &str, department: &str, manager: &str) -> Value {
    json!({
        "name": name,
        "email": email,
        "department": department,
        "role": "Engineer",
        "reportingManager": manager
    })
}

pub fn seed_json() -> Value {
    json!({
        "holidays": [
            {
                "holiday_type": "Public",
                "holidays": [
                    holiday_json("h-republic", "Republic Day", "2025-01-26", &["Pune", "Remote"]),
                    holiday_json("h-independence", "Independence Day", "2025-08-15", &[]),
                    holiday_json("h-christmas-24", "Christmas", "2024-12-25", &["Bengaluru"])
                ]
            },
            {
                "holiday_type": "Optional",
                "holidays": [
                    holiday_json("h-holi", "Holi", "2025-03-14", &["Pune"])
                ]
            }
        ],
        "employees": [
            employee_json("Dev Patel", "dev.patel@example.com", "Engineering", ""),
            employee_json("Asha Rao", "asha.rao@example.com", "Engineering", "Dev Patel"),
            employee_json("Meera Iyer", "meera.iyer@example.com", "People", "Dev Patel")
        ],
        "projects": [
            { "key": "HRMS", "initial": "HR", "name": "People Portal", "client": "Internal", "date": "2024-06-01", "lead": "Asha Rao" },
            { "key": "BILL", "initial": "BL", "name": "Billing Revamp", "client": "Northwind", "date": "2025-02-15", "lead": "Dev Patel" }
        ]
    })
}

pub fn store_from(seed: Value) -> DirectoryStore {
    let seed: DirectorySeed = serde_json::from_value(seed).expect("seed shape");
    DirectoryStore::from_seed(seed).expect("valid seed")
}

pub fn test_app(seed: Value) -> Router {
    build_router(AppState::new(store_from(seed), test_config()))
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("build request"),
        )
        .await
        .expect("call app");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, body)
}
