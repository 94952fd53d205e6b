use serde_json::json;
use staffboard_backend::store::{DirectorySeed, DirectoryStore, StoreError};
use std::io::Write;

mod support;
use support::{employee_json, seed_json, store_from};

#[test]
fn loads_seed_file_from_disk() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "{}", seed_json()).expect("write seed");

    let store = DirectoryStore::load(file.path()).expect("load seed");
    assert_eq!(store.holiday_count(), 4);
    assert_eq!(store.employee_count(), 3);
    assert_eq!(store.projects().len(), 2);
}

#[test]
fn bundled_seed_file_is_valid() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data/directory.json");
    let store = DirectoryStore::load(&path).expect("bundled seed loads");
    assert!(store.has_holidays());
    assert!(store.unresolved_managers().is_empty());
}

#[test]
fn missing_file_reports_path() {
    let err = DirectoryStore::load(std::path::Path::new("/nonexistent/directory.json"))
        .expect_err("missing file");
    assert!(matches!(err, StoreError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/directory.json"));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "{{ not json").expect("write");
    assert!(matches!(
        DirectoryStore::load(file.path()),
        Err(StoreError::Parse(_))
    ));
}

#[test]
fn invalid_employee_email_is_rejected() {
    let seed: DirectorySeed = serde_json::from_value(json!({
        "employees": [employee_json("Broken", "broken-at-example", "Ops", "")]
    }))
    .expect("seed shape");
    assert!(matches!(
        DirectoryStore::from_seed(seed),
        Err(StoreError::Employee { .. })
    ));
}

#[test]
fn duplicate_emails_are_rejected() {
    let seed: DirectorySeed = serde_json::from_value(json!({
        "employees": [
            employee_json("One", "same@example.com", "Ops", ""),
            employee_json("Two", "SAME@example.com", "Ops", "")
        ]
    }))
    .expect("seed shape");
    assert!(matches!(
        DirectoryStore::from_seed(seed),
        Err(StoreError::DuplicateEmployee(_))
    ));
}

#[test]
fn unknown_reporting_manager_is_reported_not_rejected() {
    let store = store_from(json!({
        "employees": [
            employee_json("Asha Rao", "asha@example.com", "Engineering", "Ghost Manager"),
            employee_json("Dev Patel", "dev@example.com", "Engineering", "")
        ]
    }));
    let unresolved = store.unresolved_managers();
    assert_eq!(unresolved.len(), 1);
    assert_eq!(unresolved[0].email, "asha@example.com");
}
