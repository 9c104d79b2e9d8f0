use crate::support::{fixture, msgram};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Upload response rendering tests
// ============================================================================

#[test]
fn test_response_created() {
    msgram()
        .args(["response", "--status", "201"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The imported metrics were saved for the pre-configuration",
        ));
}

#[test]
fn test_response_error_fields() {
    msgram()
        .args(["response", "--status", "400", "--body"])
        .arg(fixture("response_400.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "\nThere was a ERROR while saving your Metrics:\n\n\tGeneral",
        ))
        .stdout(predicate::str::contains("\tGeneral => Pre-configuration not found"))
        .stdout(predicate::str::contains("\tmetrics => This field is required."));
}

#[test]
fn test_response_json() {
    let output = msgram()
        .args(["--format", "json", "response", "--status", "400", "--body"])
        .arg(fixture("response_400.json"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["status"], 400);
    assert_eq!(value["saved"], false);
    assert_eq!(value["lines"][1], "General => Pre-configuration not found");
}

#[test]
fn test_response_body_must_be_object() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("body.json");
    fs::write(&path, r#"["not", "an", "object"]"#).unwrap();

    msgram()
        .args(["response", "--status", "400", "--body"])
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("must be a JSON object"));
}

#[test]
fn test_response_rejects_impossible_status() {
    msgram()
        .args(["response", "--status", "999"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid HTTP status: 999"));
}
