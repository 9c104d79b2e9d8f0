use crate::support::{fixture, msgram};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Sonar components command tests
// ============================================================================

#[test]
fn test_components_human() {
    msgram()
        .arg("components")
        .arg(fixture("sonar.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("2 component(s)"))
        .stdout(predicate::str::contains("UTS tests/__init__.py (1 measure(s))"))
        .stdout(predicate::str::contains("FIL src/cli/jsonReader.py (3 measure(s))"));
}

#[test]
fn test_components_json_forwards_components() {
    let output = msgram()
        .args(["--format", "json", "components"])
        .arg(fixture("sonar.json"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let components: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(components.len(), 2);
    assert_eq!(components[0]["id"], "AX9GDsKlZuVL7NjXSAZ4");
    assert_eq!(components[1]["measures"][1]["metric"], "coverage");
}

#[test]
fn test_components_records() {
    msgram()
        .args(["--format", "records", "components"])
        .arg(fixture("sonar.json"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H msgram=1 records=1 mode=components count=2",
        ))
        .stdout(predicate::str::contains(
            "X \"tests/__init__.py\" qualifier=UTS measures=1",
        ));
}

#[test]
fn test_components_warns_about_unknown_metrics() {
    msgram()
        .arg("components")
        .arg(fixture("sonar.json"))
        .assert()
        .success()
        .stderr(predicate::str::contains("sqale_index"));
}

#[test]
fn test_components_wrong_order_rejected() {
    msgram()
        .args(["--format", "json", "components"])
        .arg(fixture("sonar_wrong_order.json"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains(
            "\"type\":\"invalid_sonar_file_attributes\"",
        ));
}

#[test]
fn test_components_wrong_order_accepted_with_any_key_order() {
    msgram()
        .args(["--key-order", "any", "components"])
        .arg(fixture("sonar_wrong_order.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("0 component(s)"));
}

#[test]
fn test_components_invalid_base_component() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sonar.json");
    fs::write(
        &path,
        r#"{
            "paging": {},
            "baseComponent": { "id": "i", "key": "k", "name": "n", "measures": [] },
            "components": []
        }"#,
    )
    .unwrap();

    msgram()
        .arg("components")
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid baseComponent"));
}

#[test]
fn test_components_wrong_extension() {
    msgram()
        .args(["components", "sonar.txt"])
        .assert()
        .code(2);
}
