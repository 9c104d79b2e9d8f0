use crate::support::{fixture, msgram};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Pre-configuration command tests
// ============================================================================

#[test]
fn test_preconfig_human() {
    msgram()
        .arg("preconfig")
        .arg(fixture("preconfig.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Pre-configuration: msgram default"))
        .stdout(predicate::str::contains("  reliability [50]"))
        .stdout(predicate::str::contains("  test_coverage [34]"));
}

#[test]
fn test_preconfig_json_record() {
    let output = msgram()
        .args(["--format", "json", "preconfig"])
        .arg(fixture("preconfig.json"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let record: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(record["name"], "msgram default");
    assert_eq!(
        record["characteristics"],
        serde_json::json!(["reliability", "maintainability"])
    );
    assert_eq!(record["characteristics_weights"][0]["reliability"], 50);
    assert_eq!(record["measures_weights"][0]["passed_tests"], 33);

    let characteristic_keys: Vec<&String> = record["characteristics_weights"][0]
        .as_object()
        .unwrap()
        .keys()
        .collect();
    assert_eq!(characteristic_keys, ["reliability", "maintainability"]);

    let measure_keys: Vec<&String> = record["measures_weights"][0]
        .as_object()
        .unwrap()
        .keys()
        .collect();
    assert_eq!(
        measure_keys,
        [
            "passed_tests",
            "test_builds",
            "test_coverage",
            "non_complex_file_density",
            "commented_file_density",
            "duplication_absense"
        ]
    );
}

#[test]
fn test_preconfig_records() {
    msgram()
        .args(["--format", "records", "preconfig"])
        .arg(fixture("preconfig.json"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H msgram=1 records=1 mode=preconfig name=\"msgram default\"",
        ))
        .stdout(predicate::str::contains("C \"maintainability\" weight=50"))
        .stdout(predicate::str::contains("M \"duplication_absense\" weight=34"));
}

#[test]
fn test_preconfig_sum_violation_exit_code_3() {
    msgram()
        .arg("preconfig")
        .arg(fixture("preconfig_bad_sum.json"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid characteristic"))
        .stderr(predicate::str::contains("do not sum to 100 (sum is 90)"));
}

#[test]
fn test_preconfig_sum_violation_json_error() {
    msgram()
        .args(["--format", "json", "preconfig"])
        .arg(fixture("preconfig_bad_sum.json"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"invalid_characteristic\""));
}

#[test]
fn test_preconfig_missing_file() {
    let dir = tempdir().unwrap();

    msgram()
        .args(["--format", "json", "preconfig"])
        .arg(dir.path().join("absent.json"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"file_not_found\""));
}

#[test]
fn test_preconfig_wrong_extension_exit_code_2() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("preconfig.txt");
    fs::copy(fixture("preconfig.json"), &path).unwrap();

    msgram()
        .arg("preconfig")
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("only JSON files are accepted"));
}

#[test]
fn test_preconfig_missing_name() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nameless.json");
    fs::write(&path, r#"{ "characteristics": [] }"#).unwrap();

    msgram()
        .arg("preconfig")
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("missing field: pre_config_name"));
}

#[test]
fn test_preconfig_non_string_name() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("numbered.json");
    fs::write(&path, r#"{ "pre_config_name": 42, "characteristics": [] }"#).unwrap();

    msgram()
        .arg("preconfig")
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains(
            "invalid field pre_config_name: expected a string, found 42",
        ));
}

#[test]
fn test_preconfig_measure_missing_weight() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("measure.json");
    fs::write(
        &path,
        r#"{
            "pre_config_name": "x",
            "characteristics": [{
                "name": "reliability", "weight": 100,
                "subcharacteristics": [{
                    "name": "testing_status", "weight": 100,
                    "measures": [{ "name": "passed_tests" }]
                }]
            }]
        }"#,
    )
    .unwrap();

    msgram()
        .arg("preconfig")
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains(
            "invalid measure: passed_tests does not have weight field defined",
        ));
}

#[test]
fn test_preconfig_quiet_suppresses_output() {
    msgram()
        .args(["--quiet", "preconfig"])
        .arg(fixture("preconfig.json"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_cumulative_mode_flag() {
    msgram()
        .args(["--weight-sum-mode", "cumulative", "preconfig"])
        .arg(fixture("preconfig.json"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid subcharacteristic"));
}

#[test]
fn test_cumulative_mode_from_config_file() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("msgram.toml");
    fs::write(&config, "weight_sum_mode = \"cumulative\"\n").unwrap();

    msgram()
        .arg("--config")
        .arg(&config)
        .arg("preconfig")
        .arg(fixture("preconfig.json"))
        .assert()
        .code(3);

    // Command-line flag overrides the file
    msgram()
        .arg("--config")
        .arg(&config)
        .args(["--weight-sum-mode", "per_group", "preconfig"])
        .arg(fixture("preconfig.json"))
        .assert()
        .success();
}

#[test]
fn test_invalid_weight_sum_mode_flag() {
    msgram()
        .args(["--weight-sum-mode", "sometimes", "preconfig"])
        .arg(fixture("preconfig.json"))
        .assert()
        .code(2);
}
