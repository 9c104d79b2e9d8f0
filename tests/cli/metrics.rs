use crate::support::msgram;
use predicates::prelude::*;

// ============================================================================
// Metrics catalog tests
// ============================================================================

#[test]
fn test_metrics_human() {
    msgram()
        .arg("metrics")
        .assert()
        .success()
        .stdout(predicate::str::contains("comment_lines_density"))
        .stdout(predicate::str::contains("security_rating"));
}

#[test]
fn test_metrics_json() {
    let output = msgram()
        .args(["--format", "json", "metrics"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let metrics: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(metrics.len(), 12);
    assert_eq!(metrics[0], "files");
}

#[test]
fn test_metrics_records() {
    msgram()
        .args(["--format", "records", "metrics"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H msgram=1 records=1 mode=metrics count=12",
        ))
        .stdout(predicate::str::contains("T \"coverage\""));
}
