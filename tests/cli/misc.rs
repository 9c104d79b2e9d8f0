use crate::support::msgram;
use predicates::prelude::*;

// ============================================================================
// Help, version and exit code tests
// ============================================================================

#[test]
fn test_help_flag() {
    msgram()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: msgram"))
        .stdout(predicate::str::contains("preconfig"))
        .stdout(predicate::str::contains("components"));
}

#[test]
fn test_version_flag() {
    msgram()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("msgram"));
}

#[test]
fn test_no_command_prints_banner() {
    msgram()
        .assert()
        .success()
        .stdout(predicate::str::contains("msgram --help"));
}

#[test]
fn test_unknown_format_exit_code_2() {
    msgram().args(["--format", "invalid", "metrics"]).assert().code(2);
}

#[test]
fn test_unknown_argument_json_usage_error() {
    msgram()
        .args(["--format", "json", "metrics", "--bogus-flag"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

#[test]
fn test_unknown_command_exit_code_2() {
    msgram().arg("frobnicate").assert().code(2);
}

#[test]
fn test_repeated_format_json_usage_error() {
    msgram()
        .args(["--format", "json", "--format", "json", "metrics"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

#[test]
fn test_records_usage_error_line() {
    msgram()
        .args(["--format=records", "frobnicate"])
        .assert()
        .code(2)
        .stderr(predicate::str::starts_with("E code=2 type=usage_error \""));
}

#[test]
fn test_quiet_hides_message_but_keeps_data_exit_code() {
    msgram()
        .args(["--quiet", "preconfig", "missing.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("error:").not());
}

#[test]
fn test_quiet_still_reports_json_errors() {
    msgram()
        .args(["--quiet", "--format", "json", "preconfig", "missing.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"file_not_found\""));
}

#[test]
fn test_records_data_error_line() {
    msgram()
        .args(["--format", "records", "preconfig", "missing.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("E code=3 type=file_not_found"));
}
