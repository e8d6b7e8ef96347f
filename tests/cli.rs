//! Command-line tests for the username-registry binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("username-registry").unwrap();
    cmd.env_remove("USERNAME_SEED_FILE")
        .env_remove("USERNAME_SUGGESTIONS")
        .env_remove("USERNAME_MAX_SUGGESTION_ATTEMPTS")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_demo_output() {
    cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Is 'john_doe' available? false"))
        .stdout(predicate::str::contains("Is 'jane_smith' available? true"))
        .stdout(predicate::str::contains(
            "Suggestions for 'john_doe': [john_doe1, john_doe2, john_doe3]",
        ))
        .stdout(predicate::str::contains("Most attempted username: admin"));
}

#[test]
fn test_check_arguments() {
    cmd()
        .args(["Admin", "jane_smith"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Admin - TAKEN"))
        .stdout(predicate::str::contains("Try: Admin1, Admin2, Admin3"))
        .stdout(predicate::str::contains("jane_smith - AVAILABLE"))
        .stdout(predicate::str::contains("Most attempted: admin"));
}

#[test]
fn test_json_report() {
    let output = cmd().args(["--json", "admin", "newbie"]).output().unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["most_attempted"], "admin");
    assert_eq!(report["results"][0]["status"], "taken");
    assert_eq!(report["results"][0]["suggestions"][0], "admin1");
    assert_eq!(report["results"][1]["status"], "available");
    assert_eq!(report["attempts"]["total_attempts"], 1);
}

#[test]
fn test_seed_file_from_env() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"morpheus": "UID7"}}"#).unwrap();

    cmd()
        .env("USERNAME_SEED_FILE", file.path())
        .args(["morpheus", "admin"])
        .assert()
        .success()
        .stdout(predicate::str::contains("morpheus - TAKEN"))
        .stdout(predicate::str::contains("admin - AVAILABLE"));
}

#[test]
fn test_invalid_config_exits_with_error() {
    cmd()
        .env("USERNAME_MAX_SUGGESTION_ATTEMPTS", "zero")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Configuration problem"));
}

#[test]
fn test_oversized_suggestion_count_rejected() {
    cmd()
        .env("USERNAME_SUGGESTIONS", usize::MAX.to_string())
        .arg("admin")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cannot exceed"));
}

#[test]
fn test_unknown_flag_rejected() {
    cmd()
        .args(["-v", "admin"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown option: -v"))
        .stdout(predicate::str::contains("USAGE:"))
        .stdout(predicate::str::contains("TAKEN").not());
}

#[test]
fn test_help() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE:"));
}
