use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_options() {
    Command::cargo_bin("fortune")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("--date"));
}

#[test]
fn test_version() {
    Command::cargo_bin("fortune")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_overlong_date_fails_before_tui() {
    Command::cargo_bin("fortune")
        .unwrap()
        .args(["--date", "2024-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn test_missing_config_fails_before_tui() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.toml");

    Command::cargo_bin("fortune")
        .unwrap()
        .arg("--config")
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}
