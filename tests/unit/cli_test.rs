//! CLI surface tests

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn version_command_prints_version() {
    Command::cargo_bin("testkeeper")
        .unwrap()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_command_prints_version() {
    Command::cargo_bin("testkeeper")
        .unwrap()
        .assert()
        .success()
        .stdout(predicate::str::contains("testkeeper v"));
}

#[test]
fn help_describes_the_gate() {
    Command::cargo_bin("testkeeper")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Gate pull requests"));
}

#[test]
fn check_rejects_malformed_repo_slug() {
    Command::cargo_bin("testkeeper")
        .unwrap()
        .args(["check", "not-a-slug", "abc123"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid repository slug"));
}

#[test]
fn check_rejects_missing_config_path() {
    Command::cargo_bin("testkeeper")
        .unwrap()
        .args(["--config", "/nonexistent/testkeeper.toml", "check", "o/r", "abc123"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read config file"));
}
