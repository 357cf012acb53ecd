//! CLI smoke tests for skydist.
//!
//! These tests verify that the binary parses its arguments and returns
//! appropriate exit codes.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a Command for the skydist binary.
fn skydist_cmd() -> Command {
  cargo_bin_cmd!("skydist")
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_works() {
  skydist_cmd()
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("Usage"))
    .stdout(predicate::str::contains("--format"));
}

#[test]
fn version_flag_works() {
  skydist_cmd()
    .arg("--version")
    .assert()
    .success()
    .stdout(predicate::str::contains("skydist"));
}

#[test]
fn unknown_format_is_rejected() {
  skydist_cmd().args(["--format", "yaml"]).assert().failure();
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn empty_root_fails() {
  let temp = TempDir::new().unwrap();

  skydist_cmd()
    .arg(temp.path())
    .assert()
    .failure()
    .stderr(predicate::str::contains("tailwind.js not found"));

  assert!(!temp.path().join("dist").exists());
}

#[test]
fn missing_root_fails() {
  let temp = TempDir::new().unwrap();

  skydist_cmd()
    .arg(temp.path().join("does-not-exist"))
    .assert()
    .failure()
    .stderr(predicate::str::contains("Build failed"));
}
