//! Integration tests for the demanda CLI
//!
//! Only paths that never reach the network are exercised here; routing
//! against live backends is covered by the core crate's tests with fakes.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn demanda_cmd() -> Command {
    Command::cargo_bin("demanda").unwrap()
}

#[test]
fn test_help_lists_commands() {
    demanda_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ask"))
        .stdout(predicate::str::contains("chat"))
        .stdout(predicate::str::contains("batch"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_ask_without_question_fails() {
    demanda_cmd()
        .arg("ask")
        .arg("   ")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No question given"));
}

#[test]
fn test_batch_rejects_file_without_required_columns() {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("bad.csv");
    fs::write(&csv_path, "producto,dia\nPOLLO,2025-12-31\n").unwrap();

    demanda_cmd()
        .arg("batch")
        .arg(&csv_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("'material' and 'fecha'"));
}

#[test]
fn test_batch_with_missing_file_fails() {
    demanda_cmd()
        .arg("batch")
        .arg("/nonexistent/batch.csv")
        .assert()
        .failure();
}

#[test]
fn test_config_masks_api_keys() {
    demanda_cmd()
        .arg("config")
        .env("DEMANDA_FORECAST_API_KEY", "super-secret-token")
        .assert()
        .success()
        .stdout(predicate::str::contains("super-secret-token").not());
}
