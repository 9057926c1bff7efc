// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use tempfile::TempDir;

const MEDICINES: &str = r#"[
    {"identity": "Aspirin", "quantity": 8, "threshold": 10, "category": "Analgesic", "expiry": "2026-11-20"},
    {"identity": "Paracetamol", "quantity": 64, "threshold": 20, "category": "Analgesic"},
    {"identity": "Amoxicillin", "quantity": 25, "threshold": 25, "category": "Antibiotic"},
    {"identity": "Metformin", "quantity": 91, "threshold": 30}
]"#;

fn workspace(records: &str) -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("records.json"), records).expect("write records");
    dir
}

fn cli(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("stockwatch-cli").expect("binary built");
    cmd.arg("--records")
        .arg(dir.join("records.json"))
        .arg("--config-dir")
        .arg(dir.join("config"));
    cmd
}

fn stdout_json(cmd: &mut Command) -> Value {
    let out = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&out).expect("stdout is JSON")
}

fn save_config(dir: &Path, prefs: &str) -> PathBuf {
    let config = dir.join("config");
    fs::create_dir_all(&config).unwrap();
    let path = config.join("dashboard.json");
    fs::write(&path, prefs).unwrap();
    path
}

#[test]
fn summary_counts_statuses() {
    let dir = workspace(MEDICINES);
    let value = stdout_json(cli(dir.path()).arg("summary"));
    assert_eq!(value, json!({"LowStock": 2, "Sufficient": 2}));
}

#[test]
fn names_are_distinct_in_order() {
    let dir = workspace(MEDICINES);
    let value = stdout_json(cli(dir.path()).arg("names"));
    assert_eq!(
        value,
        json!(["Aspirin", "Paracetamol", "Amoxicillin", "Metformin"])
    );
}

#[test]
fn query_filters_by_category_and_status() {
    let dir = workspace(MEDICINES);
    let value = stdout_json(cli(dir.path()).args([
        "query",
        "--category",
        "analg",
        "--status",
        "low-stock",
    ]));
    let rows = value["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["identity"], "Aspirin");
    assert_eq!(value["summary"], json!({"LowStock": 1}));
}

#[test]
fn query_uses_slider_default_as_ceiling() {
    let dir = workspace(MEDICINES);
    let value = stdout_json(cli(dir.path()).arg("query"));
    // Default slider value is 10: only Aspirin (8) is at or below it.
    let low = value["at_or_below"].as_array().unwrap();
    assert_eq!(low.len(), 1);
    assert_eq!(low[0]["identity"], "Aspirin");
    assert_eq!(value["rows"].as_array().unwrap().len(), 4);
}

#[test]
fn invalid_record_fails_with_message() {
    let dir = workspace(r#"[{"identity": "Broken", "quantity": -1, "threshold": 5}]"#);
    cli(dir.path())
        .arg("summary")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid record `Broken`"));
}

#[test]
fn max_quantity_is_clamped_to_saved_slider() {
    let dir = workspace(MEDICINES);
    save_config(
        dir.path(),
        r#"{"quantity_slider": {"min": 0, "max": 20, "default": 10}}"#,
    );
    // 30 would also admit Amoxicillin (25); the slider stops at 20.
    let value = stdout_json(cli(dir.path()).args(["query", "--max-quantity", "30"]));
    let low = value["at_or_below"].as_array().unwrap();
    assert_eq!(low.len(), 1);
    assert_eq!(low[0]["identity"], "Aspirin");
}

#[test]
fn negative_max_quantity_is_rejected() {
    let dir = workspace(MEDICINES);
    cli(dir.path())
        .args(["query", "--max-quantity=-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--max-quantity"));
}

#[test]
fn saved_prefs_seed_queries() {
    let dir = workspace(MEDICINES);
    save_config(dir.path(), r#"{"category_filter": "Antibiotic"}"#);
    let value = stdout_json(cli(dir.path()).arg("query"));
    let rows = value["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["identity"], "Amoxicillin");
}

#[test]
fn prefs_save_writes_config_file() {
    let dir = workspace(MEDICINES);
    let value = stdout_json(cli(dir.path()).args(["prefs", "--save"]));
    assert_eq!(value["quantity_slider"]["default"], 10);
    assert!(dir.path().join("config").join("dashboard.json").is_file());
}

#[test]
fn prefs_save_refuses_to_overwrite_invalid_saved_prefs() {
    let dir = workspace(MEDICINES);
    let saved = r#"{"category_filter":"ICU","quantity_slider":{"min":0,"max":10,"default":50}}"#;
    let path = save_config(dir.path(), saved);
    cli(dir.path())
        .args(["prefs", "--save"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("refusing to overwrite"));
    assert_eq!(fs::read_to_string(path).unwrap(), saved);
}

#[test]
fn missing_records_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    cli(dir.path())
        .arg("summary")
        .assert()
        .failure()
        .stderr(predicate::str::contains("records.json"));
}
