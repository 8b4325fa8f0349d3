//! End-to-end tests for `gstore validate`.

use std::process::{Command, Output};

use serde_json::{json, Value};
use tempfile::TempDir;

mod fixtures;
use fixtures::*;

/// Path to the gstore binary
fn gstore_bin() -> &'static str {
    env!("CARGO_BIN_EXE_gstore")
}

fn run(args: &[&str]) -> Output {
    let config_dir = TempDir::new().expect("Failed to create temp dir");
    Command::new(gstore_bin())
        .env("GSTORE_CONFIG_DIR", config_dir.path())
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_validate_clean_store() {
    let store = write_store(&demo_store());

    let output = run(&["validate", path_arg(store.path())]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("✓ Validation passed"));
    assert!(stdout.contains("Store: Demo"));
}

#[test]
fn test_validate_reports_warnings_as_json() {
    let store = write_store(&sample_store());

    let output = run(&["validate", path_arg(store.path()), "--json"]);

    // Warnings alone do not fail validation
    assert_eq!(output.status.code(), Some(0));

    let result: Value = serde_json::from_slice(&output.stdout).expect("Should parse JSON output");
    assert_eq!(result["valid"], true);
    assert_eq!(result["store_name"], "Sample Store");
    assert_eq!(result["app_count"], 3);

    let errors = result["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["severity"], "warning");
    assert!(errors[0]["message"]
        .as_str()
        .unwrap()
        .contains("only 'B' will be shown"));
}

#[test]
fn test_validate_strict_fails_on_warnings() {
    let mut descriptor = demo_store();
    descriptor["apps"]
        .as_array_mut()
        .unwrap()
        .push(app_json("Calc", false));
    let store = write_store(&descriptor);

    let output = run(&["validate", path_arg(store.path()), "--strict", "--json"]);

    assert_eq!(output.status.code(), Some(1));

    let result: Value = serde_json::from_slice(&output.stdout).expect("Should parse JSON output");
    assert_eq!(result["valid"], false);
    assert_eq!(result["errors"][0]["app"], "Calc");
}

#[test]
fn test_validate_empty_gallery_title() {
    let mut descriptor = demo_store();
    descriptor["apps"][0]["gallery"] = json!([{ "image_url": "shot.png", "title": "" }]);
    let store = write_store(&descriptor);

    let output = run(&["validate", path_arg(store.path()), "--json"]);

    let result: Value = serde_json::from_slice(&output.stdout).expect("Should parse JSON output");
    let errors = result["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert!(errors[0]["message"].as_str().unwrap().contains("no title"));
}

#[test]
fn test_validate_malformed_descriptor() {
    let store = write_raw_store("[1, 2, 3]");

    let output = run(&["validate", path_arg(store.path()), "--json"]);

    assert_eq!(output.status.code(), Some(1));

    let result: Value = serde_json::from_slice(&output.stdout).expect("Should parse JSON output");
    assert_eq!(result["valid"], false);
    assert_eq!(result["errors"][0]["severity"], "error");
}
