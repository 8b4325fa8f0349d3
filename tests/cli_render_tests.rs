//! End-to-end tests for `gstore render`.

use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

mod fixtures;
use fixtures::*;

/// Path to the gstore binary
fn gstore_bin() -> &'static str {
    env!("CARGO_BIN_EXE_gstore")
}

/// Runs gstore with an empty, private config directory.
fn run(args: &[&str]) -> Output {
    let config_dir = TempDir::new().expect("Failed to create temp dir");
    Command::new(gstore_bin())
        .env("GSTORE_CONFIG_DIR", config_dir.path())
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_render_main_text() {
    let store = write_store(&sample_store());

    let output = run(&["render", path_arg(store.path())]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "Render should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Sample Store\n"));
    assert!(stdout.contains("Featured: B"));
    assert!(stdout.contains("Apps (3):"));
}

#[test]
fn test_render_detail_json() {
    let store = write_store(&sample_store());

    let output = run(&[
        "render",
        path_arg(store.path()),
        "--fragment",
        "#/app/B",
        "--format",
        "json",
        "--base-url",
        "https://host/store/",
    ]);

    assert_eq!(output.status.code(), Some(0));

    let result: Value = serde_json::from_slice(&output.stdout).expect("Should parse JSON output");
    assert_eq!(result["view"], "detail");
    assert_eq!(result["fragment"], "#/app/B");
    assert_eq!(result["model"]["name"], "B");
    assert_eq!(result["model"]["license"], "MIT");
    assert_eq!(result["model"]["download"], "https://host/downloads/b.zip");
    assert_eq!(result["model"]["gallery"].as_array().unwrap().len(), 2);
}

#[test]
fn test_render_unknown_app_falls_back_to_main() {
    let store = write_store(&demo_store());

    let output = run(&[
        "render",
        path_arg(store.path()),
        "-f",
        "#/app/Missing",
        "--format",
        "json",
    ]);

    assert_eq!(output.status.code(), Some(0));

    let result: Value = serde_json::from_slice(&output.stdout).expect("Should parse JSON output");
    assert_eq!(result["view"], "main");
    assert_eq!(result["model"]["featured"]["name"], "Calc");
}

#[test]
fn test_render_html_detail() {
    let store = write_store(&demo_store());

    let output = run(&[
        "render",
        path_arg(store.path()),
        "--fragment",
        "#/app/Calc",
        "--format",
        "html",
    ]);

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Back to All Apps"));
    assert!(stdout.contains(r#"data-app-name="Calc""#));
    assert!(!stdout.contains("License:"));
}

#[test]
fn test_render_load_failure() {
    let store = write_raw_store(r#"{"storeName": "Broken"}"#);

    let output = run(&["render", path_arg(store.path()), "--format", "html"]);

    assert_eq!(output.status.code(), Some(2));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(r#"<p class="text-danger">"#));
}

#[test]
fn test_render_missing_store() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let missing = temp_dir.path().join("nowhere");

    let output = run(&["render", path_arg(&missing)]);

    assert_eq!(output.status.code(), Some(2));
}
