//! Shared test fixtures for store integration tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// One app entry with the required fields filled in.
pub fn app_json(name: &str, featured: bool) -> Value {
    json!({
        "name": name,
        "version": "1.0.0",
        "description": format!("{name} in one line"),
        "long_description": format!("{name} explained at length"),
        "icon_url": format!("icons/{}.png", name.to_lowercase()),
        "category": "Utilities",
        "publisher": { "name": "Acme" },
        "featured": featured,
        "gallery": []
    })
}

/// Store "Demo" with the single featured app `Calc` and an empty gallery.
pub fn demo_store() -> Value {
    json!({
        "storeName": "Demo",
        "storeLogo": "logo.png",
        "apps": [app_json("Calc", true)]
    })
}

/// Store with three apps; `B` and `C` are both featured.
///
/// `B` carries every optional field and a two-image gallery.
pub fn sample_store() -> Value {
    let mut b = app_json("B", true);
    b["license"] = json!("MIT");
    b["website"] = json!("https://b.example.com");
    b["download_url"] = json!("downloads/b.zip");
    b["gallery"] = json!([
        { "image_url": "shots/b1.png", "title": "Start screen" },
        { "image_url": "shots/b2.png", "title": "Settings" }
    ]);

    json!({
        "storeName": "Sample Store",
        "storeLogo": "sample.png",
        "apps": [app_json("A", false), b, app_json("C", true)]
    })
}

/// Writes `gstore.json` into a fresh temporary store directory.
pub fn write_store(descriptor: &Value) -> TempDir {
    write_raw_store(
        &serde_json::to_string_pretty(descriptor).expect("Failed to serialize descriptor"),
    )
}

/// Writes raw descriptor text, for malformed-input tests.
pub fn write_raw_store(content: &str) -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("gstore.json"), content).expect("Failed to write descriptor");
    temp_dir
}

/// Path of a store directory as a command-line argument.
pub fn path_arg(path: &Path) -> &str {
    path.to_str().expect("Temp path should be valid UTF-8")
}
