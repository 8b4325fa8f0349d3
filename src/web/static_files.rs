//! Embedded single-page shell for the web surface.
//!
//! `index.html`, the script and the stylesheet are compiled into the binary,
//! so a store directory only needs its descriptor and images.

use axum::{
    body::Body,
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::Embed;

/// Shell assets embedded at compile time from `assets/`.
#[derive(Embed)]
#[folder = "assets"]
#[include = "*.html"]
#[include = "*.js"]
#[include = "*.css"]
pub struct ShellAssets;

/// Serves the shell page.
pub fn serve_shell() -> Response {
    match ShellAssets::get("index.html") {
        Some(content) => file_response("index.html", content.data.into_owned()),
        None => (StatusCode::NOT_FOUND, "Shell not embedded").into_response(),
    }
}

/// GET /assets/{*path} - Serves an embedded shell asset.
pub async fn serve_asset(Path(path): Path<String>) -> Response {
    match ShellAssets::get(&path) {
        Some(content) => file_response(&path, content.data.into_owned()),
        None => (StatusCode::NOT_FOUND, "File not found").into_response(),
    }
}

/// Creates an HTTP response for a file with appropriate content type.
pub fn file_response(path: &str, content: Vec<u8>) -> Response {
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime.as_ref())
        .header(header::CACHE_CONTROL, cache_control_for_path(path))
        .body(Body::from(content))
        .unwrap_or_else(|_| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create response",
            )
                .into_response()
        })
}

/// Returns the Cache-Control header for a served path.
///
/// - HTML and JSON (shell page, store descriptor): always revalidate
/// - Everything else (scripts, styles, icons, gallery images): 1 hour
fn cache_control_for_path(path: &str) -> &'static str {
    let revalidate = std::path::Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("json"));

    if revalidate {
        "no-cache, must-revalidate"
    } else {
        "public, max-age=3600"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_control_for_path() {
        assert_eq!(
            cache_control_for_path("index.html"),
            "no-cache, must-revalidate"
        );
        assert_eq!(
            cache_control_for_path("gstore.json"),
            "no-cache, must-revalidate"
        );
        assert_eq!(cache_control_for_path("gstore.js"), "public, max-age=3600");
        assert_eq!(
            cache_control_for_path("icons/calc.png"),
            "public, max-age=3600"
        );
    }

    #[test]
    fn test_shell_assets_embedded() {
        assert!(ShellAssets::get("index.html").is_some());
        assert!(ShellAssets::get("gstore.js").is_some());
        assert!(ShellAssets::get("gstore.css").is_some());
    }
}
