//! Web surface for GStore.
//!
//! Serves the single-page store shell and a small JSON API backed by the same
//! router and renderers as the terminal browser. The descriptor is loaded
//! once at startup; its result (catalog or failure) is shared read-only.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /api/store` - Store header (`storeName`, `storeLogo`)
//! - `GET /api/view?fragment=` - Rendered view for a fragment
//! - `GET /api/install/{name}` - Install command for an app
//! - `GET /assets/{*path}` - Embedded shell assets
//! - Anything else - store files (`gstore.json`, icons, images) from the store
//!   directory, falling back to the shell for non-file paths

pub mod static_files;

use std::net::SocketAddr;
use std::path::{Path as FsPath, PathBuf};
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::loader::load_catalog;
use crate::location::{PageLocation, StoreSource};
use crate::models::Catalog;
use crate::render::html::{detail_view_html, load_failure_html, main_view_html};
use crate::render::{install_command, render_detail, render_main, LoadFailureView};
use crate::router::{resolve_route, RouteIntent, MAIN_FRAGMENT};

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web server.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    config: Arc<Config>,
    /// Descriptor load result, immutable after startup
    store: Arc<Result<Catalog, String>>,
    /// Directory the store files are served from
    store_root: PathBuf,
}

impl AppState {
    /// Creates the state from a finished descriptor load.
    pub fn new(config: Config, store_root: PathBuf, catalog: anyhow::Result<Catalog>) -> Self {
        let store = catalog.map_err(|e| {
            warn!("Store load failed: {:#}", e);
            e.to_string()
        });

        Self {
            config: Arc::new(config),
            store: Arc::new(store),
            store_root,
        }
    }

    fn catalog(&self) -> Result<&Catalog, &str> {
        (*self.store).as_ref().map_err(String::as_str)
    }

    /// Page location for a request: the configured public URL, else the
    /// request's `Host` over plain http.
    ///
    /// A `Host` header that is not a bare authority falls back to `localhost`.
    fn location(&self, headers: &HeaderMap) -> PageLocation {
        if let Some(url) = &self.config.web.public_url {
            match PageLocation::from_url(url) {
                Ok(location) => return location,
                Err(e) => warn!("Ignoring public URL {url}: {e:#}"),
            }
        }

        let host = headers
            .get(header::HOST)
            .and_then(|value| value.to_str().ok())
            .filter(|host| {
                let plain = is_plain_authority(host);
                if !plain {
                    warn!("Ignoring malformed Host header {host:?}");
                }
                plain
            })
            .unwrap_or(DEFAULT_HOST);

        PageLocation::from_url(&format!("http://{host}/")).unwrap_or_else(|_| PageLocation {
            protocol: "http".to_string(),
            host: DEFAULT_HOST.to_string(),
            base_url: format!("http://{DEFAULT_HOST}/"),
        })
    }
}

const DEFAULT_HOST: &str = "localhost";

/// True for a `host[:port]` value that cannot change the path, query,
/// fragment or credentials of the URL it is placed in.
fn is_plain_authority(host: &str) -> bool {
    !host.is_empty()
        && !host
            .chars()
            .any(|c| matches!(c, '/' | '\\' | '?' | '#' | '@') || c.is_whitespace())
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Current health status (e.g., "healthy").
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Store header response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreResponse {
    /// Store name, also used as the page title
    pub store_name: String,
    /// Store logo location
    pub store_logo: String,
    /// Number of listed apps
    pub app_count: usize,
}

/// Query parameters for view rendering.
#[derive(Debug, Deserialize)]
pub struct ViewQuery {
    /// Fragment to resolve; the main view when absent.
    pub fragment: Option<String>,
}

/// Rendered view response.
#[derive(Debug, Serialize)]
pub struct ViewResponse {
    /// "main", "detail" or "error"
    pub view: String,
    /// Markup for the view container
    pub html: String,
    /// Fragment the view was rendered for
    pub fragment: String,
}

/// Install command response.
#[derive(Debug, Serialize)]
pub struct InstallResponse {
    /// Command to show in the install dialog
    pub command: String,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ApiError>)>;

fn store_unavailable(message: &str) -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(ApiError::with_details("Store is not available", message)),
    )
}

// ============================================================================
// Path validation
// ============================================================================

/// Validates a request path for a store file to prevent path traversal.
///
/// Every segment must be a plain, visible name.
fn validate_store_path(path: &str) -> Result<PathBuf, ApiError> {
    if path.is_empty() {
        return Err(ApiError::new("Path cannot be empty"));
    }

    if path.contains('\\') || path.starts_with('/') {
        return Err(ApiError::new(
            "Invalid path: absolute paths not allowed",
        ));
    }

    let mut relative = PathBuf::new();
    for segment in path.split('/') {
        if segment.is_empty() || segment == "." || segment == ".." {
            return Err(ApiError::new("Invalid path: path traversal not allowed"));
        }
        if segment.starts_with('.') {
            return Err(ApiError::new("Invalid path: hidden files not allowed"));
        }
        relative.push(segment);
    }

    Ok(relative)
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/store - Store header.
async fn get_store(State(state): State<AppState>) -> ApiResult<StoreResponse> {
    let catalog = state.catalog().map_err(store_unavailable)?;

    Ok(Json(StoreResponse {
        store_name: catalog.store_name.clone(),
        store_logo: catalog.store_logo.clone(),
        app_count: catalog.apps.len(),
    }))
}

/// GET /api/view - Render the view a fragment selects.
async fn get_view(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ViewQuery>,
) -> (StatusCode, Json<ViewResponse>) {
    let fragment = query
        .fragment
        .unwrap_or_else(|| MAIN_FRAGMENT.to_string());

    let catalog = match state.catalog() {
        Ok(catalog) => catalog,
        Err(message) => {
            let html = load_failure_html(&LoadFailureView::new(message));
            return (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ViewResponse {
                    view: "error".to_string(),
                    html,
                    fragment,
                }),
            );
        }
    };

    let (view, html) = match resolve_route(&fragment, catalog) {
        RouteIntent::ShowDetail(app) => {
            let location = state.location(&headers);
            ("detail", detail_view_html(&render_detail(app, &location)))
        }
        RouteIntent::ShowMain => ("main", main_view_html(&render_main(catalog))),
    };

    debug!("Rendered {} view for {:?}", view, fragment);

    (
        StatusCode::OK,
        Json(ViewResponse {
            view: view.to_string(),
            html,
            fragment,
        }),
    )
}

/// GET /api/install/{name} - Install command for an app.
async fn get_install(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(name): Path<String>,
) -> ApiResult<InstallResponse> {
    let catalog = state.catalog().map_err(store_unavailable)?;

    if catalog.find_app(&name).is_none() {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ApiError::new(format!("App not found: {name}"))),
        ));
    }

    let location = state.location(&headers);
    Ok(Json(InstallResponse {
        command: install_command(&state.config.store.install_cli, &name, &location.base_url),
    }))
}

/// Fallback - store files from disk, else the single-page shell.
async fn serve_store_or_shell(State(state): State<AppState>, uri: Uri) -> Response {
    let raw = uri.path().trim_start_matches('/');

    if raw.is_empty() {
        return static_files::serve_shell();
    }

    // Segments are checked after decoding so `%2e%2e` cannot slip through
    let decoded = match percent_decode_str(raw).decode_utf8() {
        Ok(decoded) => decoded,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiError::new("Invalid path: not valid UTF-8")),
            )
                .into_response()
        }
    };
    let path: &str = &decoded;

    let relative = match validate_store_path(path) {
        Ok(relative) => relative,
        Err(e) => return (StatusCode::BAD_REQUEST, Json(e)).into_response(),
    };

    let file = state.store_root.join(&relative);
    if file.is_file() {
        return match tokio::fs::read(&file).await {
            Ok(content) => static_files::file_response(path, content),
            Err(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::with_details(
                    "Failed to read store file",
                    e.to_string(),
                )),
            )
                .into_response(),
        };
    }

    if looks_like_file(&relative) {
        return (
            StatusCode::NOT_FOUND,
            Json(ApiError::new(format!("File not found: {path}"))),
        )
            .into_response();
    }

    static_files::serve_shell()
}

fn looks_like_file(path: &FsPath) -> bool {
    path.extension().is_some_and(|ext| !ext.is_empty())
}

// ============================================================================
// Router
// ============================================================================

/// Creates the axum router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    // The shell is meant to be opened from anywhere on the local network
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/store", get(get_store))
        .route("/api/view", get(get_view))
        .route("/api/install/{name}", get(get_install))
        .route("/assets/{*path}", get(static_files::serve_asset))
        .fallback(serve_store_or_shell)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the web server.
///
/// The descriptor in `store_root` is loaded once before the listener is
/// bound; a failed load still starts the server so the shell can show the
/// failure.
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn run_server(config: Config, store_root: PathBuf, addr: SocketAddr) -> anyhow::Result<()> {
    let source = StoreSource::Local(store_root.clone());
    let descriptor_file = config.store.descriptor_file.clone();
    let catalog = tokio::task::spawn_blocking(move || load_catalog(&source, &descriptor_file)).await?;

    let state = AppState::new(config, store_root, catalog);
    let app = create_router(state);

    info!("Starting GStore web server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
