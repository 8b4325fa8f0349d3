//! GStore library
//!
//! Browses a static app-store catalog: a `gstore.json` descriptor listing
//! apps, a fragment router (`#/app/<name>`), pure view renderers and a
//! session state machine that ties them together. The terminal browser, the
//! headless CLI and the web server are thin hosts around [`session::Session`].

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod loader;
pub mod location;
pub mod models;
pub mod render;
pub mod router;
pub mod session;
#[cfg(feature = "ratatui")]
pub mod tui;
#[cfg(feature = "web")]
pub mod web;
