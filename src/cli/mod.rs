//! CLI command handlers for GStore.
//!
//! Headless commands render views, print install commands and validate store
//! descriptors for scripts and CI; `browse` opens the terminal browser.

#[cfg(feature = "ratatui")]
pub mod browse;
pub mod common;
pub mod config;
pub mod install;
pub mod render;
pub mod validate;

// Re-export types used by main.rs and tests
#[cfg(feature = "ratatui")]
pub use browse::BrowseArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use install::InstallCommandArgs;
pub use render::{RenderArgs, RenderFormat};
pub use validate::ValidateArgs;
