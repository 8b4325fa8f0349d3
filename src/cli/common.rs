//! Shared plumbing for CLI commands: error type, exit codes, store loading.

use std::fmt;

use crate::config::Config;
use crate::loader::load_catalog;
use crate::location::{PageLocation, StoreSource};
use crate::models::Catalog;

/// Process exit codes used by headless commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Input was rejected (unknown app, invalid descriptor, bad option)
    Validation = 1,
    /// Reading or writing failed
    Io = 2,
}

/// Error returned by CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code the process should end with
    pub code: ExitCode,
    /// Human-readable message
    pub message: String,
}

impl CliError {
    /// Creates a validation error (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::Validation,
            message: message.into(),
        }
    }

    /// Creates an I/O error (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::Io,
            message: message.into(),
        }
    }

    /// Numeric exit code for `std::process::exit`.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.code as i32
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type of CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Loads the configuration, falling back to defaults when the file is unusable.
pub fn load_config() -> Config {
    Config::load().unwrap_or_else(|e| {
        tracing::warn!("Ignoring configuration: {e:#}");
        Config::default()
    })
}

/// Picks the store source: explicit argument, then configured default, then `.`.
pub fn resolve_source(arg: Option<&str>, config: &Config) -> CliResult<StoreSource> {
    let input = arg
        .or(config.store.default_source.as_deref())
        .unwrap_or(".");

    StoreSource::parse(input).map_err(|e| CliError::validation(format!("{e:#}")))
}

/// Page location for a store, honouring an explicit base URL.
pub fn resolve_location(source: &StoreSource, base_url: Option<&str>) -> CliResult<PageLocation> {
    match base_url {
        Some(url) => PageLocation::from_url(url)
            .map_err(|e| CliError::validation(format!("Invalid base URL: {e:#}"))),
        None => source
            .page_location()
            .map_err(|e| CliError::io(format!("{e:#}"))),
    }
}

/// Loads the catalog, mapping failures to an I/O error.
pub fn load_store(source: &StoreSource, config: &Config) -> CliResult<Catalog> {
    load_catalog(source, &config.store.descriptor_file).map_err(|e| CliError::io(format!("{e:#}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::validation("bad").exit_code(), 1);
        assert_eq!(CliError::io("broken").exit_code(), 2);
        assert_eq!(ExitCode::Success as i32, 0);
    }

    #[test]
    fn test_resolve_source_prefers_argument() {
        let mut config = Config::default();
        config.store.default_source = Some("https://configured.example/".to_string());

        let source = resolve_source(Some("https://arg.example/"), &config).unwrap();
        assert_eq!(source, StoreSource::Remote("https://arg.example/".to_string()));

        let source = resolve_source(None, &config).unwrap();
        assert_eq!(
            source,
            StoreSource::Remote("https://configured.example/".to_string())
        );
    }

    #[test]
    fn test_resolve_location_with_base_url() {
        let source = StoreSource::Remote("https://a.example/store/".to_string());
        let location = resolve_location(&source, Some("https://b.example/other/")).unwrap();
        assert_eq!(location.base_url, "https://b.example/other/");

        assert!(resolve_location(&source, Some("nope")).is_err());
    }
}
