//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::constants::{DEFAULT_INSTALL_CLI, DESCRIPTOR_FILE};
use crate::location::PageLocation;

/// Environment variable that overrides the configuration directory.
pub const CONFIG_DIR_ENV: &str = "GSTORE_CONFIG_DIR";

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

impl ThemeMode {
    /// Parses a mode name ("auto", "dark" or "light", case-insensitive).
    pub fn parse(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            _ => anyhow::bail!("Invalid theme mode '{value}'. Must be 'auto', 'light', or 'dark'"),
        }
    }
}

/// Store browsing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store opened when no source is given on the command line
    #[serde(default)]
    pub default_source: Option<String>,
    /// External CLI named in install commands
    #[serde(default = "default_install_cli")]
    pub install_cli: String,
    /// Descriptor file name, resolved relative to the store base
    #[serde(default = "default_descriptor_file")]
    pub descriptor_file: String,
}

fn default_install_cli() -> String {
    DEFAULT_INSTALL_CLI.to_string()
}

fn default_descriptor_file() -> String {
    DESCRIPTOR_FILE.to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            default_source: None,
            install_cli: default_install_cli(),
            descriptor_file: default_descriptor_file(),
        }
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Web server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebConfig {
    /// Host to bind to
    #[serde(default = "default_web_host")]
    pub host: String,
    /// Port to listen on
    #[serde(default = "default_web_port")]
    pub port: u16,
    /// Public URL of the store; derived from the request host when unset
    #[serde(default)]
    pub public_url: Option<String>,
}

fn default_web_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_web_port() -> u16 {
    3002
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: default_web_host(),
            port: default_web_port(),
            public_url: None,
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/GStore/config.toml`
/// - macOS: `~/Library/Application Support/GStore/config.toml`
/// - Windows: `%APPDATA%\GStore\config.toml`
///
/// The directory can be overridden with `GSTORE_CONFIG_DIR`.
///
/// # Validation
///
/// - `install_cli` must be a non-empty single word
/// - `descriptor_file` must be a plain file name
/// - `public_url`, if set, must be an absolute URL
/// - `port` must not be 0
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Store settings
    #[serde(default)]
    pub store: StoreConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
    /// Web server settings
    #[serde(default)]
    pub web: WebConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    ///
    /// - Linux: `~/.config/GStore/`
    /// - macOS: `~/Library/Application Support/GStore/`
    /// - Windows: `%APPDATA%\GStore\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("GStore");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;

        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        let cli = &self.store.install_cli;
        if cli.is_empty() || cli.chars().any(char::is_whitespace) {
            anyhow::bail!("Install CLI must be a single non-empty word, got '{cli}'");
        }

        let descriptor = &self.store.descriptor_file;
        if descriptor.is_empty() || descriptor.contains(['/', '\\']) || descriptor == ".." {
            anyhow::bail!("Descriptor file must be a plain file name, got '{descriptor}'");
        }

        if let Some(public_url) = &self.web.public_url {
            PageLocation::from_url(public_url)
                .context(format!("Invalid public URL: {public_url}"))?;
        }

        if self.web.port == 0 {
            anyhow::bail!("Web port must not be 0");
        }

        Ok(())
    }
}
