//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::{Config, ThemeMode};
use clap::{Args, Subcommand};
use serde::Serialize;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Store opened when no source is given
    #[arg(long, value_name = "SOURCE")]
    source: Option<String>,

    /// External CLI named in install commands
    #[arg(long, value_name = "CLI")]
    install_cli: Option<String>,

    /// Theme mode (auto, light, or dark)
    #[arg(long, value_name = "MODE")]
    theme: Option<String>,

    /// Public URL the web server advertises for its store
    #[arg(long, value_name = "URL")]
    public_url: Option<String>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput<'a> {
    store: StoreOutput<'a>,
    ui: UiOutput,
    web: WebOutput<'a>,
}

#[derive(Serialize, Debug)]
struct StoreOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    default_source: Option<&'a str>,
    install_cli: &'a str,
    descriptor_file: &'a str,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme: String,
}

#[derive(Serialize, Debug)]
struct WebOutput<'a> {
    host: &'a str,
    port: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    public_url: Option<&'a str>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            output_json(&config)?;
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.source.is_none()
            && self.install_cli.is_none()
            && self.theme.is_none()
            && self.public_url.is_none()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --source, --install-cli, --theme, or --public-url",
            ));
        }

        let mut config = Config::load().unwrap_or_default();

        if let Some(source) = &self.source {
            config.store.default_source = if source.is_empty() {
                None
            } else {
                Some(source.clone())
            };
        }

        if let Some(cli) = &self.install_cli {
            config.store.install_cli.clone_from(cli);
        }

        if let Some(theme) = &self.theme {
            config.ui.theme_mode =
                ThemeMode::parse(theme).map_err(|e| CliError::validation(e.to_string()))?;
        }

        if let Some(url) = &self.public_url {
            config.web.public_url = if url.is_empty() {
                None
            } else {
                Some(url.clone())
            };
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("{e:#}")))?;

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

fn theme_name(mode: ThemeMode) -> String {
    format!("{mode:?}").to_lowercase()
}

/// Output configuration in JSON format
fn output_json(config: &Config) -> CliResult<()> {
    let output = ConfigOutput {
        store: StoreOutput {
            default_source: config.store.default_source.as_deref(),
            install_cli: &config.store.install_cli,
            descriptor_file: &config.store.descriptor_file,
        },
        ui: UiOutput {
            theme: theme_name(config.ui.theme_mode),
        },
        web: WebOutput {
            host: &config.web.host,
            port: config.web.port,
            public_url: config.web.public_url.as_deref(),
        },
    };

    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::io(format!("Failed to serialize configuration to JSON: {e}")))?;

    println!("{json}");
    Ok(())
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("GStore Configuration");
    println!("====================");
    println!();

    println!("Store:");
    match &config.store.default_source {
        Some(source) => println!("  Default Source: {source}"),
        None => println!("  Default Source: (not configured)"),
    }
    println!("  Install CLI: {}", config.store.install_cli);
    println!("  Descriptor File: {}", config.store.descriptor_file);
    println!();

    println!("UI:");
    println!("  Theme Mode: {}", theme_name(config.ui.theme_mode));
    println!();

    println!("Web:");
    println!("  Listen: {}:{}", config.web.host, config.web.port);
    match &config.web.public_url {
        Some(url) => println!("  Public URL: {url}"),
        None => println!("  Public URL: (derived from request host)"),
    }
    println!();
}
