//! Install command formatting for scripts.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{
    load_config, load_store, resolve_location, resolve_source, CliError, CliResult,
};
use crate::render::install_command;

/// Print the command that installs an app from a store
#[derive(Debug, Clone, Args)]
pub struct InstallCommandArgs {
    /// Store directory, descriptor file, or http(s) URL
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// App name, exactly as listed in the store
    #[arg(value_name = "NAME")]
    pub name: String,

    /// External CLI to name in the command (defaults to the configured one)
    #[arg(long, value_name = "CLI")]
    pub cli: Option<String>,

    /// Base URL of the store page (defaults to the store location)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct InstallCommandOutput<'a> {
    app: &'a str,
    command: &'a str,
}

impl InstallCommandArgs {
    /// Execute the install-command command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config();
        let source = resolve_source(Some(&self.source), &config)?;
        let location = resolve_location(&source, self.base_url.as_deref())?;
        let catalog = load_store(&source, &config)?;

        if catalog.find_app(&self.name).is_none() {
            return Err(CliError::validation(format!(
                "App '{}' not found in store '{}'",
                self.name, catalog.store_name
            )));
        }

        let cli = self.cli.as_deref().unwrap_or(&config.store.install_cli);
        let command = install_command(cli, &self.name, &location.base_url);

        if self.json {
            let output = InstallCommandOutput {
                app: &self.name,
                command: &command,
            };
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
            println!("{json}");
        } else {
            println!("{command}");
        }

        Ok(())
    }
}
