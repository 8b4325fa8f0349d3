//! Terminal browser launcher.

use clap::Args;

use crate::cli::common::{load_config, resolve_source, CliError, CliResult};
use crate::router::MAIN_FRAGMENT;
use crate::tui;

/// Browse a store in the terminal
#[derive(Debug, Clone, Args)]
pub struct BrowseArgs {
    /// Store directory, descriptor file, or http(s) URL
    #[arg(value_name = "SOURCE")]
    pub source: Option<String>,

    /// Fragment to open once the store is loaded (e.g. "#/app/Calc")
    #[arg(short, long, default_value = MAIN_FRAGMENT, allow_hyphen_values = true)]
    pub fragment: String,
}

impl BrowseArgs {
    /// Execute the browse command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config();
        let source = resolve_source(self.source.as_deref(), &config)?;

        tui::run_browser(config, source, self.fragment.clone())
            .map_err(|e| CliError::io(format!("{e:#}")))
    }
}
