//! GStore - app-store catalog browser
//!
//! `gstore [SOURCE]` opens the terminal browser; subcommands give headless,
//! scriptable access to the same views.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gstore::cli::{self, CliResult};
use gstore::constants::{APP_BINARY_NAME, APP_NAME};

/// GStore - browse an app store from the terminal
#[derive(Parser, Debug)]
#[command(
    name = APP_BINARY_NAME,
    author,
    version,
    about,
    long_about = None,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    /// Store directory, descriptor file, or http(s) URL
    #[arg(value_name = "SOURCE")]
    source: Option<String>,

    /// Enable verbose logging for headless commands
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Browse a store in the terminal
    #[cfg(feature = "ratatui")]
    Browse(cli::BrowseArgs),
    /// Print the view a fragment selects
    Render(cli::RenderArgs),
    /// Print the install command for an app
    InstallCommand(cli::InstallCommandArgs),
    /// Validate a store descriptor
    Validate(cli::ValidateArgs),
    /// Show or change configuration
    Config(cli::ConfigArgs),
}

/// Logs go to stderr so stdout stays parseable.
fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

impl Command {
    /// The terminal browser owns the screen, so it runs without a subscriber.
    const fn is_interactive(&self) -> bool {
        match self {
            #[cfg(feature = "ratatui")]
            Self::Browse(_) => true,
            _ => false,
        }
    }
}

#[cfg(feature = "ratatui")]
fn browse_default(source: Option<String>) -> CliResult<()> {
    cli::BrowseArgs {
        source,
        fragment: gstore::router::MAIN_FRAGMENT.to_string(),
    }
    .execute()
}

#[cfg(not(feature = "ratatui"))]
fn browse_default(_source: Option<String>) -> CliResult<()> {
    Err(cli::CliError::validation(format!(
        "{APP_NAME} was built without the terminal browser; use a subcommand"
    )))
}

fn run(cli: Cli) -> CliResult<()> {
    let command = match cli.command {
        Some(command) => command,
        None => return browse_default(cli.source),
    };

    if !command.is_interactive() {
        init_tracing(cli.verbose);
    }

    match command {
        #[cfg(feature = "ratatui")]
        Command::Browse(args) => args.execute(),
        Command::Render(args) => args.execute(),
        Command::InstallCommand(args) => args.execute(),
        Command::Validate(args) => args.execute(),
        Command::Config(args) => args.execute(),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{APP_NAME}: {e}");
        std::process::exit(e.exit_code());
    }
}
