//! GStore Web Server Binary
//!
//! Serves a store directory together with the embedded single-page shell.
//!
//! # Usage
//!
//! ```bash
//! # Serve the current directory on the configured port (3002 by default)
//! gstore-web
//!
//! # Serve another store on port 8080
//! gstore-web --port 8080 --store ./my-store
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gstore::config::Config;
use gstore::web;

/// GStore Web Server - store shell and view API
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on (defaults to the configured port)
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to (defaults to the configured host)
    #[arg(long)]
    host: Option<String>,

    /// Store directory containing gstore.json.
    /// Defaults to the configured default source, then the current directory.
    #[arg(short, long)]
    store: Option<PathBuf>,

    /// Public URL the store is reachable at; used in install commands and
    /// download links
    #[arg(long)]
    public_url: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::load().unwrap_or_default();
    if let Some(url) = args.public_url {
        config.web.public_url = Some(url);
    }
    config.validate()?;

    let store_root = match args.store {
        Some(path) => path,
        None => config
            .store
            .default_source
            .as_deref()
            .filter(|source| !source.starts_with("http://") && !source.starts_with("https://"))
            .map_or_else(|| PathBuf::from("."), PathBuf::from),
    };

    if !store_root.is_dir() {
        anyhow::bail!("Store directory not found: {}", store_root.display());
    }

    info!("Store root: {}", store_root.display());

    let host = args.host.unwrap_or_else(|| config.web.host.clone());
    let port = args.port.unwrap_or(config.web.port);
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .with_context(|| format!("Invalid listen address {host}:{port}"))?;

    web::run_server(config, store_root, addr).await
}
