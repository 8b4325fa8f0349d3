//! Headless rendering of the view a fragment selects.

use clap::{Args, ValueEnum};
use serde::Serialize;
use std::fmt::Write;

use crate::cli::common::{
    load_config, resolve_location, resolve_source, CliError, CliResult,
};
use crate::loader::load_catalog;
use crate::render::html::{detail_view_html, load_failure_html, main_view_html};
use crate::render::{DetailView, LoadFailureView, MainView};
use crate::router::MAIN_FRAGMENT;
use crate::session::{Session, SessionState, VisibleView};

/// Output format of the render command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RenderFormat {
    /// Plain text summary
    Text,
    /// View-model as JSON
    Json,
    /// HTML fragment, as served by the web shell
    Html,
}

/// Render the view selected by a fragment
#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    /// Store directory, descriptor file, or http(s) URL
    #[arg(value_name = "SOURCE")]
    pub source: Option<String>,

    /// URL fragment to resolve (e.g. "#/app/Calc")
    #[arg(short, long, default_value = MAIN_FRAGMENT, allow_hyphen_values = true)]
    pub fragment: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = RenderFormat::Text)]
    pub format: RenderFormat,

    /// Base URL of the store page (defaults to the store location)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,
}

/// JSON document printed with `--format json`.
#[derive(Debug, Serialize)]
#[serde(tag = "view", rename_all = "lowercase")]
enum RenderOutput<'a> {
    Main {
        fragment: &'a str,
        model: &'a MainView,
    },
    Detail {
        fragment: &'a str,
        model: &'a DetailView,
    },
    Error {
        model: &'a LoadFailureView,
    },
}

impl RenderArgs {
    /// Execute the render command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config();
        let source = resolve_source(self.source.as_deref(), &config)?;
        let location = resolve_location(&source, self.base_url.as_deref())?;

        let mut session = Session::new(location, config.store.install_cli.clone(), self.fragment.clone());
        session.finish_load(load_catalog(&source, &config.store.descriptor_file));

        let display = session.display();

        if let SessionState::LoadFailed(message) = session.state() {
            if let Some(failure) = &display.load_failure {
                self.print_failure(failure)?;
            }
            return Err(CliError::io(message.clone()));
        }

        match display.visible {
            VisibleView::Main => {
                let view = display
                    .main
                    .as_ref()
                    .ok_or_else(|| CliError::io("Main view was not rendered"))?;
                self.print_main(session.fragment(), view)
            }
            VisibleView::Detail => {
                let view = display
                    .detail
                    .as_ref()
                    .ok_or_else(|| CliError::io("Detail view was not rendered"))?;
                self.print_detail(session.fragment(), view)
            }
        }
    }

    fn print_main(&self, fragment: &str, view: &MainView) -> CliResult<()> {
        match self.format {
            RenderFormat::Text => print!("{}", main_view_text(view)),
            RenderFormat::Json => print_json(&RenderOutput::Main {
                fragment,
                model: view,
            })?,
            RenderFormat::Html => print!("{}", main_view_html(view)),
        }
        Ok(())
    }

    fn print_detail(&self, fragment: &str, view: &DetailView) -> CliResult<()> {
        match self.format {
            RenderFormat::Text => print!("{}", detail_view_text(view)),
            RenderFormat::Json => print_json(&RenderOutput::Detail {
                fragment,
                model: view,
            })?,
            RenderFormat::Html => print!("{}", detail_view_html(view)),
        }
        Ok(())
    }

    fn print_failure(&self, view: &LoadFailureView) -> CliResult<()> {
        match self.format {
            RenderFormat::Text => eprintln!("✗ {}", view.message),
            RenderFormat::Json => print_json(&RenderOutput::Error { model: view })?,
            RenderFormat::Html => print!("{}", load_failure_html(view)),
        }
        Ok(())
    }
}

fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

/// Plain text rendering of the main view.
#[must_use]
pub fn main_view_text(view: &MainView) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "{}", view.store_name);
    let _ = writeln!(output, "{}", "=".repeat(view.store_name.chars().count()));
    let _ = writeln!(output);

    if let Some(featured) = &view.featured {
        let _ = writeln!(output, "Featured: {}", featured.name);
        let _ = writeln!(output, "  {}", featured.description);
        let _ = writeln!(output, "  → {}", featured.link);
        let _ = writeln!(output);
    }

    let _ = writeln!(output, "Apps ({}):", view.tiles.len());
    for tile in &view.tiles {
        let _ = writeln!(
            output,
            "  {} v{} - {}  [{}]",
            tile.name, tile.version, tile.description, tile.link
        );
    }

    output
}

/// Plain text rendering of the detail view.
#[must_use]
pub fn detail_view_text(view: &DetailView) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "{}", view.name);
    let _ = writeln!(output, "By {} | Category: {}", view.publisher, view.category);
    let _ = writeln!(output);
    let _ = writeln!(output, "{}", view.long_description);
    let _ = writeln!(output);
    let _ = writeln!(output, "Version: {}", view.version);
    if let Some(license) = &view.license {
        let _ = writeln!(output, "License: {license}");
    }
    if let Some(homepage) = &view.homepage {
        let _ = writeln!(output, "Homepage: {homepage}");
    }
    if let Some(download) = &view.download {
        let _ = writeln!(output, "Download: {download}");
    }
    let _ = writeln!(output);

    let _ = writeln!(output, "Gallery ({}):", view.gallery.len());
    for tile in &view.gallery {
        let _ = writeln!(output, "  {} ({})", tile.title, tile.image_url);
    }

    output
}
