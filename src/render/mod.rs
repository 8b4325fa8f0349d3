//! View rendering.
//!
//! Each view is a pure function from the catalog (and the page location) to
//! a structured view-model. Markup is produced separately by [`html`], so the
//! selection and fallback rules stay testable without any display surface.

pub mod detail_view;
pub mod html;
pub mod install;
pub mod main_view;

pub use detail_view::{render_detail, DetailView, GalleryTile, InstallAction};
pub use install::install_command;
pub use main_view::{render_main, AppTile, FeaturedPanel, MainView};

use serde::Serialize;

/// Visible error that replaces the app grid when the descriptor failed to load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadFailureView {
    /// Error message shown to the user
    pub message: String,
}

impl LoadFailureView {
    /// Creates the failure view for a load error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
