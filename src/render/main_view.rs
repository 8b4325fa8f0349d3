//! The main view: featured panel plus one tile per app.

use serde::Serialize;

use crate::models::{App, Catalog};
use crate::router::app_fragment;

/// Promoted panel for the featured app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeaturedPanel {
    /// App name
    pub name: String,
    /// Short description
    pub description: String,
    /// Icon location
    pub icon_url: String,
    /// Fragment of the app's detail page
    pub link: String,
}

/// Summary tile in the app grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppTile {
    /// App name
    pub name: String,
    /// App version
    pub version: String,
    /// Short description
    pub description: String,
    /// Icon location
    pub icon_url: String,
    /// Fragment of the app's detail page
    pub link: String,
}

impl From<&App> for AppTile {
    fn from(app: &App) -> Self {
        Self {
            name: app.name.clone(),
            version: app.version.clone(),
            description: app.description.clone(),
            icon_url: app.icon_url.clone(),
            link: app_fragment(&app.name),
        }
    }
}

/// Content of the main view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MainView {
    /// Store display name
    pub store_name: String,
    /// Store logo location
    pub store_logo: String,
    /// Featured panel, absent when no app is flagged
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<FeaturedPanel>,
    /// Tiles in catalog order
    pub tiles: Vec<AppTile>,
}

/// Renders the main view.
///
/// The featured panel shows the first app flagged `featured`; later flags are
/// ignored. Tiles follow catalog order. Rendering does not touch the catalog,
/// so repeated calls give identical views.
#[must_use]
pub fn render_main(catalog: &Catalog) -> MainView {
    let featured = catalog.featured_app().map(|app| FeaturedPanel {
        name: app.name.clone(),
        description: app.description.clone(),
        icon_url: app.icon_url.clone(),
        link: app_fragment(&app.name),
    });

    MainView {
        store_name: catalog.store_name.clone(),
        store_logo: catalog.store_logo.clone(),
        featured,
        tiles: catalog.apps.iter().map(AppTile::from).collect(),
    }
}
