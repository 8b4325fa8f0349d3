//! The detail view of a single app.

use serde::Serialize;

use crate::location::PageLocation;
use crate::models::{App, GalleryItem};
use crate::router::MAIN_FRAGMENT;

/// Install action offered on the detail page.
///
/// Carries only the app name; the command is formatted when the action fires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallAction {
    /// Name passed to the install command
    pub app_name: String,
}

/// One gallery thumbnail.
///
/// `image_url` and `title` are the two values the gallery modal reads when
/// the thumbnail is activated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryTile {
    /// Image location
    pub image_url: String,
    /// Caption
    pub title: String,
}

impl From<&GalleryItem> for GalleryTile {
    fn from(item: &GalleryItem) -> Self {
        Self {
            image_url: item.image_url.clone(),
            title: item.title.clone(),
        }
    }
}

/// Content of the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    /// App name
    pub name: String,
    /// Icon location
    pub icon_url: String,
    /// Publisher display name
    pub publisher: String,
    /// Category label
    pub category: String,
    /// Full description
    pub long_description: String,
    /// Version string
    pub version: String,
    /// License line, only when the app publishes one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    /// Homepage link, only when the app publishes one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    /// Absolute download link, only when the app publishes a download path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download: Option<String>,
    /// Install action
    pub install: InstallAction,
    /// Gallery tiles in order (possibly empty)
    pub gallery: Vec<GalleryTile>,
    /// Fragment of the "back to all apps" link
    pub back_link: String,
}

/// Renders the detail view for an app.
///
/// Missing optional fields are omitted from the view. The download link is
/// `<protocol>://<host>/` joined with the app's download path as-is.
#[must_use]
pub fn render_detail(app: &App, location: &PageLocation) -> DetailView {
    DetailView {
        name: app.name.clone(),
        icon_url: app.icon_url.clone(),
        publisher: app.publisher.name.clone(),
        category: app.category.clone(),
        long_description: app.long_description.clone(),
        version: app.version.clone(),
        license: app.license().map(String::from),
        homepage: app.website().map(String::from),
        download: app.download_url().map(|path| location.download_link(path)),
        install: InstallAction {
            app_name: app.name.clone(),
        },
        gallery: app.gallery.iter().map(GalleryTile::from).collect(),
        back_link: MAIN_FRAGMENT.to_string(),
    }
}
