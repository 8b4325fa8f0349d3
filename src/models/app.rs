//! Application entries listed by a store.

use serde::{Deserialize, Deserializer, Serialize};

/// Publisher of an application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publisher {
    /// Display name of the publisher
    pub name: String,
}

/// One screenshot in an application's gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    /// Image location, used verbatim
    pub image_url: String,
    /// Caption shown under the thumbnail and in the gallery modal
    pub title: String,
}

/// An application entry in the catalog.
///
/// # Identity
///
/// `name` is the application's identifier. It is used verbatim as the route
/// key (`#/app/<name>`) and as the argument of the install command, so it is
/// never normalized, trimmed or decoded.
///
/// # Optional fields
///
/// `license`, `website` and `download_url` may be missing from the descriptor.
/// An empty string counts as missing: the accessors return `None` for both,
/// which lets the renderer omit the matching UI fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct App {
    /// Unique application name (route key)
    pub name: String,
    /// Version string, displayed as-is
    pub version: String,
    /// One-line summary shown on tiles and the featured panel
    pub description: String,
    /// Full description shown on the detail page
    pub long_description: String,
    /// Icon location
    pub icon_url: String,
    /// Category label
    pub category: String,
    /// License name, if published
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    /// Homepage location, if published
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Download path relative to the host root, if published
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    /// Publisher information
    pub publisher: Publisher,
    /// Whether the store wants this app promoted on the main view
    #[serde(default, deserialize_with = "null_as_default")]
    pub featured: bool,
    /// Screenshots, in display order
    #[serde(default, deserialize_with = "null_as_default")]
    pub gallery: Vec<GalleryItem>,
}

impl App {
    /// Returns the license if it is present and non-empty.
    #[must_use]
    pub fn license(&self) -> Option<&str> {
        non_empty(self.license.as_deref())
    }

    /// Returns the homepage if it is present and non-empty.
    #[must_use]
    pub fn website(&self) -> Option<&str> {
        non_empty(self.website.as_deref())
    }

    /// Returns the download path if it is present and non-empty.
    #[must_use]
    pub fn download_url(&self) -> Option<&str> {
        non_empty(self.download_url.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Reads an explicit `null` as the field's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
