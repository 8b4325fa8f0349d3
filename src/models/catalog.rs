//! The store catalog loaded from `gstore.json`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::App;

/// Store identity plus the ordered list of applications.
///
/// A catalog is produced once by the loader and never mutated afterwards.
/// Router and renderer borrow it for the lifetime of the session.
///
/// # Ordering
///
/// `apps` keeps the descriptor's order. Tiles are rendered in that order and
/// lookups return the first match, so the catalog is never re-sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    /// Store display name (also used as the window title)
    pub store_name: String,
    /// Store logo location
    pub store_logo: String,
    /// Applications in rendering order
    pub apps: Vec<App>,
}

impl Catalog {
    /// Parses a catalog from descriptor JSON.
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Store descriptor does not have the expected structure")
    }

    /// Finds an application by exact, case-sensitive name.
    ///
    /// When several apps share a name the first one in catalog order wins.
    #[must_use]
    pub fn find_app(&self, name: &str) -> Option<&App> {
        self.apps.iter().find(|app| app.name == name)
    }

    /// Returns the first application flagged as featured, if any.
    #[must_use]
    pub fn featured_app(&self) -> Option<&App> {
        self.apps.iter().find(|app| app.featured)
    }

    /// Number of applications flagged as featured.
    #[must_use]
    pub fn featured_count(&self) -> usize {
        self.apps.iter().filter(|app| app.featured).count()
    }

    /// Names that appear more than once, each reported once, in first-seen order.
    #[must_use]
    pub fn duplicate_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();

        for app in &self.apps {
            if !seen.insert(app.name.as_str()) && reported.insert(app.name.as_str()) {
                duplicates.push(app.name.as_str());
            }
        }

        duplicates
    }
}
