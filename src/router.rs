//! Fragment-based routing.
//!
//! The whole navigational surface is the URL fragment: `#/app/<name>` selects
//! the detail view for `<name>`, every other value selects the main view.
//! A detail route naming an unknown app degrades silently to the main view.

use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

use crate::models::{App, Catalog};

/// Fragment that selects the main view.
pub const MAIN_FRAGMENT: &str = "#";

/// Prefix of detail routes.
pub const APP_ROUTE_PREFIX: &str = "#/app/";

/// Navigation intent resolved from a fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteIntent<'a> {
    /// Show the detail page of this app
    ShowDetail(&'a App),
    /// Show the gallery of all apps
    ShowMain,
}

impl RouteIntent<'_> {
    /// Returns true if this intent selects the detail view.
    #[must_use]
    pub const fn is_detail(&self) -> bool {
        matches!(self, RouteIntent::ShowDetail(_))
    }
}

fn app_route_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^#/app/(.+)").expect("app route pattern is valid"))
}

/// Extracts the app name captured by a detail route.
///
/// The capture is everything after `#/app/` up to the end of the line, taken
/// verbatim. Returns `None` when the pattern does not match, including
/// `#/app/` with nothing after it.
#[must_use]
pub fn app_route_name(fragment: &str) -> Option<&str> {
    app_route_pattern()
        .captures(fragment)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Resolves a fragment against the catalog.
#[must_use]
pub fn resolve_route<'a>(fragment: &str, catalog: &'a Catalog) -> RouteIntent<'a> {
    let Some(name) = app_route_name(fragment) else {
        return RouteIntent::ShowMain;
    };

    match catalog.find_app(name) {
        Some(app) => RouteIntent::ShowDetail(app),
        None => {
            // Route miss: fall back to the main view without surfacing an error
            debug!("No app named {:?}, falling back to main view", name);
            RouteIntent::ShowMain
        }
    }
}

/// Builds the detail route for an app name. The name is not encoded.
#[must_use]
pub fn app_fragment(name: &str) -> String {
    format!("{APP_ROUTE_PREFIX}{name}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Publisher;

    fn app(name: &str) -> App {
        App {
            name: name.to_string(),
            version: "1.0".to_string(),
            description: String::new(),
            long_description: String::new(),
            icon_url: String::new(),
            category: String::new(),
            license: None,
            website: None,
            download_url: None,
            publisher: Publisher {
                name: "Acme".to_string(),
            },
            featured: false,
            gallery: Vec::new(),
        }
    }

    fn catalog() -> Catalog {
        Catalog {
            store_name: "Demo".to_string(),
            store_logo: String::new(),
            apps: vec![app("Calc"), app("My App"), app("a/b"), app("%20x")],
        }
    }

    #[test]
    fn test_known_app_resolves_to_detail() {
        let catalog = catalog();
        match resolve_route("#/app/Calc", &catalog) {
            RouteIntent::ShowDetail(app) => assert_eq!(app.name, "Calc"),
            RouteIntent::ShowMain => panic!("expected detail route"),
        }
    }

    #[test]
    fn test_fallbacks_to_main() {
        let catalog = catalog();
        for fragment in ["", "#", "#/app/", "#/app/Missing", "#/other", "#/app", "/app/Calc"] {
            assert_eq!(
                resolve_route(fragment, &catalog),
                RouteIntent::ShowMain,
                "fragment {fragment:?} should show main"
            );
        }
    }

    #[test]
    fn test_name_is_taken_verbatim() {
        let catalog = catalog();

        // No decoding: the encoded form is a different name
        assert_eq!(resolve_route("#/app/My%20App", &catalog), RouteIntent::ShowMain);
        assert!(resolve_route("#/app/My App", &catalog).is_detail());
        assert!(resolve_route("#/app/%20x", &catalog).is_detail());

        // The remainder may contain slashes
        assert!(resolve_route("#/app/a/b", &catalog).is_detail());

        // No trimming
        assert_eq!(resolve_route("#/app/Calc ", &catalog), RouteIntent::ShowMain);
        assert_eq!(resolve_route("#/app/calc", &catalog), RouteIntent::ShowMain);
    }

    #[test]
    fn test_pattern_is_anchored_at_start() {
        assert_eq!(app_route_name("x#/app/Calc"), None);
        assert_eq!(app_route_name("#/app/Calc"), Some("Calc"));
        assert_eq!(app_route_name("#/app/"), None);
        assert_eq!(app_route_name("#/app//"), Some("/"));
    }

    #[test]
    fn test_app_fragment_round_trips() {
        let catalog = catalog();
        for app in &catalog.apps {
            let fragment = app_fragment(&app.name);
            assert_eq!(resolve_route(&fragment, &catalog), RouteIntent::ShowDetail(app));
        }
    }
}
