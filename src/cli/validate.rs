//! Validation command for store descriptors.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{load_config, load_store, resolve_source, CliError, CliResult};
use crate::models::Catalog;

/// Validate a store descriptor and report suspicious entries
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Store directory, descriptor file, or http(s) URL
    #[arg(value_name = "SOURCE")]
    pub source: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Treat warnings as errors (exit non-zero)
    #[arg(long)]
    pub strict: bool,
}

/// One validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationMessage {
    /// "error" or "warning"
    pub severity: String,
    /// What was found
    pub message: String,
    /// App the finding refers to, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app: Option<String>,
}

impl ValidationMessage {
    fn error(message: impl Into<String>) -> Self {
        Self {
            severity: "error".to_string(),
            message: message.into(),
            app: None,
        }
    }

    fn warning(message: impl Into<String>, app: Option<&str>) -> Self {
        Self {
            severity: "warning".to_string(),
            message: message.into(),
            app: app.map(String::from),
        }
    }
}

/// Validation report.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResponse {
    /// Whether the descriptor loaded (and, in strict mode, had no warnings)
    pub valid: bool,
    /// Store name, when the descriptor loaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_name: Option<String>,
    /// Number of apps listed
    pub app_count: usize,
    /// Findings
    pub errors: Vec<ValidationMessage>,
}

/// Collects warnings for a loaded catalog.
///
/// None of these stop the store from being browsed: duplicates resolve to the
/// first app with that name and only the first featured app is promoted.
#[must_use]
pub fn catalog_warnings(catalog: &Catalog) -> Vec<ValidationMessage> {
    let mut warnings = Vec::new();

    for name in catalog.duplicate_names() {
        warnings.push(ValidationMessage::warning(
            format!("App name '{name}' is used more than once; only the first entry is reachable"),
            Some(name),
        ));
    }

    match catalog.featured_count() {
        0 => warnings.push(ValidationMessage::warning(
            "No app is marked as featured; the featured panel will be empty",
            None,
        )),
        1 => {}
        count => {
            let shown = catalog.featured_app().map(|app| app.name.as_str());
            warnings.push(ValidationMessage::warning(
                format!(
                    "{count} apps are marked as featured; only '{}' will be shown",
                    shown.unwrap_or_default()
                ),
                shown,
            ));
        }
    }

    for app in &catalog.apps {
        if app.name.is_empty() {
            warnings.push(ValidationMessage::warning("App with an empty name cannot be opened", None));
        }

        for (idx, item) in app.gallery.iter().enumerate() {
            if item.image_url.is_empty() {
                warnings.push(ValidationMessage::warning(
                    format!("Gallery entry {} has no image", idx + 1),
                    Some(&app.name),
                ));
            }
            if item.title.is_empty() {
                warnings.push(ValidationMessage::warning(
                    format!("Gallery entry {} has no title", idx + 1),
                    Some(&app.name),
                ));
            }
        }
    }

    warnings
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config();
        let source = resolve_source(self.source.as_deref(), &config)?;

        let response = match load_store(&source, &config) {
            Ok(catalog) => {
                let warnings = catalog_warnings(&catalog);
                ValidationResponse {
                    valid: !(self.strict && !warnings.is_empty()),
                    store_name: Some(catalog.store_name.clone()),
                    app_count: catalog.apps.len(),
                    errors: warnings,
                }
            }
            Err(e) => ValidationResponse {
                valid: false,
                store_name: None,
                app_count: 0,
                errors: vec![ValidationMessage::error(e.message)],
            },
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            if response.valid {
                println!("✓ Validation passed");
            } else {
                println!("✗ Validation failed");
            }

            if let Some(name) = &response.store_name {
                println!("\nStore: {name}");
                println!("Apps:  {}", response.app_count);
            }

            if !response.errors.is_empty() {
                println!("\nIssues:");
                for msg in &response.errors {
                    let prefix = if msg.severity == "error" {
                        "  ✗"
                    } else {
                        "  ⚠"
                    };
                    match &msg.app {
                        Some(app) => println!("{prefix} [{app}] {}", msg.message),
                        None => println!("{prefix} {}", msg.message),
                    }
                }
            }
        }

        if response.valid {
            Ok(())
        } else {
            Err(CliError::validation("Store validation failed"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(json: &str) -> Catalog {
        Catalog::from_json(json).unwrap()
    }

    fn app_json(name: &str, featured: bool) -> String {
        format!(
            r#"{{"name":"{name}","version":"1","description":"d","long_description":"l",
                "icon_url":"i.png","category":"c","publisher":{{"name":"p"}},"featured":{featured}}}"#
        )
    }

    #[test]
    fn test_clean_catalog_has_no_warnings() {
        let catalog = catalog(&format!(
            r#"{{"storeName":"Demo","storeLogo":"l.png","apps":[{},{}]}}"#,
            app_json("A", true),
            app_json("B", false)
        ));
        assert!(catalog_warnings(&catalog).is_empty());
    }

    #[test]
    fn test_duplicate_and_featured_warnings() {
        let catalog = catalog(&format!(
            r#"{{"storeName":"Demo","storeLogo":"l.png","apps":[{},{},{}]}}"#,
            app_json("A", true),
            app_json("A", false),
            app_json("B", true)
        ));

        let warnings = catalog_warnings(&catalog);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].message.contains("'A' is used more than once"));
        assert!(warnings[1].message.contains("only 'A' will be shown"));
        assert!(warnings.iter().all(|w| w.severity == "warning"));
    }

    #[test]
    fn test_no_featured_warning() {
        let catalog = catalog(&format!(
            r#"{{"storeName":"Demo","storeLogo":"l.png","apps":[{}]}}"#,
            app_json("A", false)
        ));

        let warnings = catalog_warnings(&catalog);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("No app is marked as featured"));
    }
}
