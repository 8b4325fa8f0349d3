//! Install command formatting.
//!
//! The store never installs anything itself. It only formats the command an
//! external CLI runs to install an app from this store.

/// Formats `<cli> install-store-app <name> -g <store_base_url>`.
///
/// All parts are inserted verbatim.
#[must_use]
pub fn install_command(cli: &str, app_name: &str, store_base_url: &str) -> String {
    format!("{cli} install-store-app {app_name} -g {store_base_url}")
}
