//! System clipboard access for the install dialog.

use anyhow::{Context, Result};

/// Puts text on the system clipboard.
pub fn copy_text(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new().context("Clipboard is not available")?;
    clipboard
        .set_text(text.to_owned())
        .context("Failed to copy to clipboard")
}
