//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the fixed names of the store surface.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "GStore";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "gstore";

/// File name of the store descriptor, resolved relative to the store base.
pub const DESCRIPTOR_FILE: &str = "gstore.json";

/// External command-line tool named in generated install commands.
pub const DEFAULT_INSTALL_CLI: &str = "gingee-cli";

/// Label of the copy button in the install dialog.
pub const COPY_LABEL: &str = "Copy";

/// Label shown on the copy button after a successful copy.
pub const COPIED_LABEL: &str = "Copied!";

/// How long the copy button keeps its "copied" label, in milliseconds.
pub const COPY_FEEDBACK_MS: u64 = 2000;
