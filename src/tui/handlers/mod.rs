//! Input handlers for the browser views and its overlays.

pub mod main;
pub mod popups;

pub use main::handle_main_input;
pub use popups::{handle_fragment_input, handle_overlay_input};
