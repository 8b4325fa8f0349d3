//! Data models for the store descriptor.
//!
//! This module contains the typed representation of `gstore.json`.
//! Models are independent of routing, rendering and any display surface.

pub mod app;
pub mod catalog;

// Re-export all model types
pub use app::{App, GalleryItem, Publisher};
pub use catalog::Catalog;
