//! Data models for key regions, layout variants, and colors.
//!
//! This module contains the core data structures used throughout the crate.
//! Models are designed to be independent of the rendering engine and the
//! activation logic.

pub mod key_region;
pub mod rgb;
pub mod variant;

// Re-export all model types
pub use key_region::{KeyRegion, KeyRole};
pub use rgb::RgbColor;
pub use variant::{Language, LayoutVariant};
