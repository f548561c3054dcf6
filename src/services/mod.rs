//! Panel geometry and content generation services.
//!
//! These are the pure, stateless halves of the keyboard: the layout
//! generator computes region geometry once per instance, and the content
//! table maps activation indices to glyphs per language and layout variant.

pub mod content;
pub mod geometry;

pub use content::content_for;
pub use geometry::generate_regions;
