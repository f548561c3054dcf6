//! Slateboard: on-surface virtual keyboard
//!
//! This library renders an on-screen keyboard inside host applications that
//! draw their interface on a texture-backed surface instead of native OS
//! widgets. It provides the panel layout generator, the per-language glyph
//! tables, the activation state machine, and the binding that routes key
//! activations into one external text field.
//!
//! Rendering is pluggable: the keyboard hands a declarative region and
//! content description to any [`render::UiSurface`] implementation. A
//! terminal engine plus loading/frame-stats overlay widgets ship behind
//! the `tui` feature.

// Module declarations
pub mod config;
pub mod constants;
pub mod keyboard;
pub mod models;
pub mod render;
pub mod services;
#[cfg(feature = "tui")]
pub mod tui;

// Re-export the host-facing surface
pub use keyboard::{FieldBinding, KeyboardState, VirtualKeyboard};
pub use models::{KeyRegion, KeyRole, Language, LayoutVariant};
pub use render::{RenderAdapter, UiSurface};
