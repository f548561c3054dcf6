//! Rendering engine boundary and refresh bookkeeping.
//!
//! The keyboard never draws anything itself. It hands a declarative
//! description (region geometry plus per-slot content) to an external
//! engine through [`UiSurface`], and the [`RenderAdapter`] tracks when that
//! description has changed so the engine only rebuilds when needed.

use std::collections::HashMap;

use crate::models::KeyRegion;

/// The external rendering engine's view of the keyboard.
///
/// An implementation owns a positioned, visibility-gated drawable surface
/// (a terminal panel, a canvas texture, a scene quad). It receives the full
/// declarative description on every rebuild; hit-testing pointer input back
/// to activation indices is the engine's and host's concern.
pub trait UiSurface {
    /// Replaces the surface's drawable description with the given region
    /// geometry and activation-index to glyph content.
    fn rebuild(&mut self, regions: &[KeyRegion], content: &HashMap<usize, String>);

    /// Shows or hides the surface.
    fn set_visible(&mut self, visible: bool);

    /// Current surface position in host units.
    fn position(&self) -> (f32, f32);

    /// Moves the surface in host units.
    fn set_position(&mut self, x: f32, y: f32);
}

/// Dirty-flag façade between the keyboard and its [`UiSurface`].
///
/// The initial description is forwarded at construction; afterwards a
/// rebuild only happens on [`RenderAdapter::update`] when a refresh was
/// requested. `update` is idempotent and side-effect-free while clean, so
/// the host can call it once per frame without cost.
pub struct RenderAdapter<S: UiSurface> {
    surface: S,
    needs_redraw: bool,
}

impl<S: UiSurface> RenderAdapter<S> {
    /// Wraps a surface and forwards the initial description to it.
    pub fn new(mut surface: S, regions: &[KeyRegion], content: &HashMap<usize, String>) -> Self {
        surface.rebuild(regions, content);
        Self {
            surface,
            needs_redraw: false,
        }
    }

    /// Requests a rebuild on the next `update` call.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Whether a rebuild is pending.
    #[must_use]
    pub const fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Forwards the description to the surface if a refresh is pending.
    pub fn update(&mut self, regions: &[KeyRegion], content: &HashMap<usize, String>) {
        if self.needs_redraw {
            self.surface.rebuild(regions, content);
            self.needs_redraw = false;
        }
    }

    /// Forwards visibility to the surface.
    pub fn set_visible(&mut self, visible: bool) {
        self.surface.set_visible(visible);
    }

    /// Current surface position in host units.
    #[must_use]
    pub fn position(&self) -> (f32, f32) {
        self.surface.position()
    }

    /// Shared access to the engine surface handle.
    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// Exclusive access to the engine surface handle.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
