//! The virtual keyboard: construction, activation dispatch, field binding.
//!
//! [`VirtualKeyboard`] ties the stateless services (geometry, content) to
//! the keyboard state machine and the render adapter. The host constructs
//! it with a panel width, an engine surface and a language, shows it, binds
//! a text field, and feeds it activation indices from its own hit testing.

pub mod binding;
pub mod state;

pub use binding::{FieldBinding, TextCallback};
pub use state::KeyboardState;

use std::collections::HashMap;

use anyhow::Result;

use crate::constants::PANEL_HEIGHT;
use crate::models::{KeyRegion, Language, LayoutVariant};
use crate::render::{RenderAdapter, UiSurface};
use crate::services::{content_for, generate_regions};
use state::TextEdit;

/// An on-surface virtual keyboard bound to at most one text field.
///
/// The keyboard exclusively owns its region geometry and state; it holds
/// the field binding as an owned value for the duration of one bind and
/// writes text back only through it. All activation processing is
/// synchronous and ordered; a rejected activation never changes state.
pub struct VirtualKeyboard<S: UiSurface> {
    regions: Vec<KeyRegion>,
    content: HashMap<usize, String>,
    state: KeyboardState,
    binding: Option<FieldBinding>,
    adapter: RenderAdapter<S>,
    panel_width: f32,
}

impl<S: UiSurface> VirtualKeyboard<S> {
    /// Builds a keyboard for a panel of the given width, forwarding the
    /// initial layout and lowercase content to the engine surface.
    ///
    /// The keyboard starts hidden; activations are ignored until the host
    /// calls [`Self::set_visible`].
    pub fn new(panel_width: f32, surface: S, language: Language) -> Self {
        let regions = generate_regions(panel_width);
        let state = KeyboardState::new(language);
        let content = content_for(language, state.variant);
        let mut adapter = RenderAdapter::new(surface, &regions, &content);
        adapter.set_visible(false);

        Self {
            regions,
            content,
            state,
            binding: None,
            adapter,
            panel_width,
        }
    }

    /// Panel size in host units: the construction width with the derived
    /// half-width aspect. The key grid itself is laid out against the fixed
    /// 256-unit panel height.
    #[must_use]
    pub fn panel_size(&self) -> (f32, f32) {
        (self.panel_width, self.panel_width * 0.5)
    }

    /// Fixed height of the key grid in panel-local units.
    #[must_use]
    pub const fn grid_height(&self) -> f32 {
        PANEL_HEIGHT
    }

    /// Generated key regions in activation-index order.
    #[must_use]
    pub fn regions(&self) -> &[KeyRegion] {
        &self.regions
    }

    /// Active activation-index to glyph mapping.
    #[must_use]
    pub const fn content(&self) -> &HashMap<usize, String> {
        &self.content
    }

    /// Current keyboard state.
    #[must_use]
    pub const fn state(&self) -> &KeyboardState {
        &self.state
    }

    /// Whether the keyboard is shown and accepting activations.
    #[must_use]
    pub const fn visible(&self) -> bool {
        self.state.visible
    }

    /// Shows or hides the keyboard, mirroring the flag to the surface.
    pub fn set_visible(&mut self, visible: bool) {
        self.state.visible = visible;
        self.adapter.set_visible(visible);
    }

    /// Shared access to the engine surface handle.
    #[must_use]
    pub const fn surface(&self) -> &S {
        self.adapter.surface()
    }

    /// Exclusive access to the engine surface handle.
    pub fn surface_mut(&mut self) -> &mut S {
        self.adapter.surface_mut()
    }

    /// Surface position in host units, delegated to the engine.
    #[must_use]
    pub fn position(&self) -> (f32, f32) {
        self.adapter.position()
    }

    /// Binds a text field, replacing any prior binding atomically.
    pub fn bind(&mut self, binding: FieldBinding) {
        self.binding = Some(binding);
    }

    /// Clears the binding and returns it to the caller.
    ///
    /// Afterwards, text-affecting activations error until the host binds
    /// again; the keyboard does not persist field text past the binding.
    pub fn unbind(&mut self) -> Option<FieldBinding> {
        self.binding.take()
    }

    /// Text of the bound field, if any field is bound.
    #[must_use]
    pub fn bound_text(&self) -> Option<&str> {
        self.binding.as_ref().map(FieldBinding::text)
    }

    /// Forces a layout variant, the host-facing analog of the shift and
    /// switch keys. Shift state follows the variant's pair position.
    pub fn set_layout(&mut self, variant: LayoutVariant) {
        self.apply_variant(variant);
    }

    /// Processes one key activation by index.
    ///
    /// Activations are ignored entirely while the keyboard is hidden.
    /// Out-of-range indices and the reserved slot are no-ops with a
    /// diagnostic. Text-affecting activations (literal, space, backspace,
    /// enter) require a bound field and fail fast without one, leaving
    /// layout state untouched.
    pub fn activate(&mut self, index: usize) -> Result<()> {
        if !self.state.visible {
            return Ok(());
        }

        let Some(region) = self.regions.get(index) else {
            tracing::warn!(index, "activation index out of range, ignoring");
            return Ok(());
        };

        let glyph = self.content.get(&index).map(String::as_str);
        let activation = self.state.plan(region.role, glyph);

        if let Some(edit) = activation.edit {
            let Some(binding) = self.binding.as_mut() else {
                anyhow::bail!(
                    "no text field bound to the keyboard; call bind() before activating key {index}"
                );
            };
            match edit {
                TextEdit::Insert(glyph) => binding.append(&glyph),
                TextEdit::DeleteBackward => binding.delete_backward(),
                TextEdit::Commit => binding.commit(),
            }
        }

        if let Some(variant) = activation.next_variant {
            self.apply_variant(variant);
        }

        Ok(())
    }

    /// Ticks the render adapter; rebuilds the surface only when a content
    /// refresh is pending. Intended to be called once per host frame.
    pub fn update(&mut self) {
        self.adapter.update(&self.regions, &self.content);
    }

    fn apply_variant(&mut self, variant: LayoutVariant) {
        self.state.variant = variant;
        self.state.shift_engaged = variant.shift_engaged();
        self.refresh_content();
    }

    fn refresh_content(&mut self) {
        self.content = content_for(self.state.language, self.state.variant);
        self.adapter.mark_dirty();
    }
}
