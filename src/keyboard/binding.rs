//! Field binding: the association between the keyboard and one text input.

use std::fmt;

/// Callback invoked with the bound field's current text.
pub type TextCallback = Box<dyn FnMut(&str)>;

/// The live association between the keyboard and exactly one external text
/// field: its name, its current text value, and its change/commit hooks.
///
/// A binding is supplied by the host (never created internally by the
/// keyboard) and is owned by the keyboard for the duration of one bind.
/// Text mutations are written back here and surfaced through the
/// callbacks; the keyboard never aliases the host's string buffer.
pub struct FieldBinding {
    field_name: String,
    text: String,
    on_changed: Option<TextCallback>,
    on_enter: Option<TextCallback>,
}

impl FieldBinding {
    /// Creates a binding for the named field with its initial text.
    pub fn new(field_name: impl Into<String>, initial_text: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            text: initial_text.into(),
            on_changed: None,
            on_enter: None,
        }
    }

    /// Sets the change callback, invoked after every text mutation.
    #[must_use]
    pub fn with_on_changed(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_changed = Some(Box::new(callback));
        self
    }

    /// Sets the commit callback, invoked by the enter key.
    #[must_use]
    pub fn with_on_enter(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_enter = Some(Box::new(callback));
        self
    }

    /// Name of the bound field.
    #[must_use]
    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    /// Current text of the bound field.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Appends a glyph and notifies the change callback.
    pub(crate) fn append(&mut self, glyph: &str) {
        self.text.push_str(glyph);
        self.notify_changed();
    }

    /// Removes the last character if the text is non-empty.
    ///
    /// The change callback only fires when something was removed; deleting
    /// from empty text is a no-op at the callback boundary.
    pub(crate) fn delete_backward(&mut self) {
        if self.text.pop().is_some() {
            self.notify_changed();
        }
    }

    /// Invokes the commit callback with the current text, if one is bound.
    /// Does not touch the text and does not fire the change callback.
    pub(crate) fn commit(&mut self) {
        if let Some(callback) = self.on_enter.as_mut() {
            callback(&self.text);
        }
    }

    fn notify_changed(&mut self) {
        if let Some(callback) = self.on_changed.as_mut() {
            callback(&self.text);
        }
    }
}

impl fmt::Debug for FieldBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldBinding")
            .field("field_name", &self.field_name)
            .field("text", &self.text)
            .field("on_changed", &self.on_changed.is_some())
            .field("on_enter", &self.on_enter.is_some())
            .finish()
    }
}
