//! Keyboard input state and activation planning.

use crate::models::{KeyRole, Language, LayoutVariant};

/// Mutable state of one keyboard instance.
///
/// Invariant: `shift_engaged` is true exactly when the active variant is
/// the second of its pair (`Upper` or `Symbols2`); the activation
/// transitions and the host-facing `set_layout` are the only writers.
/// `visible` gates whether activations are processed at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardState {
    /// Alphabet populating the letter rows.
    pub language: Language,
    /// Currently active layout variant.
    pub variant: LayoutVariant,
    /// Shift flag; tracks the variant pair position.
    pub shift_engaged: bool,
    /// Whether the keyboard is shown and accepting activations.
    pub visible: bool,
}

impl KeyboardState {
    /// Initial state: lowercase variant, shift disengaged, hidden.
    #[must_use]
    pub const fn new(language: Language) -> Self {
        Self {
            language,
            variant: LayoutVariant::Lower,
            shift_engaged: false,
            visible: false,
        }
    }
}

/// Text effect of one activation, applied to the bound field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TextEdit {
    /// Append the glyph to the field text.
    Insert(String),
    /// Remove the last character, if any.
    DeleteBackward,
    /// Invoke the commit callback with the current text.
    Commit,
}

/// Planned outcome of one activation: an optional text edit plus an
/// optional variant transition. Planning is pure; the keyboard applies the
/// outcome only after the binding requirement has been checked, so a
/// rejected activation leaves the state exactly as before.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Activation {
    pub edit: Option<TextEdit>,
    pub next_variant: Option<LayoutVariant>,
}

impl Activation {
    const fn none() -> Self {
        Self {
            edit: None,
            next_variant: None,
        }
    }
}

impl KeyboardState {
    /// Plans the outcome of activating a key with the given role.
    ///
    /// `glyph` is the displayed content of the activated slot under the
    /// current mapping; it is only consulted for [`KeyRole::Character`].
    pub(crate) fn plan(&self, role: KeyRole, glyph: Option<&str>) -> Activation {
        match role {
            KeyRole::Enter => Activation {
                edit: Some(TextEdit::Commit),
                next_variant: None,
            },
            KeyRole::Space => Activation {
                edit: Some(TextEdit::Insert(" ".to_string())),
                next_variant: None,
            },
            KeyRole::LayoutSwitch => Activation {
                edit: None,
                next_variant: Some(self.variant.switched()),
            },
            KeyRole::Backspace => Activation {
                edit: Some(TextEdit::DeleteBackward),
                next_variant: None,
            },
            KeyRole::Shift => Activation {
                edit: None,
                next_variant: Some(self.variant.shifted()),
            },
            KeyRole::Character => match glyph {
                Some(glyph) => Activation {
                    edit: Some(TextEdit::Insert(glyph.to_string())),
                    // One-shot shift: uppercase reverts after a single
                    // insertion, the symbol variants are sticky
                    next_variant: (self.variant == LayoutVariant::Upper)
                        .then_some(LayoutVariant::Lower),
                },
                None => {
                    tracing::warn!(variant = %self.variant, "character key has no glyph, ignoring");
                    Activation::none()
                }
            },
            KeyRole::Unused => {
                tracing::debug!("activation on reserved slot, ignoring");
                Activation::none()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(variant: LayoutVariant) -> KeyboardState {
        KeyboardState {
            language: Language::En,
            variant,
            shift_engaged: variant.shift_engaged(),
            visible: true,
        }
    }

    #[test]
    fn test_shift_plans_pair_toggle() {
        let plan = state(LayoutVariant::Lower).plan(KeyRole::Shift, None);
        assert_eq!(plan.next_variant, Some(LayoutVariant::Upper));
        assert_eq!(plan.edit, None);

        let plan = state(LayoutVariant::Symbols2).plan(KeyRole::Shift, None);
        assert_eq!(plan.next_variant, Some(LayoutVariant::Symbols1));
    }

    #[test]
    fn test_layout_switch_plans_pair_change() {
        let plan = state(LayoutVariant::Upper).plan(KeyRole::LayoutSwitch, None);
        assert_eq!(plan.next_variant, Some(LayoutVariant::Symbols1));

        let plan = state(LayoutVariant::Symbols2).plan(KeyRole::LayoutSwitch, None);
        assert_eq!(plan.next_variant, Some(LayoutVariant::Lower));
    }

    #[test]
    fn test_character_in_upper_is_one_shot() {
        let plan = state(LayoutVariant::Upper).plan(KeyRole::Character, Some("Q"));
        assert_eq!(plan.edit, Some(TextEdit::Insert("Q".to_string())));
        assert_eq!(plan.next_variant, Some(LayoutVariant::Lower));
    }

    #[test]
    fn test_character_in_symbols2_is_sticky() {
        let plan = state(LayoutVariant::Symbols2).plan(KeyRole::Character, Some("\u{20ac}"));
        assert_eq!(plan.edit, Some(TextEdit::Insert("\u{20ac}".to_string())));
        assert_eq!(plan.next_variant, None);
    }

    #[test]
    fn test_character_without_glyph_is_inert() {
        let plan = state(LayoutVariant::Lower).plan(KeyRole::Character, None);
        assert_eq!(plan, Activation::none());
    }

    #[test]
    fn test_space_backspace_enter_edits() {
        let lower = state(LayoutVariant::Lower);
        assert_eq!(
            lower.plan(KeyRole::Space, None).edit,
            Some(TextEdit::Insert(" ".to_string()))
        );
        assert_eq!(
            lower.plan(KeyRole::Backspace, None).edit,
            Some(TextEdit::DeleteBackward)
        );
        assert_eq!(lower.plan(KeyRole::Enter, None).edit, Some(TextEdit::Commit));
        // None of the three plans a variant change
        assert_eq!(lower.plan(KeyRole::Space, None).next_variant, None);
        assert_eq!(lower.plan(KeyRole::Backspace, None).next_variant, None);
        assert_eq!(lower.plan(KeyRole::Enter, None).next_variant, None);
    }

    #[test]
    fn test_unused_slot_is_inert() {
        let plan = state(LayoutVariant::Lower).plan(KeyRole::Unused, None);
        assert_eq!(plan, Activation::none());
    }
}
