//! Layout variant and language selection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four selectable glyph sets.
///
/// The variants form two pairs: the alphabetic pair (`Lower`/`Upper`) and
/// the symbol pair (`Symbols1`/`Symbols2`). Shift toggles within a pair,
/// the layout-switch key moves between pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LayoutVariant {
    /// Lowercase letters (initial variant).
    #[default]
    Lower,
    /// Uppercase letters, reached via shift; one-shot for literal keys.
    Upper,
    /// Digits and common punctuation.
    Symbols1,
    /// Digits and extended punctuation, reached from `Symbols1` via shift.
    Symbols2,
}

impl LayoutVariant {
    /// All variants in table order.
    pub const ALL: [Self; 4] = [Self::Lower, Self::Upper, Self::Symbols1, Self::Symbols2];

    /// Returns the other variant of the same pair (the shift transition).
    #[must_use]
    pub const fn shifted(self) -> Self {
        match self {
            Self::Lower => Self::Upper,
            Self::Upper => Self::Lower,
            Self::Symbols1 => Self::Symbols2,
            Self::Symbols2 => Self::Symbols1,
        }
    }

    /// Returns the variant after the layout-switch transition.
    ///
    /// The alphabetic pair always switches to `Symbols1`; both symbol
    /// variants return to `Lower`.
    #[must_use]
    pub const fn switched(self) -> Self {
        match self {
            Self::Lower | Self::Upper => Self::Symbols1,
            Self::Symbols1 | Self::Symbols2 => Self::Lower,
        }
    }

    /// Whether shift is engaged while this variant is active.
    ///
    /// Invariant: the shift flag of the keyboard state is true exactly for
    /// the second variant of each pair.
    #[must_use]
    pub const fn shift_engaged(self) -> bool {
        matches!(self, Self::Upper | Self::Symbols2)
    }

    /// Stable numeric index of this variant (0-3), used by the host-facing
    /// `set_layout` path and as the glyph table column.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Lower => 0,
            Self::Upper => 1,
            Self::Symbols1 => 2,
            Self::Symbols2 => 3,
        }
    }

    /// Resolves a numeric variant index back to a variant.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Lower),
            1 => Some(Self::Upper),
            2 => Some(Self::Symbols1),
            3 => Some(Self::Symbols2),
            _ => None,
        }
    }
}

impl fmt::Display for LayoutVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Lower => "lower",
            Self::Upper => "upper",
            Self::Symbols1 => "symbols1",
            Self::Symbols2 => "symbols2",
        };
        write!(f, "{name}")
    }
}

/// Alphabet selection for the letter rows.
///
/// The layout structure (which slot is shift, backspace, space, enter) is
/// language-independent; only the glyphs populating the letter rows vary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    /// English QWERTY (the default alphabet).
    #[default]
    En,
    /// German QWERTZ.
    De,
}

impl Language {
    /// Parses a two-letter language code, case-insensitively.
    ///
    /// Unknown codes fall back to the default alphabet with a diagnostic;
    /// layout structure does not depend on the language, so there is no
    /// failure mode here.
    #[must_use]
    pub fn parse(code: &str) -> Self {
        match code.trim().to_ascii_uppercase().as_str() {
            "EN" => Self::En,
            "DE" => Self::De,
            other => {
                tracing::warn!(code = other, "unsupported language code, falling back to EN");
                Self::En
            }
        }
    }

    /// The two-letter code of this language.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "EN",
            Self::De => "DE",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_is_involution_within_pairs() {
        for variant in LayoutVariant::ALL {
            assert_eq!(variant.shifted().shifted(), variant);
        }
        assert_eq!(LayoutVariant::Lower.shifted(), LayoutVariant::Upper);
        assert_eq!(LayoutVariant::Symbols1.shifted(), LayoutVariant::Symbols2);
    }

    #[test]
    fn test_switch_targets() {
        assert_eq!(LayoutVariant::Lower.switched(), LayoutVariant::Symbols1);
        assert_eq!(LayoutVariant::Upper.switched(), LayoutVariant::Symbols1);
        // Both symbol variants return to the alphabetic pair's base
        assert_eq!(LayoutVariant::Symbols1.switched(), LayoutVariant::Lower);
        assert_eq!(LayoutVariant::Symbols2.switched(), LayoutVariant::Lower);
    }

    #[test]
    fn test_shift_engaged_matches_pair_position() {
        assert!(!LayoutVariant::Lower.shift_engaged());
        assert!(LayoutVariant::Upper.shift_engaged());
        assert!(!LayoutVariant::Symbols1.shift_engaged());
        assert!(LayoutVariant::Symbols2.shift_engaged());
    }

    #[test]
    fn test_index_roundtrip() {
        for variant in LayoutVariant::ALL {
            assert_eq!(LayoutVariant::from_index(variant.index()), Some(variant));
        }
        assert_eq!(LayoutVariant::from_index(4), None);
    }

    #[test]
    fn test_language_parse() {
        assert_eq!(Language::parse("EN"), Language::En);
        assert_eq!(Language::parse("en"), Language::En);
        assert_eq!(Language::parse(" de "), Language::De);
        // Unknown codes fall back to the default alphabet
        assert_eq!(Language::parse("FR"), Language::En);
        assert_eq!(Language::parse(""), Language::En);
    }
}
