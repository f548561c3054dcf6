//! Per-layout glyph content tables.
//!
//! One fixed-size table per language maps every key slot to its four
//! variant glyphs. Keeping all variants of a slot in a single struct makes
//! the positional alignment across variants structural instead of a
//! convention spread over four parallel arrays.

use std::collections::HashMap;

use crate::constants::KEY_SLOT_COUNT;
use crate::models::{Language, LayoutVariant};

/// Glyphs of a single key slot across the four layout variants, in
/// [`LayoutVariant::index`] order. An empty glyph marks the slot unused in
/// that variant.
struct SlotGlyphs {
    glyphs: [&'static str; 4],
}

const fn slot(
    lower: &'static str,
    upper: &'static str,
    symbols1: &'static str,
    symbols2: &'static str,
) -> SlotGlyphs {
    SlotGlyphs {
        glyphs: [lower, upper, symbols1, symbols2],
    }
}

/// Shorthand for slots whose glyph does not vary across variants
/// (control keys, comma, space, period).
const fn fixed(glyph: &'static str) -> SlotGlyphs {
    slot(glyph, glyph, glyph, glyph)
}

/// English QWERTY table.
#[rustfmt::skip]
const EN_TABLE: [SlotGlyphs; KEY_SLOT_COUNT] = [
    // Row one
    slot("q", "Q", "1", "1"),
    slot("w", "W", "2", "2"),
    slot("e", "E", "3", "3"),
    slot("r", "R", "4", "4"),
    slot("t", "T", "5", "5"),
    slot("y", "Y", "6", "6"),
    slot("u", "U", "7", "7"),
    slot("i", "I", "8", "8"),
    slot("o", "O", "9", "9"),
    slot("p", "P", "0", "0"),
    // Row two
    slot("a", "A", "@", "\u{20ac}"),
    slot("s", "S", "#", "\u{a3}"),
    slot("d", "D", "%", "$"),
    slot("f", "F", "&", "^"),
    slot("g", "G", "*", "="),
    slot("h", "H", "/", "|"),
    slot("j", "J", "-", "{"),
    slot("k", "K", "+", "}"),
    slot("l", "L", "(", "["),
    slot("@", "@", ")", "]"),
    // Row three
    fixed("\u{21e7}"),
    slot("z", "Z", "?", "<"),
    slot("x", "X", "!", ">"),
    slot("c", "C", "\"", "_"),
    slot("v", "V", "'", "`"),
    slot("b", "B", "\\", "~"),
    slot("n", "N", ":", ":"),
    slot("m", "M", ";", ";"),
    fixed("\u{21e6}"),
    fixed(""),
    // Row four
    slot("?123", "?123", "abc", "abc"),
    fixed(","),
    fixed("   "),
    fixed("."),
    fixed("\u{21b2}"),
];

/// German QWERTZ table. Only the letter rows differ from the English
/// table; the symbol variants and control slots are shared structure.
#[rustfmt::skip]
const DE_TABLE: [SlotGlyphs; KEY_SLOT_COUNT] = [
    // Row one
    slot("q", "Q", "1", "1"),
    slot("w", "W", "2", "2"),
    slot("e", "E", "3", "3"),
    slot("r", "R", "4", "4"),
    slot("t", "T", "5", "5"),
    slot("z", "Z", "6", "6"),
    slot("u", "U", "7", "7"),
    slot("i", "I", "8", "8"),
    slot("o", "O", "9", "9"),
    slot("p", "P", "0", "0"),
    // Row two
    slot("a", "A", "@", "\u{20ac}"),
    slot("s", "S", "#", "\u{a3}"),
    slot("d", "D", "%", "$"),
    slot("f", "F", "&", "^"),
    slot("g", "G", "*", "="),
    slot("h", "H", "/", "|"),
    slot("j", "J", "-", "{"),
    slot("k", "K", "+", "}"),
    slot("l", "L", "(", "["),
    slot("@", "@", ")", "]"),
    // Row three
    fixed("\u{21e7}"),
    slot("y", "Y", "?", "<"),
    slot("x", "X", "!", ">"),
    slot("c", "C", "\"", "_"),
    slot("v", "V", "'", "`"),
    slot("b", "B", "\\", "~"),
    slot("n", "N", ":", ":"),
    slot("m", "M", ";", ";"),
    fixed("\u{21e6}"),
    fixed(""),
    // Row four
    slot("?123", "?123", "abc", "abc"),
    fixed(","),
    fixed("   "),
    fixed("."),
    fixed("\u{21b2}"),
];

const fn glyph_table(language: Language) -> &'static [SlotGlyphs; KEY_SLOT_COUNT] {
    match language {
        Language::En => &EN_TABLE,
        Language::De => &DE_TABLE,
    }
}

/// Builds the activation-index to glyph mapping for one `(language,
/// variant)` combination.
///
/// Slots with empty glyphs (the reserved slot) are skipped entirely: they
/// have no displayed content and must not appear as keys in the mapping.
/// Every built-in combination yields exactly 34 entries.
#[must_use]
pub fn content_for(language: Language, variant: LayoutVariant) -> HashMap<usize, String> {
    let column = variant.index();
    glyph_table(language)
        .iter()
        .enumerate()
        .filter(|(_, slot)| !slot.glyphs[column].is_empty())
        .map(|(index, slot)| (index, slot.glyphs[column].to_string()))
        .collect()
}
