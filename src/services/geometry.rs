//! Panel geometry generation.
//!
//! This module builds the fixed grid of key regions for a keyboard panel:
//! four rows (10, 10, 9 and 5 columns) plus the reserved slot, with widened
//! shift, backspace, layout-switch, enter and space keys. Generation is a
//! pure function of the panel width; the panel height is fixed.

use crate::constants::{KEY_SLOT_COUNT, PANEL_HEIGHT, RESERVED_SLOT, ROW_COLUMNS};
use crate::models::{KeyRegion, KeyRole, RgbColor};

/// Inner padding between and around keys, in panel-local units.
pub const KEY_PADDING: f32 = 10.0;

/// Extra top padding pushing glyphs toward the key's vertical center.
pub const KEY_PADDING_TOP: f32 = 20.0;

/// Corner radius of every key, in panel-local units.
pub const CORNER_RADIUS: f32 = 6.0;

/// Font size of regular glyph keys.
pub const GLYPH_FONT_SIZE: f32 = 24.0;

/// Font size of the space bar label.
pub const SPACE_FONT_SIZE: f32 = 28.0;

/// Font size of the layout-switch key label.
pub const SWITCH_FONT_SIZE: f32 = 20.0;

/// Resting key background color.
pub const KEY_BACKGROUND: RgbColor = RgbColor::new(0x22, 0x22, 0x22);

/// Key background color under the pointer.
pub const KEY_HOVER: RgbColor = RgbColor::new(0x88, 0x88, 0x88);

/// Background color of the panel body behind the keys.
pub const PANEL_BODY: RgbColor = RgbColor::new(0x33, 0x33, 0x33);

/// Generates the full sequence of key regions for a panel of the given
/// width, in row-major activation-index order.
///
/// The returned vector always holds [`KEY_SLOT_COUNT`] entries and is
/// indexable by activation index (`regions[i].index == i`). Slot 29 is the
/// reserved zero-width entry at the end of row three.
///
/// The generator does not validate `panel_width`: a non-positive width
/// yields degenerate (zero- or negative-sized) regions, and bounds checking
/// is left to the rendering side.
#[must_use]
pub fn generate_regions(panel_width: f32) -> Vec<KeyRegion> {
    let padding = KEY_PADDING;
    let base_width = (panel_width - 2.0 * padding) / 10.0 - padding;
    let key_height = (PANEL_HEIGHT - 2.0 * padding) / 4.0 - padding;

    let mut regions = Vec::with_capacity(KEY_SLOT_COUNT);
    let mut y = padding;

    // Rows one and two: ten equal-width keys each
    for row in 0..2 {
        let mut x = padding;
        for col in 0..ROW_COLUMNS[row] {
            regions.push(region(row * 10 + col, x, y, base_width, key_height, GLYPH_FONT_SIZE));
            x += base_width + padding;
        }
        y += key_height + padding;
    }

    // Row three: widened shift and backspace keys bracket the letters
    let mut x = padding;
    for col in 0..ROW_COLUMNS[2] {
        let width = if col == 0 || col == 8 {
            base_width * 1.5 + padding * 0.5
        } else {
            base_width
        };
        regions.push(region(20 + col, x, y, width, key_height, GLYPH_FONT_SIZE));
        x += width + padding;
    }
    // Reserved slot: a valid geometric entry with zero width, so the
    // sequence stays dense and index-addressable
    regions.push(region(RESERVED_SLOT, x, y, 0.0, key_height, GLYPH_FONT_SIZE));
    y += key_height + padding;

    // Row four: layout switch, comma, space bar, period, enter
    let mut x = padding;
    for col in 0..ROW_COLUMNS[3] {
        let width = match col {
            0 | 4 => base_width * 2.0 + padding,
            2 => base_width * 4.0 + 3.0 * padding,
            _ => base_width,
        };
        let font_size = match col {
            0 => SWITCH_FONT_SIZE,
            2 => SPACE_FONT_SIZE,
            _ => GLYPH_FONT_SIZE,
        };
        regions.push(region(30 + col, x, y, width, key_height, font_size));
        x += width + padding;
    }

    regions
}

fn region(index: usize, x: f32, y: f32, width: f32, height: f32, font_size: f32) -> KeyRegion {
    KeyRegion {
        index,
        role: KeyRole::for_slot(index),
        x,
        y,
        width,
        height,
        padding: KEY_PADDING,
        padding_top: KEY_PADDING_TOP,
        corner_radius: CORNER_RADIUS,
        font_size,
        background: KEY_BACKGROUND,
        hover: KEY_HOVER,
    }
}
