//! Key region geometry and control roles.

use serde::{Deserialize, Serialize};

use crate::models::RgbColor;

/// Control meaning of a key region.
///
/// Roles are attached to regions at generation time so that activation
/// handling can dispatch on the role tag instead of positional index
/// coincidence. Every slot that is not a control key or the reserved slot
/// is a plain [`KeyRole::Character`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyRole {
    /// Literal glyph key; activation appends the displayed glyph.
    Character,
    /// Toggles between the paired layout variants.
    Shift,
    /// Removes the last character of the bound text.
    Backspace,
    /// Switches between the alphabetic and symbol layout pairs.
    LayoutSwitch,
    /// Appends a single space character.
    Space,
    /// Commits the bound text via the enter callback.
    Enter,
    /// Reserved slot with no content and no activation effect.
    Unused,
}

impl KeyRole {
    /// Returns the role for a row-major slot index.
    ///
    /// The control slots are fixed by the panel grid: shift and backspace
    /// bracket row three, the layout switch, space bar and enter live on
    /// row four, and slot 29 is reserved.
    #[must_use]
    pub const fn for_slot(index: usize) -> Self {
        match index {
            20 => Self::Shift,
            28 => Self::Backspace,
            29 => Self::Unused,
            30 => Self::LayoutSwitch,
            32 => Self::Space,
            34 => Self::Enter,
            _ => Self::Character,
        }
    }
}

/// Geometry and visual parameters of a single key region.
///
/// Regions are produced once per keyboard instance by the layout generator
/// and are immutable afterwards. Positions and sizes are in panel-local
/// units against the fixed 256-unit panel height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyRegion {
    /// Activation index reported when this region is triggered
    /// (row-major slot number, 0-34).
    pub index: usize,
    /// Control meaning of this region.
    pub role: KeyRole,
    /// Left edge in panel-local units.
    pub x: f32,
    /// Top edge in panel-local units.
    pub y: f32,
    /// Region width in panel-local units (0 for the reserved slot).
    pub width: f32,
    /// Region height in panel-local units.
    pub height: f32,
    /// Inner padding in panel-local units.
    pub padding: f32,
    /// Extra top padding pushing the glyph toward the vertical center.
    pub padding_top: f32,
    /// Corner radius in panel-local units.
    pub corner_radius: f32,
    /// Glyph font size in panel-local units.
    pub font_size: f32,
    /// Resting background color.
    pub background: RgbColor,
    /// Background color while hovered by the pointer.
    pub hover: RgbColor,
}

impl KeyRegion {
    /// Whether the panel-local point `(px, py)` falls inside this region.
    ///
    /// The interval is half-open so the zero-width reserved slot never
    /// claims a hit.
    #[must_use]
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_for_control_slots() {
        assert_eq!(KeyRole::for_slot(20), KeyRole::Shift);
        assert_eq!(KeyRole::for_slot(28), KeyRole::Backspace);
        assert_eq!(KeyRole::for_slot(29), KeyRole::Unused);
        assert_eq!(KeyRole::for_slot(30), KeyRole::LayoutSwitch);
        assert_eq!(KeyRole::for_slot(32), KeyRole::Space);
        assert_eq!(KeyRole::for_slot(34), KeyRole::Enter);
    }

    #[test]
    fn test_role_for_character_slots() {
        for index in [0, 9, 10, 19, 21, 27, 31, 33] {
            assert_eq!(KeyRole::for_slot(index), KeyRole::Character);
        }
    }

    #[test]
    fn test_contains_half_open() {
        let region = KeyRegion {
            index: 0,
            role: KeyRole::Character,
            x: 10.0,
            y: 10.0,
            width: 40.0,
            height: 49.0,
            padding: 10.0,
            padding_top: 20.0,
            corner_radius: 6.0,
            font_size: 24.0,
            background: RgbColor::new(34, 34, 34),
            hover: RgbColor::new(136, 136, 136),
        };

        assert!(region.contains(10.0, 10.0));
        assert!(region.contains(49.9, 58.9));
        assert!(!region.contains(50.0, 10.0));
        assert!(!region.contains(9.9, 10.0));
    }

    #[test]
    fn test_zero_width_region_contains_nothing() {
        let region = KeyRegion {
            index: 29,
            role: KeyRole::Unused,
            x: 100.0,
            y: 128.0,
            width: 0.0,
            height: 49.0,
            padding: 10.0,
            padding_top: 20.0,
            corner_radius: 6.0,
            font_size: 24.0,
            background: RgbColor::new(34, 34, 34),
            hover: RgbColor::new(136, 136, 136),
        };

        assert!(!region.contains(100.0, 130.0));
    }
}
