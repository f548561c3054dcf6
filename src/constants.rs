//! Application-wide constants.
//!
//! This module defines constants used throughout the crate: the application
//! name and the fixed dimensions of the keyboard panel grid.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Slateboard";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "slateboard";

/// Fixed panel height in panel-local units. Key geometry is always laid out
/// against this height regardless of the requested panel width.
pub const PANEL_HEIGHT: f32 = 256.0;

/// Total number of key slots, including the reserved slot.
pub const KEY_SLOT_COUNT: usize = 35;

/// Activation index of the reserved slot at the end of row three. The slot
/// has a valid (zero-width) geometric entry but no content in any layout.
pub const RESERVED_SLOT: usize = 29;

/// Keys per row, top to bottom. Row three additionally carries the reserved
/// slot, bringing the total to [`KEY_SLOT_COUNT`].
pub const ROW_COLUMNS: [usize; 4] = [10, 10, 9, 5];
