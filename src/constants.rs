//! Sizing, count, and styling constants for the palette.

/// Buttons in the color group
pub const COLOR_COUNT: usize = 12;

/// Columns in the color grid
pub const COLOR_COLUMNS: usize = 6;

/// Buttons in the alpha group (one row)
pub const ALPHA_COUNT: usize = 3;

/// Buttons in the width group (one packed row)
pub const WIDTH_COUNT: usize = 4;

/// X offset the packed width row starts from
pub const WIDTH_ROW_START: f64 = 4.0;

/// Screen side divided by this gives the button diameter
pub const DIAMETER_DIVISOR: f64 = 12.0;

/// Screen side divided by this gives the button padding
pub const PADDING_DIVISOR: f64 = 35.0;

/// Fallback display size when the host does not provide one
pub const SCREEN_WIDTH: f64 = 375.0;
pub const SCREEN_HEIGHT: f64 = 667.0;

/// Ring drawn around a selected button
pub const SELECTION_RING: f64 = 2.0;

/// Checkerboard cell size (for translucent button fills)
pub const CHECKER_CELL: f64 = 4.0;
