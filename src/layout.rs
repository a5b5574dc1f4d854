//! Button geometry.
//!
//! All rects are in the coordinate space of the group container that owns
//! the button. Indices are 1-based tags.

use floem::kurbo::Rect;

use crate::constants;

/// Sizes derived from the host display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteMetrics {
    /// Uniform button diameter, also the reference cell size.
    pub diameter: f64,
    pub padding: f64,
    pub screen_width: f64,
}

impl PaletteMetrics {
    /// Height of the palette for the fixed 12-button, 6-column color grid.
    ///
    /// Matches [`crate::Palette::palette_height`] after setup, but needs no
    /// palette instance.
    pub fn precalc_palette_height(&self) -> f64 {
        let last = button_rect(
            constants::COLOR_COUNT,
            self.diameter,
            self.diameter,
            self.padding,
            constants::COLOR_COLUMNS,
        );
        last.max_y() + self.padding
    }

    /// X origin that right-aligns a container of `width` on the screen.
    pub fn right_aligned_x(&self, width: f64) -> f64 {
        self.screen_width - width - 2.0 * self.padding
    }
}

/// Centering offset for a button smaller than the grid cell.
fn inner_spacing(diameter: f64, reference_diameter: f64) -> f64 {
    (reference_diameter - diameter) / 2.0
}

/// Vertical origin shared by grid and packed layouts.
fn row_y(index: usize, diameter: f64, reference_diameter: f64, padding: f64, columns: usize) -> f64 {
    let row = (index.saturating_sub(1) / columns.max(1)) as f64;
    row * diameter + padding + row * padding + inner_spacing(diameter, reference_diameter)
}

/// Rect of the `index`-th button in a uniform grid of `columns` columns.
pub fn button_rect(
    index: usize,
    diameter: f64,
    reference_diameter: f64,
    padding: f64,
    columns: usize,
) -> Rect {
    let column = (index.saturating_sub(1) % columns.max(1)) as f64;
    let x = column * diameter + padding + column * padding + inner_spacing(diameter, reference_diameter);
    let y = row_y(index, diameter, reference_diameter, padding, columns);
    Rect::new(x, y, x + diameter, y + diameter)
}

/// Rect of a width button packed right after the previous button.
///
/// `last_x` is the previous button's right edge, or
/// [`constants::WIDTH_ROW_START`] for the first one.
pub fn width_button_rect(
    index: usize,
    diameter: f64,
    reference_diameter: f64,
    padding: f64,
    columns: usize,
    last_x: f64,
) -> Rect {
    let x = last_x + padding + inner_spacing(diameter, reference_diameter);
    let y = row_y(index, diameter, reference_diameter, padding, columns);
    Rect::new(x, y, x + diameter, y + diameter)
}
