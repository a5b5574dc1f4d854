//! Host callbacks.

use crate::color::SolidColor;

/// Receives brush changes and may override per-button defaults.
///
/// Every method has a default, so hosts implement only what they need.
/// Queries run during [`crate::Palette::setup`]; returning `None` keeps the
/// built-in value. Alpha and width overrides outside their valid range are
/// ignored.
pub trait PaletteDelegate {
    fn brush_color_changed(&self, _color: SolidColor) {}
    fn brush_alpha_changed(&self, _alpha: f64) {}
    fn brush_width_changed(&self, _width: f64) {}

    fn color_for_tag(&self, _tag: usize) -> Option<SolidColor> {
        None
    }
    fn alpha_for_tag(&self, _tag: usize) -> Option<f64> {
        None
    }
    fn width_for_tag(&self, _tag: usize) -> Option<f64> {
        None
    }
}
