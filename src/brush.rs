use crate::color::SolidColor;

/// The drawing instrument configured by the palette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brush {
    pub color: SolidColor,
    /// Opacity, 0.0–1.0.
    pub alpha: f64,
    /// Stroke width in points.
    pub width: f64,
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            color: SolidColor::BLACK,
            alpha: 1.0,
            width: 1.0,
        }
    }
}
