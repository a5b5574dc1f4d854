//! # floem-brush-palette
//!
//! A brush palette panel for [Floem](https://github.com/lapce/floem) drawing
//! apps.
//!
//! Lays out a 12-color grid, an opacity row and a brush-width row of
//! circular buttons, keeps exactly one button selected per row, and reports
//! the resulting [`Brush`] to a [`PaletteDelegate`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_brush_palette::{brush_palette, Palette, PaletteConfig};
//!
//! let palette = RwSignal::new(Palette::new(PaletteConfig::for_screen(800.0, 600.0)));
//! // Use `brush_palette(palette)` in your Floem view tree and read
//! // `palette.with(|p| p.current_brush())` when drawing.
//! ```

mod brush;
mod button;
mod checkerboard;
mod circle_button;
mod color;
mod config;
mod constants;
mod delegate;
mod layout;
mod palette;
mod palette_view;

pub use brush::Brush;
pub use button::{ButtonGroup, CircleButton, GroupKind};
pub use circle_button::{circle_button, CircleButtonView};
pub use color::{ParseColorError, SolidColor};
pub use config::{ConfigError, PaletteConfig};
pub use delegate::PaletteDelegate;
pub use layout::{button_rect, width_button_rect, PaletteMetrics};
pub use palette::{default_color, Palette};

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalUpdate, SignalWith};

/// Creates the palette panel view.
///
/// Runs [`Palette::setup`] first if the host has not, so install the
/// delegate before calling this. Clicks update `palette`; any view reading
/// it re-renders.
pub fn brush_palette(palette: RwSignal<Palette>) -> impl IntoView {
    if !palette.with_untracked(Palette::is_set_up) {
        palette.update(Palette::setup);
    }
    palette_view::palette_view(palette)
}
