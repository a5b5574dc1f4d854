//! Checkerboard backdrop that makes translucent button fills readable.

use floem::context::PaintCx;
use floem::kurbo::{Circle, Rect, Shape};
use floem::peniko::Color;
use floem_renderer::Renderer;

use crate::constants;

const LIGHT: Color = Color::rgb8(255, 255, 255);
const DARK: Color = Color::rgb8(190, 190, 190);

/// Paint a checkerboard clipped to `circle`.
pub(crate) fn paint_checkerboard(cx: &mut PaintCx, circle: Circle) {
    let bounds: Rect = circle.bounding_box();
    let cell = constants::CHECKER_CELL;

    cx.save();
    cx.clip(&circle);
    cx.fill(&bounds, LIGHT, 0.0);
    let mut y = bounds.y0;
    let mut row = 0usize;
    while y < bounds.y1 {
        let mut x = bounds.x0 + if row % 2 == 0 { cell } else { 0.0 };
        while x < bounds.x1 {
            let cell_rect = Rect::new(x, y, (x + cell).min(bounds.x1), (y + cell).min(bounds.y1));
            cx.fill(&cell_rect, DARK, 0.0);
            x += 2.0 * cell;
        }
        y += cell;
        row += 1;
    }
    cx.restore();
}
