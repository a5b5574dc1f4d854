//! Palette panel: the three button groups placed at their model frames.

use floem::kurbo::Rect;
use floem::prelude::*;
use floem::reactive::{RwSignal, SignalUpdate, SignalWith};
use floem::style::Style;
use floem::views::stack_from_iter;

use crate::button::GroupKind;
use crate::circle_button::circle_button;
use crate::palette::Palette;

const GROUPS: [GroupKind; 3] = [GroupKind::Color, GroupKind::Alpha, GroupKind::Width];

/// Pins a view to `frame` inside its parent.
fn at_frame(s: Style, frame: Rect) -> Style {
    s.absolute()
        .inset_left(frame.x0)
        .inset_top(frame.y0)
        .width(frame.width())
        .height(frame.height())
}

fn group_view(palette: RwSignal<Palette>, kind: GroupKind) -> impl IntoView {
    let (frame, count) = palette.with_untracked(|p| {
        let group = p.group(kind);
        (group.frame(), group.len())
    });

    let buttons = (0..count).map(move |index| {
        let button_frame = palette
            .with_untracked(|p| p.group(kind).get(index).map(|b| b.frame))
            .unwrap_or(Rect::ZERO);
        circle_button(
            move || palette.with(|p| p.group(kind).get(index).cloned()),
            move || palette.update(|p| p.select(kind, index)),
        )
        .style(move |s| at_frame(s, button_frame))
    });

    stack_from_iter(buttons).style(move |s| at_frame(s, frame))
}

/// Builds the panel for an already set-up palette.
///
/// Clicks run the palette's selection handlers inside `palette.update`, so
/// delegates must not update the same signal from their callbacks.
pub(crate) fn palette_view(palette: RwSignal<Palette>) -> impl IntoView {
    let (size, background) =
        palette.with_untracked(|p| (p.intrinsic_size(), p.config().background));

    stack_from_iter(GROUPS.map(|kind| group_view(palette, kind))).style(move |s| {
        s.width(size.width)
            .height(size.height)
            .background(background.to_paint())
    })
}
