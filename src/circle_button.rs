//! Circular selector button view.

use floem::kurbo::{Circle, Point, Rect, Stroke};
use floem::peniko::Color;

use floem::reactive::create_effect;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::button::CircleButton;
use crate::checkerboard;
use crate::color::SolidColor;
use crate::constants;

struct StateUpdate(CircleButton);

pub struct CircleButtonView {
    id: ViewId,
    held: bool,
    state: Option<CircleButton>,
    size: floem::taffy::prelude::Size<f32>,
    on_click: Option<Box<dyn Fn()>>,
}

/// Creates a circular selector button.
///
/// - `state`: reactive source of the button's model state. `None` hides it.
/// - `on_click`: fired on pointer release over an enabled button.
pub fn circle_button(
    state: impl Fn() -> Option<CircleButton> + 'static,
    on_click: impl Fn() + 'static,
) -> CircleButtonView {
    let id = ViewId::new();
    let initial = state();

    create_effect(move |_| {
        if let Some(button) = state() {
            id.update_state(StateUpdate(button));
        }
    });

    CircleButtonView {
        id,
        held: false,
        state: initial,
        size: Default::default(),
        on_click: Some(Box::new(on_click)),
    }
}

impl CircleButtonView {
    fn is_enabled(&self) -> bool {
        self.state.as_ref().is_some_and(|s| s.enabled)
    }

    fn contains(&self, pos: Point) -> bool {
        let bounds = Rect::new(0.0, 0.0, self.size.width as f64, self.size.height as f64);
        bounds.contains(pos)
    }
}

impl View for CircleButtonView {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<StateUpdate>() {
            self.state = Some(update.0);
            self.id.request_paint();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(_) => {
                if !self.is_enabled() {
                    return EventPropagation::Continue;
                }
                cx.update_active(self.id());
                self.held = true;
                EventPropagation::Stop
            }
            Event::PointerUp(e) => {
                let was_held = std::mem::take(&mut self.held);
                if was_held && self.is_enabled() && self.contains(e.pos) {
                    if let Some(cb) = &self.on_click {
                        cb();
                    }
                    return EventPropagation::Stop;
                }
                EventPropagation::Continue
            }
            Event::FocusLost => {
                self.held = false;
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let Some(state) = &self.state else {
            return;
        };
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }

        let center = Point::new(w / 2.0, h / 2.0);
        let circle = Circle::new(center, w.min(h) / 2.0);
        let fill = state.fill();

        if fill.a() < 1.0 {
            checkerboard::paint_checkerboard(cx, circle);
        }
        cx.fill(&circle, fill.to_paint(), 0.0);

        // Keeps dark fills visible on the dark panel
        cx.stroke(&circle, Color::rgba8(255, 255, 255, 60), &Stroke::new(1.0));

        if state.selected {
            let ring = Circle::new(center, circle.radius - constants::SELECTION_RING / 2.0);
            let light = fill.a() < 0.5 || (fill.r() + fill.g() + fill.b()) / 3.0 > 0.6;
            let ring_color = if light {
                SolidColor::BLACK
            } else {
                SolidColor::WHITE
            };
            cx.stroke(
                &ring,
                ring_color.to_paint(),
                &Stroke::new(constants::SELECTION_RING),
            );
        }

        if !state.enabled {
            cx.fill(&circle, Color::rgba(0.0, 0.0, 0.0, 0.5), 0.0);
        }
    }
}
