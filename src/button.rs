//! Selector button state and button groups.

use floem::kurbo::Rect;

use crate::color::SolidColor;

/// State of one circular selector button.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleButton {
    /// 1-based tag the button's value was resolved from.
    pub tag: usize,
    pub diameter: f64,
    pub color: SolidColor,
    pub opacity: f64,
    pub selected: bool,
    pub enabled: bool,
    /// Position inside the owning group's container.
    pub frame: Rect,
}

impl CircleButton {
    pub fn new(tag: usize, diameter: f64, color: SolidColor, opacity: f64, frame: Rect) -> Self {
        Self {
            tag,
            diameter,
            color,
            opacity,
            selected: false,
            enabled: true,
            frame,
        }
    }

    /// The color actually painted: fill color at the button's opacity.
    pub fn fill(&self) -> SolidColor {
        self.color.with_opacity(self.opacity)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKind {
    Color,
    Alpha,
    Width,
}

/// An ordered set of buttons with at most one selected.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonGroup {
    kind: GroupKind,
    buttons: Vec<CircleButton>,
    /// Container position inside the palette.
    frame: Rect,
}

impl ButtonGroup {
    pub fn new(kind: GroupKind) -> Self {
        Self {
            kind,
            buttons: Vec::new(),
            frame: Rect::ZERO,
        }
    }

    pub fn kind(&self) -> GroupKind {
        self.kind
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub(crate) fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    pub(crate) fn push(&mut self, button: CircleButton) {
        self.buttons.push(button);
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CircleButton> {
        self.buttons.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CircleButton> {
        self.buttons.iter()
    }

    pub fn last(&self) -> Option<&CircleButton> {
        self.buttons.last()
    }

    /// Index and state of the selected button, if any.
    pub fn selected(&self) -> Option<(usize, &CircleButton)> {
        self.buttons.iter().enumerate().find(|(_, b)| b.selected)
    }

    /// Selects the button at `index` and deselects every other one.
    ///
    /// Returns the newly selected button, or `None` (and leaves the group
    /// untouched) when `index` is out of range.
    pub fn select(&mut self, index: usize) -> Option<&CircleButton> {
        if index >= self.buttons.len() {
            return None;
        }
        for (i, button) in self.buttons.iter_mut().enumerate() {
            button.selected = i == index;
        }
        self.buttons.get(index)
    }

    /// Repaints every button with `color` and sets their enabled flag.
    ///
    /// Selection is left as is.
    pub fn recolor(&mut self, color: SolidColor, enabled: bool) {
        for button in &mut self.buttons {
            button.color = color;
            button.enabled = enabled;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group_of(n: usize) -> ButtonGroup {
        let mut group = ButtonGroup::new(GroupKind::Alpha);
        for tag in 1..=n {
            group.push(CircleButton::new(
                tag,
                10.0,
                SolidColor::BLACK,
                1.0,
                Rect::new(0.0, 0.0, 10.0, 10.0),
            ));
        }
        group
    }

    #[test]
    fn test_new_group_has_no_selection() {
        let group = group_of(3);
        assert!(group.selected().is_none());
        assert_eq!(group.len(), 3);
    }

    #[test]
    fn test_select_is_exclusive() {
        let mut group = group_of(4);
        group.select(1);
        group.select(3);
        let selected: Vec<usize> = group
            .iter()
            .enumerate()
            .filter(|(_, b)| b.selected)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(selected, vec![3]);
        assert_eq!(group.selected().map(|(i, b)| (i, b.tag)), Some((3, 4)));
    }

    #[test]
    fn test_select_out_of_range_is_noop() {
        let mut group = group_of(3);
        group.select(0);
        let before = group.clone();
        assert!(group.select(3).is_none());
        assert_eq!(group, before);
    }

    #[test]
    fn test_recolor_keeps_selection() {
        let mut group = group_of(3);
        group.select(2);
        group.recolor(SolidColor::YELLOW, false);
        assert!(group.iter().all(|b| b.color == SolidColor::YELLOW && !b.enabled));
        assert_eq!(group.selected().map(|(i, _)| i), Some(2));
    }

    #[test]
    fn test_fill_applies_opacity() {
        let button = CircleButton::new(1, 10.0, SolidColor::WHITE, 0.25, Rect::ZERO);
        assert!((button.fill().a() - 0.25).abs() < f64::EPSILON);
    }
}
