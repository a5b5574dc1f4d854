//! Palette model: three button groups, the brush they configure, and the
//! selection handlers that keep them in sync.

use std::fmt;

use floem::kurbo::{Rect, Size};

use crate::brush::Brush;
use crate::button::{ButtonGroup, CircleButton, GroupKind};
use crate::color::SolidColor;
use crate::config::PaletteConfig;
use crate::constants;
use crate::delegate::PaletteDelegate;
use crate::layout::{self, PaletteMetrics};

/// Built-in color for a 1-based color tag. Unknown tags are black.
pub fn default_color(tag: usize) -> SolidColor {
    match tag {
        1 => SolidColor::WHITE,
        2 => SolidColor::GRAY,
        3 => SolidColor::DARK_GRAY,
        4 => SolidColor::BLACK,
        5 => SolidColor::from_rgba(0.62, 0.32, 0.17, 1.0), // brown
        6 => SolidColor::from_rgba(0.8, 0.2, 0.2, 1.0),    // red
        7 => SolidColor::ORANGE,
        8 => SolidColor::YELLOW,
        9 => SolidColor::from_rgba(0.15, 0.47, 0.23, 1.0), // dark green
        10 => SolidColor::GREEN,
        11 => SolidColor::from_rgba(0.2, 0.3, 1.0, 1.0), // dark blue
        12 => SolidColor::from_rgba(0.2, 0.8, 1.0, 1.0), // blue
        _ => SolidColor::BLACK,
    }
}

/// Color, alpha and width picker state.
///
/// Call [`Palette::setup`] once the delegate (if any) is installed; before
/// that the groups are empty and every selection is a no-op.
pub struct Palette {
    config: PaletteConfig,
    metrics: PaletteMetrics,
    delegate: Option<Box<dyn PaletteDelegate>>,
    brush: Brush,
    colors: ButtonGroup,
    alphas: ButtonGroup,
    widths: ButtonGroup,
    total_height: f64,
}

impl fmt::Debug for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Palette")
            .field("metrics", &self.metrics)
            .field("brush", &self.brush)
            .field("has_delegate", &self.delegate.is_some())
            .field("total_height", &self.total_height)
            .finish_non_exhaustive()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(PaletteConfig::default())
    }
}

impl Palette {
    pub fn new(config: PaletteConfig) -> Self {
        let metrics = config.metrics();
        Self {
            config,
            metrics,
            delegate: None,
            brush: Brush::default(),
            colors: ButtonGroup::new(GroupKind::Color),
            alphas: ButtonGroup::new(GroupKind::Alpha),
            widths: ButtonGroup::new(GroupKind::Width),
            total_height: 0.0,
        }
    }

    /// Palette height for `config` without building a palette.
    pub fn precalc_height(config: &PaletteConfig) -> f64 {
        config.metrics().precalc_palette_height()
    }

    pub fn set_delegate(&mut self, delegate: impl PaletteDelegate + 'static) {
        self.delegate = Some(Box::new(delegate));
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    pub fn config(&self) -> &PaletteConfig {
        &self.config
    }

    pub fn metrics(&self) -> PaletteMetrics {
        self.metrics
    }

    pub fn current_brush(&self) -> Brush {
        self.brush
    }

    pub fn palette_height(&self) -> f64 {
        self.total_height
    }

    /// Preferred size: full screen width by the palette height.
    pub fn intrinsic_size(&self) -> Size {
        Size::new(self.metrics.screen_width, self.total_height)
    }

    pub fn is_set_up(&self) -> bool {
        !self.colors.is_empty()
    }

    pub fn color_group(&self) -> &ButtonGroup {
        &self.colors
    }

    pub fn alpha_group(&self) -> &ButtonGroup {
        &self.alphas
    }

    pub fn width_group(&self) -> &ButtonGroup {
        &self.widths
    }

    pub fn group(&self, kind: GroupKind) -> &ButtonGroup {
        match kind {
            GroupKind::Color => &self.colors,
            GroupKind::Alpha => &self.alphas,
            GroupKind::Width => &self.widths,
        }
    }

    /// Builds the color, alpha and width groups and applies the default
    /// selection. Calling it again rebuilds everything.
    pub fn setup(&mut self) {
        self.colors = ButtonGroup::new(GroupKind::Color);
        self.alphas = ButtonGroup::new(GroupKind::Alpha);
        self.widths = ButtonGroup::new(GroupKind::Width);
        self.brush = Brush::default();

        self.setup_color_group();
        self.setup_alpha_group();
        self.setup_width_group();
        self.setup_default_values();

        log::debug!(
            "palette set up: height {:.1}, brush {:?}",
            self.total_height,
            self.brush
        );
    }

    fn setup_color_group(&mut self) {
        let PaletteMetrics {
            diameter, padding, ..
        } = self.metrics;
        for tag in 1..=constants::COLOR_COUNT {
            let color = self.color_for_tag(tag);
            let frame =
                layout::button_rect(tag, diameter, diameter, padding, constants::COLOR_COLUMNS);
            self.colors
                .push(CircleButton::new(tag, diameter, color, 1.0, frame));
        }

        let last = self.colors.last().map_or(Rect::ZERO, |b| b.frame);
        self.total_height = last.max_y() + padding;
        self.colors
            .set_frame(Rect::new(0.0, 0.0, last.max_x() + padding, self.total_height));
    }

    fn setup_alpha_group(&mut self) {
        let PaletteMetrics {
            diameter, padding, ..
        } = self.metrics;
        let mut max_x: f64 = 0.0;
        // Built highest tag first, so the opaque button leads the group.
        for tag in (1..=constants::ALPHA_COUNT).rev() {
            let opacity = self.opacity_for_tag(tag);
            let frame =
                layout::button_rect(tag, diameter, diameter, padding, constants::ALPHA_COUNT);
            max_x = max_x.max(frame.max_x());
            self.alphas.push(CircleButton::new(
                tag,
                diameter,
                SolidColor::BLACK,
                opacity,
                frame,
            ));
        }

        let width = max_x + padding;
        let x = self.metrics.right_aligned_x(width);
        self.alphas
            .set_frame(Rect::new(x, 0.0, x + width, padding + diameter));
    }

    fn setup_width_group(&mut self) {
        let PaletteMetrics {
            diameter, padding, ..
        } = self.metrics;
        let mut last_x = constants::WIDTH_ROW_START;
        for tag in 1..=constants::WIDTH_COUNT {
            let button_diameter = self.width_for_tag(tag);
            let frame = layout::width_button_rect(
                tag,
                button_diameter,
                diameter,
                padding,
                constants::WIDTH_COUNT,
                last_x,
            );
            last_x = frame.max_x();
            self.widths.push(CircleButton::new(
                tag,
                button_diameter,
                SolidColor::BLACK,
                1.0,
                frame,
            ));
        }

        let width = last_x + padding;
        let x = self.metrics.right_aligned_x(width);
        let y = self.alphas.frame().max_y();
        self.widths
            .set_frame(Rect::new(x, y, x + width, y + padding + diameter));
    }

    fn setup_default_values(&mut self) {
        if let Some(button) = self.colors.select(0) {
            self.brush.color = button.color;
        }
        if let Some(button) = self.alphas.select(0) {
            self.brush.alpha = button.opacity;
        }
        let thickest = self.widths.len().saturating_sub(1);
        if let Some(button) = self.widths.select(thickest) {
            self.brush.width = button.diameter;
        }
    }

    /// Color for a color tag: the delegate's override, else the built-in one.
    pub fn color_for_tag(&self, tag: usize) -> SolidColor {
        self.delegate
            .as_ref()
            .and_then(|d| d.color_for_tag(tag))
            .unwrap_or_else(|| default_color(tag))
    }

    /// Opacity for an alpha tag. Overrides outside 0.0–1.0 fall back to
    /// `tag / 3`.
    pub fn opacity_for_tag(&self, tag: usize) -> f64 {
        let default = tag as f64 / constants::ALPHA_COUNT as f64;
        match self.delegate.as_ref().and_then(|d| d.alpha_for_tag(tag)) {
            Some(alpha) if (0.0..=1.0).contains(&alpha) => alpha,
            Some(alpha) => {
                log::warn!("ignoring alpha {alpha} for tag {tag}, using {default}");
                default
            }
            None => default,
        }
    }

    /// Diameter for a width tag. Overrides must be in `(0, diameter]`,
    /// otherwise `diameter * tag / 4` is used.
    pub fn width_for_tag(&self, tag: usize) -> f64 {
        let max = self.metrics.diameter;
        let default = max * (tag as f64 / constants::WIDTH_COUNT as f64);
        match self.delegate.as_ref().and_then(|d| d.width_for_tag(tag)) {
            Some(width) if width > 0.0 && width <= max => width,
            Some(width) => {
                log::warn!("ignoring width {width} for tag {tag}, using {default}");
                default
            }
            None => default,
        }
    }

    /// Programmatic click on the color button at `index` (0-based).
    pub fn select_color_button(&mut self, index: usize) {
        self.select_color(index);
    }

    /// Handles a click on the color button at `index`.
    ///
    /// Alpha and width buttons take the new color; alpha buttons are
    /// disabled while the color is clear.
    pub fn select_color(&mut self, index: usize) {
        let Some(color) = self.colors.select(index).map(|b| b.color) else {
            log::trace!("no color button at {index}");
            return;
        };
        self.brush.color = color;
        let enable_alpha = !color.is_clear();

        self.widths.recolor(color, true);
        self.alphas.recolor(color, enable_alpha);

        log::debug!("brush color -> #{}", color.to_hex());
        if let Some(delegate) = &self.delegate {
            delegate.brush_color_changed(color);
        }
    }

    /// Handles a click on the alpha button at `index`.
    pub fn select_alpha(&mut self, index: usize) {
        let Some(alpha) = self.alphas.select(index).map(|b| b.opacity) else {
            log::trace!("no alpha button at {index}");
            return;
        };
        self.brush.alpha = alpha;

        log::debug!("brush alpha -> {alpha:.2}");
        if let Some(delegate) = &self.delegate {
            delegate.brush_alpha_changed(alpha);
        }
    }

    /// Handles a click on the width button at `index`.
    pub fn select_width(&mut self, index: usize) {
        let Some(width) = self.widths.select(index).map(|b| b.diameter) else {
            log::trace!("no width button at {index}");
            return;
        };
        self.brush.width = width;

        log::debug!("brush width -> {width:.1}");
        if let Some(delegate) = &self.delegate {
            delegate.brush_width_changed(width);
        }
    }

    /// Dispatches a click to the handler of `kind`.
    pub fn select(&mut self, kind: GroupKind, index: usize) {
        match kind {
            GroupKind::Color => self.select_color(index),
            GroupKind::Alpha => self.select_alpha(index),
            GroupKind::Width => self.select_width(index),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Change {
        Color(SolidColor),
        Alpha(f64),
        Width(f64),
    }

    #[derive(Default)]
    struct TestDelegate {
        changes: Rc<RefCell<Vec<Change>>>,
        color: Option<SolidColor>,
        alpha: Option<f64>,
        width: Option<f64>,
    }

    impl PaletteDelegate for TestDelegate {
        fn brush_color_changed(&self, color: SolidColor) {
            self.changes.borrow_mut().push(Change::Color(color));
        }
        fn brush_alpha_changed(&self, alpha: f64) {
            self.changes.borrow_mut().push(Change::Alpha(alpha));
        }
        fn brush_width_changed(&self, width: f64) {
            self.changes.borrow_mut().push(Change::Width(width));
        }
        fn color_for_tag(&self, _tag: usize) -> Option<SolidColor> {
            self.color
        }
        fn alpha_for_tag(&self, _tag: usize) -> Option<f64> {
            self.alpha
        }
        fn width_for_tag(&self, _tag: usize) -> Option<f64> {
            self.width
        }
    }

    fn palette_with(delegate: TestDelegate) -> Palette {
        let mut palette = Palette::default();
        palette.set_delegate(delegate);
        palette.setup();
        palette
    }

    fn selected_count(group: &ButtonGroup) -> usize {
        group.iter().filter(|b| b.selected).count()
    }

    #[test]
    fn test_default_colors() {
        let palette = Palette::default();
        assert_eq!(palette.color_for_tag(1), SolidColor::WHITE);
        assert_eq!(palette.color_for_tag(4), SolidColor::BLACK);
        assert_eq!(
            palette.color_for_tag(12),
            SolidColor::from_rgba(0.2, 0.8, 1.0, 1.0)
        );
        assert_eq!(palette.color_for_tag(13), SolidColor::BLACK);
        assert_eq!(palette.color_for_tag(0), SolidColor::BLACK);
    }

    #[test]
    fn test_color_override_is_unconditional() {
        let palette = palette_with(TestDelegate {
            color: Some(SolidColor::CLEAR),
            ..Default::default()
        });
        for tag in 1..=12 {
            assert_eq!(palette.color_for_tag(tag), SolidColor::CLEAR);
        }
        assert!(palette.color_group().iter().all(|b| b.color == SolidColor::CLEAR));
    }

    #[test]
    fn test_default_opacity() {
        let palette = Palette::default();
        for tag in 1..=3 {
            assert!((palette.opacity_for_tag(tag) - tag as f64 / 3.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_opacity_override_range() {
        for (value, accepted) in [(-0.1, false), (1.5, false), (f64::NAN, false), (0.0, true), (1.0, true), (0.4, true)] {
            let palette = palette_with(TestDelegate {
                alpha: Some(value),
                ..Default::default()
            });
            for tag in 1..=3 {
                let expected = if accepted { value } else { tag as f64 / 3.0 };
                assert!((palette.opacity_for_tag(tag) - expected).abs() < f64::EPSILON);
            }
        }
    }

    #[test]
    fn test_default_width() {
        let palette = Palette::default();
        let max = palette.metrics().diameter;
        for tag in 1..=4 {
            assert!((palette.width_for_tag(tag) - max * (tag as f64 / 4.0)).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_width_override_range() {
        let max = Palette::default().metrics().diameter;
        for (value, accepted) in [(0.0, false), (-2.0, false), (max + 0.5, false), (max, true), (3.0, true)] {
            let palette = palette_with(TestDelegate {
                width: Some(value),
                ..Default::default()
            });
            for tag in 1..=4 {
                let expected = if accepted { value } else { max * (tag as f64 / 4.0) };
                assert!((palette.width_for_tag(tag) - expected).abs() < f64::EPSILON);
            }
        }
    }

    #[test]
    fn test_setup_selects_one_per_group() {
        let mut palette = Palette::default();
        assert!(!palette.is_set_up());
        palette.setup();
        assert!(palette.is_set_up());
        assert_eq!(palette.color_group().len(), 12);
        assert_eq!(palette.alpha_group().len(), 3);
        assert_eq!(palette.width_group().len(), 4);
        for kind in [GroupKind::Color, GroupKind::Alpha, GroupKind::Width] {
            assert_eq!(selected_count(palette.group(kind)), 1);
        }
    }

    #[test]
    fn test_setup_twice_rebuilds() {
        let mut palette = Palette::default();
        palette.setup();
        palette.select_color(5);
        palette.setup();
        assert_eq!(palette.color_group().len(), 12);
        assert_eq!(palette.color_group().selected().map(|(i, _)| i), Some(0));
        assert_eq!(palette.current_brush().color, SolidColor::WHITE);
    }

    #[test]
    fn test_default_selection() {
        let mut palette = Palette::default();
        palette.setup();
        let max = palette.metrics().diameter;

        let (index, color) = palette.color_group().selected().unwrap();
        assert_eq!((index, color.tag), (0, 1));

        // alpha group is built in reverse, so the first button is the opaque one
        let (index, alpha) = palette.alpha_group().selected().unwrap();
        assert_eq!((index, alpha.tag), (0, 3));
        assert!((alpha.opacity - 1.0).abs() < f64::EPSILON);

        let (index, width) = palette.width_group().selected().unwrap();
        assert_eq!((index, width.tag), (3, 4));

        let brush = palette.current_brush();
        assert_eq!(brush.color, SolidColor::WHITE);
        assert!((brush.alpha - 1.0).abs() < f64::EPSILON);
        assert!((brush.width - max).abs() < f64::EPSILON);
    }

    #[test]
    fn test_setup_does_not_notify() {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let _palette = palette_with(TestDelegate {
            changes: changes.clone(),
            ..Default::default()
        });
        assert!(changes.borrow().is_empty());
    }

    #[test]
    fn test_select_color_recolors_and_notifies() {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let mut palette = palette_with(TestDelegate {
            changes: changes.clone(),
            ..Default::default()
        });

        palette.select_color(7);
        let picked = palette.color_group().get(7).unwrap().color;
        assert_eq!(picked, SolidColor::YELLOW);

        for (i, button) in palette.color_group().iter().enumerate() {
            assert_eq!(button.selected, i == 7);
        }
        assert!(palette.alpha_group().iter().all(|b| b.color == picked && b.enabled));
        assert!(palette.width_group().iter().all(|b| b.color == picked));
        // recoloring leaves the other selections alone
        assert_eq!(palette.alpha_group().selected().map(|(i, _)| i), Some(0));
        assert_eq!(palette.width_group().selected().map(|(i, _)| i), Some(3));

        assert_eq!(palette.current_brush().color, picked);
        assert_eq!(*changes.borrow(), vec![Change::Color(picked)]);
    }

    #[test]
    fn test_clear_color_disables_alpha() {
        let mut palette = Palette::default();
        palette.set_delegate(ClearFirst);
        palette.setup();

        palette.select_color(0);
        assert!(palette.alpha_group().iter().all(|b| !b.enabled));
        assert!(palette.width_group().iter().all(|b| b.enabled));

        palette.select_color(1);
        assert!(palette.alpha_group().iter().all(|b| b.enabled));
    }

    struct ClearFirst;

    impl PaletteDelegate for ClearFirst {
        fn color_for_tag(&self, tag: usize) -> Option<SolidColor> {
            (tag == 1).then_some(SolidColor::CLEAR)
        }
    }

    #[test]
    fn test_select_color_button_out_of_range_is_noop() {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let mut palette = palette_with(TestDelegate {
            changes: changes.clone(),
            ..Default::default()
        });
        let colors = palette.color_group().clone();
        let alphas = palette.alpha_group().clone();
        let widths = palette.width_group().clone();
        let brush = palette.current_brush();

        palette.select_color_button(99);

        assert_eq!(palette.color_group(), &colors);
        assert_eq!(palette.alpha_group(), &alphas);
        assert_eq!(palette.width_group(), &widths);
        assert_eq!(palette.current_brush(), brush);
        assert!(changes.borrow().is_empty());
    }

    #[test]
    fn test_select_before_setup_is_noop() {
        let mut palette = Palette::default();
        palette.select_color_button(0);
        palette.select_alpha(0);
        palette.select_width(0);
        assert_eq!(palette.current_brush(), Brush::default());
    }

    #[test]
    fn test_select_alpha_and_width() {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let mut palette = palette_with(TestDelegate {
            changes: changes.clone(),
            ..Default::default()
        });
        let max = palette.metrics().diameter;

        // index 2 is tag 1
        palette.select(GroupKind::Alpha, 2);
        assert!((palette.current_brush().alpha - 1.0 / 3.0).abs() < f64::EPSILON);
        assert_eq!(palette.alpha_group().selected().map(|(i, _)| i), Some(2));
        assert_eq!(selected_count(palette.alpha_group()), 1);

        palette.select(GroupKind::Width, 0);
        assert!((palette.current_brush().width - max / 4.0).abs() < f64::EPSILON);
        assert_eq!(selected_count(palette.width_group()), 1);

        palette.select_width(4);
        assert_eq!(
            *changes.borrow(),
            vec![Change::Alpha(1.0 / 3.0), Change::Width(max / 4.0)]
        );
    }

    #[test]
    fn test_palette_height_matches_precalc() {
        for config in [
            PaletteConfig::default(),
            PaletteConfig::for_screen(1024.0, 768.0),
        ] {
            let mut palette = Palette::new(config.clone());
            palette.setup();
            assert_eq!(palette.palette_height(), Palette::precalc_height(&config));
            let metrics = config.metrics();
            let expected = 2.0 * metrics.diameter + 3.0 * metrics.padding;
            assert!((palette.palette_height() - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_group_frames() {
        let mut palette = Palette::default();
        palette.setup();
        let PaletteMetrics {
            diameter,
            padding,
            screen_width,
        } = palette.metrics();

        let colors = palette.color_group().frame();
        assert_eq!((colors.x0, colors.y0), (0.0, 0.0));
        assert!((colors.height() - palette.palette_height()).abs() < f64::EPSILON);

        let alphas = palette.alpha_group().frame();
        assert!((alphas.max_x() - (screen_width - 2.0 * padding)).abs() < 1e-9);
        assert!((alphas.height() - (padding + diameter)).abs() < 1e-9);

        let widths = palette.width_group().frame();
        assert!((widths.y0 - alphas.max_y()).abs() < f64::EPSILON);
        assert!((widths.max_x() - (screen_width - 2.0 * padding)).abs() < 1e-9);

        let size = palette.intrinsic_size();
        assert!((size.width - screen_width).abs() < f64::EPSILON);
        assert!((size.height - palette.palette_height()).abs() < f64::EPSILON);
    }

    #[test]
    fn test_width_buttons_grow_left_to_right() {
        let mut palette = Palette::default();
        palette.setup();
        let buttons: Vec<&CircleButton> = palette.width_group().iter().collect();
        for pair in buttons.windows(2) {
            assert!(pair[1].diameter > pair[0].diameter);
            assert!(pair[1].frame.x0 > pair[0].frame.max_x());
        }
    }
}
