//! Standalone demo: opens a window with the brush palette and logs every
//! brush change.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_brush_palette::{brush_palette, Palette, PaletteConfig, PaletteDelegate, SolidColor};

struct LoggingDelegate;

impl PaletteDelegate for LoggingDelegate {
    fn brush_color_changed(&self, color: SolidColor) {
        log::info!("color #{}", color.to_hex());
    }

    fn brush_alpha_changed(&self, alpha: f64) {
        log::info!("alpha {alpha:.2}");
    }

    fn brush_width_changed(&self, width: f64) {
        log::info!("width {width:.1}");
    }

    // Last slot becomes an eraser; picking it disables the alpha row.
    fn color_for_tag(&self, tag: usize) -> Option<SolidColor> {
        (tag == 12).then_some(SolidColor::CLEAR)
    }
}

fn main() {
    env_logger::init();

    let config = PaletteConfig::for_screen(480.0, 320.0);
    let height = Palette::precalc_height(&config);
    let width = config.screen_width;

    let mut palette = Palette::new(config);
    palette.set_delegate(LoggingDelegate);
    palette.setup();
    let palette = RwSignal::new(palette);

    floem::Application::new()
        .window(
            move |_| {
                brush_palette(palette).on_event_stop(
                    floem::event::EventListener::WindowClosed,
                    |_| floem::quit_app(),
                )
            },
            Some(
                WindowConfig::default()
                    .size((width, height))
                    .title("floem-brush-palette"),
            ),
        )
        .run();
}
