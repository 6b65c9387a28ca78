use eframe::NativeOptions;
use roomdeck::RoomdeckOptions;

use crate::theme;

pub const WINDOW_TITLE: &str = "Roomdeck";
const DEFAULT_WINDOW_SIZE: [f32; 2] = [1280.0, 800.0];
const MIN_WINDOW_SIZE: [f32; 2] = [720.0, 480.0];

/// Renderers to open the window with, in order. The glow window has no
/// wgpu state, so the room falls back to the isometric view there.
pub const RENDERER_FALLBACKS: [eframe::Renderer; 2] =
    [eframe::Renderer::Wgpu, eframe::Renderer::Glow];

pub fn generate_native_options(renderer: eframe::Renderer) -> NativeOptions {
    eframe::NativeOptions {
        renderer,
        // for 3d widgets
        depth_buffer: 24,
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(DEFAULT_WINDOW_SIZE)
            .with_min_inner_size(MIN_WINDOW_SIZE),
        ..Default::default()
    }
}

/// Install both theme visuals and pick the preferred one.
pub fn setup_cc(ctx: &egui::Context, options: RoomdeckOptions) {
    ctx.set_visuals_of(egui::Theme::Dark, theme::dark_mode());
    ctx.set_visuals_of(egui::Theme::Light, theme::light_mode());

    let preference = if options.contains(RoomdeckOptions::LightTheme) {
        egui::ThemePreference::Light
    } else {
        egui::ThemePreference::Dark
    };
    ctx.options_mut(|o| o.theme_preference = preference);

    if options.contains(RoomdeckOptions::Debug) {
        ctx.set_debug_on_hover(true);
    }
}
