use crate::settings::{Settings, Theme};
use egui::Color32;

pub fn apply_theme(ctx: &egui::Context, settings: &Settings) {
    let mut visuals = match settings.theme {
        Theme::Dark => {
            let mut visuals = egui::Visuals::dark();
            visuals.panel_fill = Color32::from_rgb(24, 24, 28);
            visuals.window_fill = Color32::from_rgb(28, 28, 32);
            visuals
        }
        Theme::Light => egui::Visuals::light(),
        // Default to dark for now
        Theme::System => egui::Visuals::dark(),
    };

    // Accent drives active widgets and selection
    visuals.widgets.active.bg_fill = settings.accent_color.to_color();
    visuals.selection.bg_fill = settings.accent_color.to_color().linear_multiply(0.5);

    ctx.set_visuals(visuals);
}
