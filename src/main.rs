mod app;
mod controller;
mod deck;
mod errors;
mod image_loading;
mod logging;
mod navigator;
mod settings;
mod tests;
mod timing;
mod ui;

use app::VitrineApp;
use eframe::egui;

fn main() -> eframe::Result<()> {
    logging::init_tracing(false);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([640.0, 480.0])
            .with_icon(load_icon()),
        ..Default::default()
    };

    eframe::run_native(
        "Vitrine",
        native_options,
        Box::new(|cc| Ok(Box::new(VitrineApp::new(cc)))),
    )
}

fn load_icon() -> egui::IconData {
    // Create a simple icon programmatically
    let size = 64;
    let mut rgba = vec![0u8; size * size * 4];

    for y in 0..size {
        for x in 0..size {
            let idx = (y * size + x) * 4;
            let cx = x as f32 - size as f32 / 2.0;
            let cy = y as f32 - size as f32 / 2.0;
            let dist = (cx * cx + cy * cy).sqrt();

            if dist < size as f32 / 2.0 - 2.0 {
                // Gradient from teal to indigo
                let t = dist / (size as f32 / 2.0);
                rgba[idx] = (40.0 + 60.0 * t) as u8; // R
                rgba[idx + 1] = (190.0 - 120.0 * t) as u8; // G
                rgba[idx + 2] = (160.0 + 80.0 * t) as u8; // B
                rgba[idx + 3] = 255; // A
            }
        }
    }

    egui::IconData {
        rgba,
        width: size as u32,
        height: size as u32,
    }
}
