use crate::app::VitrineApp;
use crate::settings::{AccentColor, Theme};
use egui::{Color32, RichText};

impl VitrineApp {
    pub fn render_toolbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 4.0;

                // Sidebar toggle
                if ui
                    .button(RichText::new("☰").size(18.0))
                    .on_hover_text("Toggle Sidebar (S)")
                    .clicked()
                {
                    self.nav.toggle();
                    self.settings.show_sidebar = self.nav.is_open();
                }

                ui.separator();

                if ui.button("📁 Open Folder…").clicked() {
                    self.open_folder_dialog();
                }
                if ui.button("📄 Open Manifest…").clicked() {
                    self.open_manifest_dialog();
                }

                ui.separator();

                // Navigation
                if ui
                    .button(RichText::new("◀").size(18.0))
                    .on_hover_text("Previous (←)")
                    .clicked()
                {
                    self.controller.advance(-1);
                }

                if self.controller.slide_count() > 0 {
                    let text = format!(
                        "{} / {}",
                        self.controller.active_index() + 1,
                        self.controller.slide_count()
                    );
                    ui.label(RichText::new(text).size(14.0));
                }

                if ui
                    .button(RichText::new("▶").size(18.0))
                    .on_hover_text("Next (→)")
                    .clicked()
                {
                    self.controller.advance(1);
                }

                ui.separator();

                // Autoplay toggle
                let autoplay_text = if self.controller.autoplay_running() {
                    "⏸"
                } else {
                    "⏵"
                };
                let autoplay_hint = if self.controller.autoplay_running() {
                    "Pause Autoplay (Space)"
                } else {
                    "Resume Autoplay (Space)"
                };
                if ui
                    .button(RichText::new(autoplay_text).size(16.0))
                    .on_hover_text(autoplay_hint)
                    .clicked()
                {
                    self.controller.toggle_autoplay();
                }

                // Settings menu
                ui.menu_button(RichText::new("⚙"), |ui| {
                    ui.label(RichText::new("Theme").small().color(Color32::GRAY));
                    ui.radio_value(&mut self.settings.theme, Theme::Dark, "🌙 Dark");
                    ui.radio_value(&mut self.settings.theme, Theme::Light, "☀ Light");
                    ui.radio_value(&mut self.settings.theme, Theme::System, "System");

                    ui.separator();
                    ui.label(RichText::new("Accent").small().color(Color32::GRAY));
                    ui.radio_value(&mut self.settings.accent_color, AccentColor::Blue, "Blue");
                    ui.radio_value(&mut self.settings.accent_color, AccentColor::Purple, "Purple");
                    ui.radio_value(&mut self.settings.accent_color, AccentColor::Green, "Green");
                    ui.radio_value(&mut self.settings.accent_color, AccentColor::Orange, "Orange");
                    ui.radio_value(&mut self.settings.accent_color, AccentColor::Red, "Red");

                    ui.separator();
                    ui.add(
                        egui::Slider::new(&mut self.settings.autoplay_interval, 1.0..=30.0)
                            .text("Autoplay interval (s)"),
                    );
                    ui.add(
                        egui::Slider::new(&mut self.settings.typing_interval, 0.01..=0.25)
                            .text("Typing interval (s)"),
                    );
                });

                // Right-aligned deck title
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(deck) = &self.deck {
                        ui.label(RichText::new(deck.title()).color(Color32::GRAY).size(12.0));
                    }
                });
            });
        });
    }
}
