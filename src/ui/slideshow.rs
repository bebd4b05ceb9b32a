use crate::app::VitrineApp;
use egui::{Align2, Color32, FontId, Pos2, Rect, RichText, Sense, Vec2};

impl VitrineApp {
    pub fn render_slideshow(&mut self, ctx: &egui::Context) {
        let mut jump: Option<usize> = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.deck.is_none() {
                self.slideshow_hovered = false;
                self.render_welcome_screen(ui);
                return;
            }

            // Pointer over the slideshow region pauses autoplay; the
            // flag is applied to the controller next frame
            self.slideshow_hovered = ui.rect_contains_pointer(ui.max_rect());

            let active = self.controller.active_index();

            // Image area: everything above the caption and dot strip
            let total = ui.available_size();
            let image_height = (total.y - 88.0).max(0.0);
            let (response, painter) =
                ui.allocate_painter(Vec2::new(total.x, image_height), Sense::hover());
            let rect = response.rect;

            if let Some(texture) = self.slide_textures.get(&active) {
                let image_size = texture.size_vec2();
                let scale = (rect.width() / image_size.x)
                    .min(rect.height() / image_size.y)
                    .min(1.0);
                let image_rect = Rect::from_center_size(rect.center(), image_size * scale);

                painter.image(
                    texture.id(),
                    image_rect,
                    Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(1.0, 1.0)),
                    Color32::WHITE,
                );
            } else if self.failed_loads.contains(&active) {
                painter.text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    "Failed to load image",
                    FontId::proportional(18.0),
                    Color32::from_rgb(255, 80, 80),
                );
            } else {
                ui.put(rect, egui::Spinner::new().size(32.0));
            }

            // Caption with a typing cursor
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                let caption = if self.controller.is_typing() {
                    format!("{}▌", self.controller.caption())
                } else {
                    self.controller.caption().to_string()
                };
                ui.label(RichText::new(caption).size(18.0));
            });

            // Dot indicators, one per slide, active in lockstep
            ui.add_space(6.0);
            jump = self.render_dots(ui);
        });

        if let Some(index) = jump {
            self.controller.set_active_slide(index);
            self.controller.restart_autoplay();
        }
    }

    fn render_dots(&self, ui: &mut egui::Ui) -> Option<usize> {
        let count = self.controller.slide_count();
        if count == 0 {
            return None;
        }

        let dot_size = 14.0;
        let spacing = 6.0;
        let accent = self.settings.accent_color.to_color();
        let mut clicked = None;

        ui.horizontal(|ui| {
            let row_width = count as f32 * dot_size + count.saturating_sub(1) as f32 * spacing;
            ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));
            ui.spacing_mut().item_spacing.x = spacing;

            for index in 0..count {
                let (response, painter) = ui.allocate_painter(Vec2::splat(dot_size), Sense::click());
                let center = response.rect.center();
                let radius = if response.hovered() {
                    dot_size / 2.0
                } else {
                    dot_size / 2.0 - 2.0
                };

                let color = if self.controller.is_active(index) {
                    accent
                } else {
                    Color32::from_rgb(90, 90, 95)
                };
                painter.circle_filled(center, radius, color);

                if response.clicked() {
                    clicked = Some(index);
                }
            }
        });

        clicked
    }

    fn render_welcome_screen(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() / 3.0);

            ui.label(RichText::new("🖼").size(64.0));
            ui.add_space(16.0);
            ui.label(RichText::new("Vitrine").size(28.0));
            ui.add_space(8.0);

            if let Some(error) = &self.deck_error {
                ui.label(
                    RichText::new(error)
                        .color(Color32::from_rgb(255, 80, 80))
                        .size(13.0),
                );
            } else {
                ui.label(
                    RichText::new("Open an image folder or a deck manifest to start")
                        .color(Color32::GRAY)
                        .size(14.0),
                );
            }

            ui.add_space(24.0);
            ui.horizontal(|ui| {
                ui.add_space((ui.available_width() / 2.0 - 140.0).max(0.0));
                if ui.button("📁 Open Folder…").clicked() {
                    self.open_folder_dialog();
                }
                if ui.button("📄 Open Manifest…").clicked() {
                    self.open_manifest_dialog();
                }
            });
        });
    }
}
