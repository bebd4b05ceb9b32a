use crate::app::VitrineApp;
use crate::navigator::NavAction;
use egui::{Align2, Color32, CornerRadius, FontId, Pos2, RichText, Sense, Vec2};

impl VitrineApp {
    pub fn render_sidebar(&mut self, ctx: &egui::Context) {
        // Collect the click first; selection mutates state after the
        // panel borrow ends
        let mut selected: Option<(usize, (f32, f32), Option<usize>)> = None;

        egui::SidePanel::left("sidebar")
            .resizable(false)
            .exact_width(self.settings.sidebar_width)
            .show_animated(ctx, self.nav.is_open(), |ui| {
                let Some(deck) = &self.deck else {
                    ui.add_space(12.0);
                    ui.label(RichText::new("No deck loaded").color(Color32::GRAY).size(12.0));
                    return;
                };

                ui.add_space(10.0);
                ui.heading(RichText::new(deck.title()).size(16.0));
                ui.add_space(6.0);
                ui.separator();
                ui.add_space(6.0);

                let accent = self.settings.accent_color.to_color();
                let hover_fill = ui.visuals().widgets.hovered.bg_fill;
                let text_color = ui.visuals().text_color();

                for (index, entry) in deck.entries.iter().enumerate() {
                    let is_active = self.nav.active_entry() == Some(index);
                    let (response, painter) =
                        ui.allocate_painter(Vec2::new(ui.available_width(), 36.0), Sense::click());
                    let rect = response.rect;

                    if is_active {
                        painter.rect_filled(rect, CornerRadius::same(6), accent.linear_multiply(0.25));
                    } else if response.hovered() {
                        painter.rect_filled(rect, CornerRadius::same(6), hover_fill);
                    }

                    // Click ripple, clipped to the row
                    if let Some(ripple) = self.nav.ripple() {
                        if ripple.entry == index && !ripple.finished() {
                            let t = ripple.progress();
                            let center = Pos2::new(rect.left() + ripple.x, rect.top() + ripple.y);
                            let radius = 8.0 + t * rect.width();
                            painter
                                .with_clip_rect(rect)
                                .circle_filled(center, radius, accent.gamma_multiply(0.35 * (1.0 - t)));
                        }
                    }

                    painter.text(
                        Pos2::new(rect.left() + 12.0, rect.center().y),
                        Align2::LEFT_CENTER,
                        &entry.label,
                        FontId::proportional(14.0),
                        if is_active { accent } else { text_color },
                    );

                    if response.clicked() {
                        let pos = response.interact_pointer_pos().unwrap_or_else(|| rect.center());
                        selected =
                            Some((index, (pos.x - rect.left(), pos.y - rect.top()), entry.target));
                    }
                }
            });

        if let Some((index, click, target)) = selected {
            match self.nav.select(index, click, target) {
                NavAction::JumpToSlide(slide) => {
                    self.controller.set_active_slide(slide);
                    self.controller.restart_autoplay();
                }
                NavAction::None => {}
            }
        }
    }
}
