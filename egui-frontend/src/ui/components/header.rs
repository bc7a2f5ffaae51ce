//! # Header Component
//!
//! The title line and the total card: animated total amount plus the
//! note-count and denomination-count badges.

use eframe::egui;
use std::time::Instant;

use shared::format_vnd;

use super::styling::{card_frame, draw_pill};
use super::theme::CURRENT_THEME;
use crate::ui::app_state::CashCounterApp;

impl CashCounterApp {
    pub fn render_header(&mut self, ui: &mut egui::Ui, now: Instant) {
        let copy = self.copy();
        let theme = &CURRENT_THEME;

        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(format!("SWEET HUT {}", copy.title_suffix))
                    .font(egui::FontId::new(22.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(theme.interactive.primary_dark),
            );
        });

        ui.add_space(12.0);

        let displayed_total = self.animated_total.display(now);
        let total_notes = self.backend.tally.total_notes();
        let denomination_count = self.backend.tally.state().denomination_count();

        card_frame().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(copy.total_label)
                        .color(theme.typography.secondary),
                );
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new(format_vnd(displayed_total))
                        .font(egui::FontId::new(30.0, egui::FontFamily::Proportional))
                        .strong()
                        .color(theme.interactive.primary_dark),
                );
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    // Center the two badges as a pair.
                    let badge_width = 220.0_f32.min(ui.available_width());
                    let indent = (ui.available_width() - badge_width).max(0.0) / 2.0;
                    ui.add_space(indent);
                    draw_pill(
                        ui,
                        &copy.notes_count(total_notes),
                        theme.interactive.primary_soft,
                        theme.interactive.primary_dark,
                    );
                    draw_pill(
                        ui,
                        &copy.denominations_count(denomination_count),
                        theme.layout.field_background,
                        theme.typography.secondary,
                    );
                });
            });
        });
    }
}
