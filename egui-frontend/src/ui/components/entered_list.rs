//! # Entered List Component
//!
//! The list of denominations that currently have a count, with per-row
//! subtotals. Rows are tappable and reopen the editor; an empty tally
//! shows a hint line instead.

use eframe::egui;

use shared::format_vnd;

use super::styling::card_frame;
use super::theme::CURRENT_THEME;
use crate::ui::app_state::CashCounterApp;

const ROW_HEIGHT: f32 = 56.0;

impl CashCounterApp {
    pub fn render_entered_list(&mut self, ui: &mut egui::Ui) {
        let copy = self.copy();
        let theme = &CURRENT_THEME;
        let entries = self.backend.tally.entries();

        if entries.is_empty() {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(copy.empty_list_hint)
                        .color(theme.typography.muted)
                        .italics(),
                );
            });
            return;
        }

        let mut tapped = None;
        card_frame().show(ui, |ui| {
            for (index, entry) in entries.iter().enumerate() {
                if index > 0 {
                    ui.separator();
                }
                let (rect, response) = ui.allocate_exact_size(
                    egui::vec2(ui.available_width(), ROW_HEIGHT),
                    egui::Sense::click(),
                );
                if response.clicked() {
                    tapped = Some(entry.denomination);
                }
                let painter = ui.painter();
                if response.hovered() {
                    painter.rect_filled(
                        rect,
                        egui::Rounding::same(8.0),
                        theme.layout.field_background,
                    );
                }

                painter.text(
                    egui::pos2(rect.min.x + 8.0, rect.center().y - 10.0),
                    egui::Align2::LEFT_CENTER,
                    format_vnd(entry.denomination as u64),
                    egui::FontId::new(16.0, egui::FontFamily::Proportional),
                    theme.typography.primary,
                );
                painter.text(
                    egui::pos2(rect.min.x + 8.0, rect.center().y + 12.0),
                    egui::Align2::LEFT_CENTER,
                    copy.notes_count(entry.count),
                    egui::FontId::new(12.0, egui::FontFamily::Proportional),
                    theme.typography.muted,
                );
                painter.text(
                    egui::pos2(rect.max.x - 8.0, rect.center().y - 10.0),
                    egui::Align2::RIGHT_CENTER,
                    format_vnd(entry.subtotal()),
                    egui::FontId::new(16.0, egui::FontFamily::Proportional),
                    theme.interactive.primary_dark,
                );
                painter.text(
                    egui::pos2(rect.max.x - 8.0, rect.center().y + 12.0),
                    egui::Align2::RIGHT_CENTER,
                    copy.list_subtotal_label,
                    egui::FontId::new(11.0, egui::FontFamily::Proportional),
                    theme.typography.muted,
                );
            }
        });

        if let Some(denomination) = tapped {
            self.open_editor(denomination);
        }
    }
}
