//! # Denomination Grid Component
//!
//! The 3-column grid of denomination tiles. Each tile shows the face
//! value, the current note count, and the subtotal; tapping one opens the
//! count editor. The tile edited most recently pulses briefly.

use eframe::egui;
use std::time::Instant;

use shared::{format_vnd, DENOMINATIONS};

use super::theme::CURRENT_THEME;
use crate::ui::app_state::CashCounterApp;

const GRID_COLUMNS: usize = 3;
const TILE_HEIGHT: f32 = 104.0;
const TILE_SPACING: f32 = 10.0;

impl CashCounterApp {
    pub fn render_denomination_grid(&mut self, ui: &mut egui::Ui, now: Instant) {
        let copy = self.copy();
        ui.label(
            egui::RichText::new(copy.grid_section_label)
                .color(CURRENT_THEME.typography.secondary),
        );
        ui.add_space(6.0);

        let tile_width = (ui.available_width()
            - TILE_SPACING * (GRID_COLUMNS as f32 - 1.0))
            / GRID_COLUMNS as f32;

        let mut tapped = None;
        for row in DENOMINATIONS.chunks(GRID_COLUMNS) {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = TILE_SPACING;
                for &denomination in row {
                    let count = self.backend.tally.count(denomination);
                    let highlight = self
                        .recent_highlight
                        .as_ref()
                        .filter(|h| h.denomination == denomination)
                        .map(|h| h.intensity(now));
                    if draw_tile(ui, self, denomination, count, tile_width, highlight) {
                        tapped = Some(denomination);
                    }
                }
            });
            ui.add_space(TILE_SPACING);
        }

        if let Some(denomination) = tapped {
            self.open_editor(denomination);
        }
    }
}

/// Paint one tile; returns true when it was clicked.
fn draw_tile(
    ui: &mut egui::Ui,
    app: &CashCounterApp,
    denomination: u32,
    count: u32,
    width: f32,
    highlight: Option<f32>,
) -> bool {
    let theme = &CURRENT_THEME;
    let copy = app.copy();
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(width, TILE_HEIGHT),
        egui::Sense::click(),
    );
    let painter = ui.painter();

    let fill = if response.is_pointer_button_down_on() {
        theme.layout.field_background
    } else {
        theme.layout.tile_background
    };
    painter.rect_filled(rect, egui::Rounding::same(14.0), fill);

    let stroke = match highlight {
        Some(intensity) => egui::Stroke::new(
            2.0,
            theme
                .interactive
                .recent_highlight
                .gamma_multiply(intensity.max(0.25)),
        ),
        None => egui::Stroke::new(1.0, theme.layout.card_border),
    };
    painter.rect_stroke(rect, egui::Rounding::same(14.0), stroke);

    // Face value pill.
    let pill_text = format_vnd(denomination as u64);
    let pill_galley = painter.layout_no_wrap(
        pill_text,
        egui::FontId::new(13.0, egui::FontFamily::Proportional),
        theme.typography.on_primary,
    );
    let pill_padding = egui::vec2(9.0, 4.0);
    let pill_size = pill_galley.size() + pill_padding * 2.0;
    let pill_rect = egui::Rect::from_center_size(
        egui::pos2(rect.center().x, rect.min.y + 26.0),
        pill_size,
    );
    painter.rect_filled(
        pill_rect,
        egui::Rounding::same(pill_size.y / 2.0),
        theme.interactive.primary,
    );
    painter.galley(pill_rect.min + pill_padding, pill_galley, theme.typography.on_primary);

    // Count badge.
    painter.text(
        egui::pos2(rect.center().x, rect.min.y + 52.0),
        egui::Align2::CENTER_CENTER,
        copy.notes_count(count),
        egui::FontId::new(12.0, egui::FontFamily::Proportional),
        theme.typography.muted,
    );

    // Subtotal, muted until the tile has a value.
    let subtotal = denomination as u64 * count as u64;
    let subtotal_color = if count > 0 {
        theme.typography.secondary
    } else {
        theme.typography.muted
    };
    painter.text(
        egui::pos2(rect.center().x, rect.max.y - 22.0),
        egui::Align2::CENTER_CENTER,
        format_vnd(subtotal),
        egui::FontId::new(13.0, egui::FontFamily::Proportional),
        subtotal_color,
    );

    response.clicked()
}
