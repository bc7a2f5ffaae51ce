//! # App Coordinator Module
//!
//! The main update loop: global styling, Escape handling, animation
//! bookkeeping, layout of the main column, and the active modal sheet.

use eframe::egui;
use std::time::Instant;

use crate::ui::app_state::CashCounterApp;
use crate::ui::components::styling::setup_app_style;

/// Width of the phone-style center column.
const COLUMN_WIDTH: f32 = 420.0;

impl eframe::App for CashCounterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        setup_app_style(ctx);

        // Escape behaves as Cancel for whichever sheet is open.
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            if self.editor.is_some() {
                self.cancel_editor();
            } else if self.is_reset_confirm_open() {
                self.cancel_reset();
            }
        }

        // Drop the tile highlight once its pulse has run out.
        if self
            .recent_highlight
            .as_ref()
            .is_some_and(|highlight| highlight.is_expired(now))
        {
            self.recent_highlight = None;
        }

        // Keep the total readout chasing the real total.
        self.animated_total
            .retarget(self.backend.tally.total_amount(), now);

        egui::CentralPanel::default().show(ctx, |ui| {
            let column_rect = center_column(ui.max_rect());
            ui.allocate_ui_at_rect(column_rect, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.add_space(16.0);
                        self.render_header(ui, now);
                        ui.add_space(20.0);
                        self.render_denomination_grid(ui, now);
                        ui.add_space(20.0);
                        self.render_entered_list(ui);
                        ui.add_space(24.0);
                        self.render_reset_bar(ui);
                        ui.add_space(16.0);
                    });
            });
        });

        self.render_count_input_modal(ctx, now);
        self.render_reset_confirm_modal(ctx);

        // Animations and held stepper buttons need frames without input.
        let holding = self
            .editor
            .as_ref()
            .is_some_and(|editor| editor.is_holding());
        if self.animated_total.is_animating(now) || holding || self.recent_highlight.is_some()
        {
            ctx.request_repaint();
        }
    }
}

fn center_column(available: egui::Rect) -> egui::Rect {
    let width = COLUMN_WIDTH.min(available.width());
    egui::Rect::from_min_size(
        egui::pos2(available.center().x - width / 2.0, available.min.y),
        egui::vec2(width, available.height()),
    )
}
