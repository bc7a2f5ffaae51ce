//! # Reset Confirmation Sheet
//!
//! The confirmation gate in front of the destructive clear: title,
//! warning message, the "don't ask again" checkbox, and cancel/confirm.
//! Visible whenever the backend reset flow is in `ConfirmPending`.

use eframe::egui;

use crate::ui::app_state::CashCounterApp;
use crate::ui::components::theme::CURRENT_THEME;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfirmAction {
    Cancel,
    Confirm,
}

impl CashCounterApp {
    pub fn render_reset_confirm_modal(&mut self, ctx: &egui::Context) {
        if !self.is_reset_confirm_open() {
            return;
        }
        let copy = self.copy();
        let theme = &CURRENT_THEME;
        let mut action: Option<ConfirmAction> = None;
        let mut sheet_rect = egui::Rect::NOTHING;

        egui::Area::new(egui::Id::new("reset_confirm_modal_overlay"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                let screen_rect = ctx.screen_rect();
                ui.painter()
                    .rect_filled(screen_rect, egui::Rounding::ZERO, theme.layout.scrim);

                ui.allocate_ui_at_rect(screen_rect, |ui| {
                    ui.centered_and_justified(|ui| {
                        egui::Frame::window(&ui.style())
                            .fill(theme.layout.sheet_background)
                            .stroke(egui::Stroke::new(1.0, theme.layout.card_border))
                            .rounding(egui::Rounding::same(18.0))
                            .inner_margin(egui::Margin::same(20.0))
                            .show(ui, |ui| {
                                ui.set_min_size(egui::vec2(340.0, 200.0));
                                ui.set_max_size(egui::vec2(340.0, 260.0));

                                ui.label(
                                    egui::RichText::new(copy.reset.confirm_title)
                                        .font(egui::FontId::new(
                                            18.0,
                                            egui::FontFamily::Proportional,
                                        ))
                                        .strong(),
                                );
                                ui.add_space(6.0);
                                ui.label(
                                    egui::RichText::new(copy.reset.confirm_message)
                                        .color(theme.typography.secondary),
                                );
                                ui.add_space(12.0);

                                egui::Frame::none()
                                    .fill(theme.layout.field_background)
                                    .rounding(egui::Rounding::same(10.0))
                                    .inner_margin(egui::Margin::symmetric(10.0, 8.0))
                                    .show(ui, |ui| {
                                        ui.checkbox(
                                            &mut self.reset_confirm_form.skip_next,
                                            copy.reset.skip_label,
                                        );
                                    });
                                ui.add_space(14.0);

                                ui.horizontal(|ui| {
                                    let half = (ui.available_width()
                                        - ui.spacing().item_spacing.x)
                                        / 2.0;
                                    if ui
                                        .add(
                                            egui::Button::new(copy.reset.cancel)
                                                .min_size(egui::vec2(half, 42.0)),
                                        )
                                        .clicked()
                                    {
                                        action = Some(ConfirmAction::Cancel);
                                    }
                                    let confirm = egui::Button::new(
                                        egui::RichText::new(copy.reset.confirm)
                                            .color(theme.typography.on_primary)
                                            .strong(),
                                    )
                                    .fill(theme.interactive.danger)
                                    .min_size(egui::vec2(half, 42.0));
                                    if ui.add(confirm).clicked() {
                                        action = Some(ConfirmAction::Confirm);
                                    }
                                });

                                sheet_rect = ui.min_rect().expand(20.0);
                            });
                    });
                });
            });

        // Scrim press backs out without clearing anything.
        if action.is_none() && ctx.input(|i| i.pointer.any_pressed()) {
            if let Some(pos) = ctx.input(|i| i.pointer.interact_pos()) {
                if !sheet_rect.contains(pos) {
                    action = Some(ConfirmAction::Cancel);
                }
            }
        }

        match action {
            Some(ConfirmAction::Cancel) => self.cancel_reset(),
            Some(ConfirmAction::Confirm) => self.confirm_reset(),
            None => {}
        }
    }
}
