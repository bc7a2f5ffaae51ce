//! # Count Input Sheet
//!
//! The modal editing sheet for one denomination: stepper with
//! press-and-hold auto-repeat, direct numeric entry, subtotal preview,
//! and the confirm / cancel / delete actions. Tapping the scrim or
//! pressing Escape cancels.

use eframe::egui;
use std::time::Instant;

use shared::format_vnd;

use crate::ui::app_state::CashCounterApp;
use crate::ui::components::theme::CURRENT_THEME;
use crate::ui::state::{CountEditor, CountError, CountInputMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SheetAction {
    Commit,
    Cancel,
    Delete,
    ToggleMode,
}

impl CashCounterApp {
    pub fn render_count_input_modal(&mut self, ctx: &egui::Context, now: Instant) {
        let copy = self.copy();
        let editor = match self.editor.as_mut() {
            Some(editor) => editor,
            None => return,
        };
        let theme = &CURRENT_THEME;
        let mut action: Option<SheetAction> = None;
        let mut sheet_rect = egui::Rect::NOTHING;

        egui::Area::new(egui::Id::new("count_input_modal_overlay"))
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
                                ui.set_min_size(egui::vec2(360.0, 360.0));
                                ui.set_max_size(egui::vec2(360.0, 420.0));

                                action = render_sheet_body(ui, editor, copy, now);
                                sheet_rect = ui.min_rect().expand(20.0);
                            });
                    });
                });
            });

        // A press outside the sheet dismisses it, behaving as Cancel.
        if action.is_none() && ctx.input(|i| i.pointer.any_pressed()) {
            if let Some(pos) = ctx.input(|i| i.pointer.interact_pos()) {
                if !sheet_rect.contains(pos) {
                    action = Some(SheetAction::Cancel);
                }
            }
        }

        match action {
            Some(SheetAction::Commit) => self.commit_editor(),
            Some(SheetAction::Cancel) => self.cancel_editor(),
            Some(SheetAction::Delete) => self.delete_editor_entry(),
            Some(SheetAction::ToggleMode) => {
                if let Some(editor) = self.editor.as_mut() {
                    editor.toggle_mode();
                }
            }
            None => {}
        }
    }
}

fn render_sheet_body(
    ui: &mut egui::Ui,
    editor: &mut CountEditor,
    copy: &'static shared::UiCopy,
    now: Instant,
) -> Option<SheetAction> {
    let theme = &CURRENT_THEME;
    let mut action = None;

    // Header: denomination on the left, mode toggle on the right.
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(
                egui::RichText::new(copy.sheet.denomination_label)
                    .color(theme.typography.secondary)
                    .small(),
            );
            ui.label(
                egui::RichText::new(format_vnd(editor.denomination as u64))
                    .font(egui::FontId::new(22.0, egui::FontFamily::Proportional))
                    .strong(),
            );
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let toggle_label = match editor.mode {
                CountInputMode::Stepper => copy.sheet.toggle_direct,
                CountInputMode::Direct => copy.sheet.toggle_stepper,
            };
            if ui.button(toggle_label).clicked() {
                action = Some(SheetAction::ToggleMode);
            }
        });
    });
    ui.add_space(12.0);

    match editor.mode {
        CountInputMode::Stepper => render_stepper(ui, editor, copy, now),
        CountInputMode::Direct => render_direct_entry(ui, editor, copy),
    }
    ui.add_space(12.0);

    // Subtotal preview strip.
    egui::Frame::none()
        .fill(theme.interactive.primary_soft)
        .rounding(egui::Rounding::same(12.0))
        .inner_margin(egui::Margin::symmetric(14.0, 10.0))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(copy.sheet.subtotal_label)
                        .color(theme.interactive.primary_dark),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(format_vnd(editor.subtotal()))
                            .strong()
                            .color(theme.interactive.primary_dark),
                    );
                });
            });
        });

    if let Some(error) = editor.error {
        let message = match error {
            CountError::Invalid => copy.sheet.invalid_count.to_owned(),
            CountError::AboveMax => copy.max_count_error(),
        };
        ui.add_space(6.0);
        ui.label(egui::RichText::new(message).color(theme.typography.error));
    }
    ui.add_space(12.0);

    // Confirm on its own row, cancel/delete side by side.
    let confirm = egui::Button::new(
        egui::RichText::new(copy.sheet.confirm)
            .color(theme.typography.on_primary)
            .strong(),
    )
    .fill(theme.interactive.primary)
    .min_size(egui::vec2(ui.available_width(), 44.0));
    if ui.add(confirm).clicked() {
        action = Some(SheetAction::Commit);
    }

    ui.horizontal(|ui| {
        let half = (ui.available_width() - ui.spacing().item_spacing.x) / 2.0;
        if ui
            .add(egui::Button::new(copy.sheet.cancel).min_size(egui::vec2(half, 40.0)))
            .clicked()
        {
            action = Some(SheetAction::Cancel);
        }
        let delete = egui::Button::new(
            egui::RichText::new(copy.sheet.delete).color(theme.interactive.danger),
        )
        .stroke(egui::Stroke::new(1.0, theme.interactive.danger))
        .min_size(egui::vec2(half, 40.0));
        if ui.add(delete).clicked() {
            action = Some(SheetAction::Delete);
        }
    });

    action
}

fn render_stepper(
    ui: &mut egui::Ui,
    editor: &mut CountEditor,
    copy: &'static shared::UiCopy,
    now: Instant,
) {
    let theme = &CURRENT_THEME;
    egui::Frame::none()
        .fill(theme.layout.field_background)
        .rounding(egui::Rounding::same(14.0))
        .inner_margin(egui::Margin::symmetric(14.0, 12.0))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                let button_size = egui::vec2(52.0, 52.0);
                let minus = ui.add_enabled(
                    editor.count() > 0,
                    egui::Button::new(
                        egui::RichText::new("−")
                            .font(egui::FontId::new(26.0, egui::FontFamily::Proportional)),
                    )
                    .min_size(button_size),
                );
                handle_hold(editor, &minus, -1, now);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let plus = ui.add_enabled(
                        editor.count() < shared::MAX_COUNT,
                        egui::Button::new(
                            egui::RichText::new("+").font(egui::FontId::new(
                                26.0,
                                egui::FontFamily::Proportional,
                            )),
                        )
                        .min_size(button_size),
                    );
                    handle_hold(editor, &plus, 1, now);

                    ui.centered_and_justified(|ui| {
                        ui.vertical_centered(|ui| {
                            ui.label(
                                egui::RichText::new(copy.sheet.count_label)
                                    .color(theme.typography.muted)
                                    .small(),
                            );
                            let count_text = shared::currency::group_thousands(
                                editor.count() as u64,
                                copy.language.grouping(),
                            );
                            ui.label(
                                egui::RichText::new(count_text)
                                    .font(egui::FontId::new(
                                        30.0,
                                        egui::FontFamily::Proportional,
                                    ))
                                    .strong(),
                            );
                        });
                    });
                });
            });
        });
}

fn render_direct_entry(
    ui: &mut egui::Ui,
    editor: &mut CountEditor,
    copy: &'static shared::UiCopy,
) {
    let theme = &CURRENT_THEME;
    ui.label(
        egui::RichText::new(copy.input_label())
            .color(theme.typography.secondary)
            .small(),
    );
    ui.add_space(4.0);
    let response = ui.add(
        egui::TextEdit::singleline(&mut editor.direct_input)
            .hint_text("0")
            .font(egui::FontId::new(26.0, egui::FontFamily::Proportional))
            .desired_width(ui.available_width())
            .margin(egui::Margin::symmetric(12.0, 10.0)),
    );
    if response.changed() {
        editor.filter_direct_input();
    }
    response.request_focus();
}

/// Tie the auto-repeat timer to a stepper button: start on press, tick
/// while held, stop when the pointer releases or leaves.
fn handle_hold(editor: &mut CountEditor, response: &egui::Response, delta: i32, now: Instant) {
    if response.is_pointer_button_down_on() {
        match editor.hold_delta() {
            Some(active) if active == delta => {
                editor.tick_hold(now);
            }
            _ => editor.begin_hold(delta, now),
        }
    } else if editor.hold_delta() == Some(delta) {
        editor.end_hold();
    }
}
