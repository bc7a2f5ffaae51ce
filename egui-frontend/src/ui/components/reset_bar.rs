//! # Reset Bar Component
//!
//! The bottom bar: the clear-all button (disabled while the tally is
//! empty) and the language switcher menu.

use eframe::egui;

use shared::Language;

use super::theme::CURRENT_THEME;
use crate::ui::app_state::CashCounterApp;

impl CashCounterApp {
    pub fn render_reset_bar(&mut self, ui: &mut egui::Ui) {
        let copy = self.copy();
        let theme = &CURRENT_THEME;
        let has_entries = !self.backend.tally.is_empty();

        let mut reset_requested = false;
        let mut selected_language: Option<Language> = None;

        ui.horizontal(|ui| {
            let reset_button = egui::Button::new(
                egui::RichText::new(copy.reset.button)
                    .color(theme.typography.on_primary),
            )
            .fill(theme.interactive.danger)
            .min_size(egui::vec2(140.0, 40.0));
            if ui.add_enabled(has_entries, reset_button).clicked() {
                reset_requested = true;
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let current = self.backend.language();
                ui.menu_button(
                    format!("🌐 {}", current.native_label()),
                    |ui| {
                        ui.label(
                            egui::RichText::new(copy.language_menu_label)
                                .color(theme.typography.muted)
                                .small(),
                        );
                        for language in Language::ALL {
                            let checked = language == current;
                            if ui
                                .selectable_label(checked, language.native_label())
                                .clicked()
                            {
                                selected_language = Some(language);
                                ui.close_menu();
                            }
                        }
                    },
                );
            });
        });

        if let Some(language) = selected_language {
            self.set_language(language);
        }
        if reset_requested {
            self.request_reset();
        }
    }
}
