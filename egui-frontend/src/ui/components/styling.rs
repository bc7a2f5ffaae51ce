//! # Styling Functions
//!
//! Global style setup and the small drawing helpers shared by the
//! components.

use eframe::egui;

use super::theme::CURRENT_THEME;

/// Configure global egui styling: light palette, rounded corners, touch
/// friendly paddings.
pub fn setup_app_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        style.visuals.panel_fill = CURRENT_THEME.layout.background;
        style.visuals.window_fill = CURRENT_THEME.layout.background;
        style.visuals.override_text_color = Some(CURRENT_THEME.typography.primary);
        // Text edits in egui 0.28 draw on extreme_bg_color.
        style.visuals.extreme_bg_color = CURRENT_THEME.layout.field_background;

        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(24.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(16.0, egui::FontFamily::Proportional),
        );

        style.spacing.button_padding = egui::vec2(12.0, 8.0);
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        for visuals in [
            &mut style.visuals.widgets.inactive,
            &mut style.visuals.widgets.active,
            &mut style.visuals.widgets.hovered,
        ] {
            visuals.rounding = egui::Rounding::same(10.0);
        }

        style
    });
}

/// Frame used for the white cards (header, list, tiles).
pub fn card_frame() -> egui::Frame {
    egui::Frame::none()
        .fill(CURRENT_THEME.layout.card_background)
        .stroke(egui::Stroke::new(1.0, CURRENT_THEME.layout.card_border))
        .rounding(egui::Rounding::same(16.0))
        .inner_margin(egui::Margin::same(16.0))
}

/// A rounded pill label, used for the denomination value and badges.
pub fn draw_pill(
    ui: &mut egui::Ui,
    text: &str,
    fill: egui::Color32,
    text_color: egui::Color32,
) {
    let galley = ui.painter().layout_no_wrap(
        text.to_owned(),
        egui::FontId::new(13.0, egui::FontFamily::Proportional),
        text_color,
    );
    let padding = egui::vec2(10.0, 5.0);
    let (rect, _) = ui.allocate_exact_size(
        galley.size() + padding * 2.0,
        egui::Sense::hover(),
    );
    ui.painter()
        .rect_filled(rect, egui::Rounding::same(rect.height() / 2.0), fill);
    ui.painter()
        .galley(rect.min + padding, galley, text_color);
}
