//! # Theme Configuration
//!
//! Centralized color configuration for the cash counter. All rendering
//! code takes its colors from these constants so the palette stays
//! consistent and easy to adjust.

use egui::Color32;

/// Main theme configuration structure
#[derive(Debug, Clone)]
pub struct Theme {
    pub interactive: InteractiveColors,
    pub layout: LayoutColors,
    pub typography: TypographyColors,
}

/// Colors for interactive elements (buttons, tiles, menus)
#[derive(Debug, Clone)]
pub struct InteractiveColors {
    /// Primary action color (confirm button, denomination pills)
    pub primary: Color32,
    /// Darker primary, used for pressed states and emphasized text
    pub primary_dark: Color32,
    /// Translucent primary for subtle fills (badges, subtotal strip)
    pub primary_soft: Color32,
    /// Destructive action color (delete, reset confirm)
    pub danger: Color32,
    /// Highlight stroke for the recently edited tile
    pub recent_highlight: Color32,
}

/// Background and container colors
#[derive(Debug, Clone)]
pub struct LayoutColors {
    pub background: Color32,
    pub card_background: Color32,
    pub card_border: Color32,
    pub tile_background: Color32,
    /// Scrim behind modal sheets
    pub scrim: Color32,
    pub sheet_background: Color32,
    pub field_background: Color32,
}

/// Text colors
#[derive(Debug, Clone)]
pub struct TypographyColors {
    pub primary: Color32,
    pub secondary: Color32,
    pub muted: Color32,
    pub on_primary: Color32,
    pub error: Color32,
}

/// The default theme: a light teal palette.
pub const CURRENT_THEME: Theme = Theme {
    interactive: InteractiveColors {
        primary: Color32::from_rgb(13, 148, 136),
        primary_dark: Color32::from_rgb(15, 118, 110),
        primary_soft: Color32::from_rgb(204, 238, 235),
        danger: Color32::from_rgb(220, 50, 50),
        recent_highlight: Color32::from_rgb(45, 212, 191),
    },
    layout: LayoutColors {
        background: Color32::from_rgb(245, 247, 246),
        card_background: Color32::WHITE,
        card_border: Color32::from_rgb(226, 232, 231),
        tile_background: Color32::WHITE,
        scrim: Color32::from_rgba_premultiplied(0, 0, 0, 110),
        sheet_background: Color32::WHITE,
        field_background: Color32::from_rgb(244, 244, 245),
    },
    typography: TypographyColors {
        primary: Color32::from_rgb(23, 23, 23),
        secondary: Color32::from_rgb(82, 82, 82),
        muted: Color32::from_rgb(140, 140, 140),
        on_primary: Color32::WHITE,
        error: Color32::from_rgb(190, 40, 40),
    },
};
