//! # UI Components Module
//!
//! Rendering code for the cash counter, one module per visual area:
//!
//! - `header` - title and the animated total card
//! - `denomination_grid` - the 3-column tile grid
//! - `entered_list` - the list of entered denominations
//! - `reset_bar` - clear button and language menu
//! - `modals` - the count editor and reset confirmation sheets
//! - `styling` / `theme` - global style setup and the palette
//!
//! Components are methods on [`crate::ui::app_state::CashCounterApp`], so
//! each file extends the same struct the coordinator drives.

pub mod denomination_grid;
pub mod entered_list;
pub mod header;
pub mod modals;
pub mod reset_bar;
pub mod styling;
pub mod theme;

pub use styling::setup_app_style;
