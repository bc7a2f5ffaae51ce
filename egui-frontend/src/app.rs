//! # App Module
//!
//! Re-exports the UI surface so the binary and tests can reach everything
//! through `crate::app`.

pub use crate::ui::app_state::CashCounterApp;
