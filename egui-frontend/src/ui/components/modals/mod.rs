//! # Modal Components
//!
//! The two modal sheets: the per-denomination count editor and the reset
//! confirmation gate. Both render as a scrim plus a centered frame, and
//! both treat a press on the scrim as Cancel.

pub mod count_input;
pub mod reset_confirm;
