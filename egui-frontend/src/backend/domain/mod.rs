//! # Domain Module
//!
//! Business logic services sitting between storage and the UI: the tally
//! store and the reset confirmation flow.

pub mod reset;
pub mod tally;

pub use reset::{ResetFlow, ResetFlowState, ResetOutcome};
pub use tally::{TallyError, TallyService};
