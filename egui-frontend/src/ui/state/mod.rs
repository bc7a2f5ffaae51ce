//! # UI State Module
//!
//! Transient per-frame state: the editing session, modal form state, and
//! the display animations. None of this is persisted.

pub mod animation;
pub mod editor;
pub mod modal_state;

pub use animation::{AnimatedAmount, RecentHighlight};
pub use editor::{CountEditor, CountError, CountInputMode};
pub use modal_state::ResetConfirmForm;
