//! # Modal State Module
//!
//! UI-side state for the modal sheets. The reset flow's state machine
//! itself lives in the backend; this module only carries what the
//! rendering needs between frames.

/// Form state for the reset confirmation sheet.
#[derive(Debug, Clone, Default)]
pub struct ResetConfirmForm {
    /// The "don't ask again next time" checkbox.
    pub skip_next: bool,
}

impl ResetConfirmForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the checkbox for the next time the sheet opens.
    pub fn clear(&mut self) {
        self.skip_next = false;
    }
}
