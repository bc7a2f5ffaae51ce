//! # App State Module
//!
//! The central application struct and the event handlers the rendering
//! code calls into. All state lives here: the backend (tally, reset flow,
//! preferences) plus the transient UI state (editing session, modal forms,
//! animations).

use std::time::Instant;

use log::{error, info};

use shared::{copy, Language, UiCopy};

use crate::backend::domain::ResetOutcome;
use crate::backend::Backend;
use crate::ui::state::{AnimatedAmount, CountEditor, RecentHighlight, ResetConfirmForm};

/// Main application struct for the egui cash counter
pub struct CashCounterApp {
    pub backend: Backend,

    // Transient UI state
    pub editor: Option<CountEditor>,
    pub reset_confirm_form: ResetConfirmForm,
    pub animated_total: AnimatedAmount,
    pub recent_highlight: Option<RecentHighlight>,
}

impl CashCounterApp {
    /// Create the app over a freshly opened backend.
    pub fn new() -> Result<Self, anyhow::Error> {
        info!("Initializing CashCounterApp");
        let backend = Backend::new()?;
        let initial_total = backend.tally.total_amount();
        Ok(Self {
            backend,
            editor: None,
            reset_confirm_form: ResetConfirmForm::new(),
            animated_total: AnimatedAmount::new(initial_total),
            recent_highlight: None,
        })
    }

    /// The copy bundle for the active language.
    pub fn copy(&self) -> &'static UiCopy {
        copy(self.backend.language())
    }

    pub fn set_language(&mut self, language: Language) {
        self.backend.set_language(language);
    }

    // --- entry editor ------------------------------------------------------

    /// A denomination tile or list row was tapped.
    pub fn open_editor(&mut self, denomination: u32) {
        let current = self.backend.tally.count(denomination);
        self.editor = Some(CountEditor::open(denomination, current));
    }

    /// Commit the pending count. On a validation error the session stays
    /// open with the error recorded on the editor.
    pub fn commit_editor(&mut self) {
        let Some(editor) = self.editor.as_mut() else {
            return;
        };
        match editor.commit() {
            Ok(count) => {
                let denomination = editor.denomination;
                if let Err(err) = self.backend.tally.set_count(denomination, count) {
                    error!("Rejected tally write: {}", err);
                }
                self.recent_highlight =
                    Some(RecentHighlight::new(denomination, Instant::now()));
                self.editor = None;
            }
            Err(_) => {
                // Error already recorded on the editor; sheet stays open.
            }
        }
    }

    /// Discard the pending value without touching the store. Also the
    /// Escape / scrim-dismiss path.
    pub fn cancel_editor(&mut self) {
        self.editor = None;
    }

    /// Remove the entry outright, regardless of the pending value.
    pub fn delete_editor_entry(&mut self) {
        if let Some(editor) = self.editor.take() {
            self.backend.tally.remove_entry(editor.denomination);
        }
    }

    // --- reset flow --------------------------------------------------------

    pub fn request_reset(&mut self) {
        match self.backend.reset.request_reset(&mut self.backend.tally) {
            ResetOutcome::ConfirmationRequired => self.reset_confirm_form.clear(),
            ResetOutcome::Cleared => info!("Reset performed without confirmation"),
            ResetOutcome::NothingToReset => {}
        }
    }

    pub fn cancel_reset(&mut self) {
        self.backend.reset.cancel();
    }

    pub fn confirm_reset(&mut self) {
        let skip_next = self.reset_confirm_form.skip_next;
        self.backend
            .reset
            .confirm(skip_next, &mut self.backend.tally);
    }

    pub fn is_reset_confirm_open(&self) -> bool {
        self.backend.reset.state()
            == crate::backend::domain::ResetFlowState::ConfirmPending
    }
}
