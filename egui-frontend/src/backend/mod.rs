//! # Backend Module
//!
//! Wires storage repositories and domain services together behind a single
//! handle the UI owns. Constructed once at startup; everything downstream
//! borrows from it.

use anyhow::Result;
use log::info;

use shared::Language;

pub mod domain;
pub mod storage;

use domain::{ResetFlow, TallyService};
use storage::{PreferencesRepository, StorageConnection, TallyRepository};

/// The application backend: tally service, reset flow, preferences.
pub struct Backend {
    pub tally: TallyService,
    pub reset: ResetFlow,
    preferences: PreferencesRepository,
    language: Language,
}

impl Backend {
    /// Connect to the platform data directory and restore persisted state.
    pub fn new() -> Result<Self> {
        let connection = StorageConnection::new_default()?;
        Self::with_connection(connection)
    }

    /// Connect against an explicit directory (tests use a temp dir).
    pub fn with_connection(connection: StorageConnection) -> Result<Self> {
        info!("Opening backend at {:?}", connection.base_directory());
        let preferences = PreferencesRepository::new(connection.clone());
        let tally = TallyService::new(TallyRepository::new(connection));
        let reset = ResetFlow::new(preferences.clone());
        let language = preferences.load_language();
        Ok(Self {
            tally,
            reset,
            preferences,
            language,
        })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Switch the display language and persist the choice (best-effort).
    pub fn set_language(&mut self, language: Language) {
        if self.language == language {
            return;
        }
        self.language = language;
        if let Err(err) = self.preferences.save_language(language) {
            log::warn!("Failed to persist language preference: {:#}", err);
        }
    }
}
