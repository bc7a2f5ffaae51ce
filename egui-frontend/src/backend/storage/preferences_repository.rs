//! # Preferences Repository
//!
//! The two small per-user records that persist independently of the tally:
//!
//! - `reset_skip` — string-typed boolean; the literal `"true"` means skip
//!   the reset confirmation, anything else (including a missing file)
//!   means ask.
//! - `language` — a locale code (`vi` / `en` / `zh`); invalid or missing
//!   values fall back to a system locale sniff, then to Vietnamese.

use anyhow::Result;
use log::{debug, warn};
use std::fs;
use std::path::PathBuf;

use shared::Language;

use super::connection::StorageConnection;

const RESET_SKIP_FILE: &str = "reset_skip";
const LANGUAGE_FILE: &str = "language";

/// File-backed repository for the reset-skip flag and language preference.
#[derive(Debug, Clone)]
pub struct PreferencesRepository {
    connection: StorageConnection,
}

impl PreferencesRepository {
    pub fn new(connection: StorageConnection) -> Self {
        Self { connection }
    }

    fn reset_skip_path(&self) -> PathBuf {
        self.connection.base_directory().join(RESET_SKIP_FILE)
    }

    fn language_path(&self) -> PathBuf {
        self.connection.base_directory().join(LANGUAGE_FILE)
    }

    /// Load the skip-confirmation flag. Only the literal string `"true"`
    /// reads as true.
    pub fn load_reset_skip(&self) -> bool {
        match fs::read_to_string(self.reset_skip_path()) {
            Ok(raw) => raw.trim() == "true",
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    warn!("Failed to read reset-skip record: {}", err);
                }
                false
            }
        }
    }

    pub fn save_reset_skip(&self, skip: bool) -> Result<()> {
        self.connection
            .write_atomic(&self.reset_skip_path(), if skip { "true" } else { "false" })
    }

    /// Load the language preference with the fallback order: persisted
    /// record → system locale sniff → Vietnamese.
    pub fn load_language(&self) -> Language {
        match fs::read_to_string(self.language_path()) {
            Ok(raw) => match Language::from_code(raw.trim()) {
                Some(language) => language,
                None => {
                    warn!("Unrecognized language record {:?}, using fallback", raw.trim());
                    sniff_system_language()
                }
            },
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    warn!("Failed to read language record: {}", err);
                }
                sniff_system_language()
            }
        }
    }

    pub fn save_language(&self, language: Language) -> Result<()> {
        self.connection
            .write_atomic(&self.language_path(), language.code())
    }
}

/// Best-effort device locale sniff from the usual environment variables,
/// defaulting to Vietnamese.
fn sniff_system_language() -> Language {
    for var in ["LC_ALL", "LC_MESSAGES", "LANG"] {
        if let Ok(value) = std::env::var(var) {
            let prefix: String = value.to_lowercase().chars().take(2).collect();
            if let Some(language) = Language::from_code(&prefix) {
                debug!("Sniffed language {:?} from {}", language.code(), var);
                return language;
            }
        }
    }
    Language::default()
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::TestEnvironment;
    use super::*;

    #[test]
    fn test_reset_skip_round_trip() {
        let env = TestEnvironment::new().unwrap();
        let repo = PreferencesRepository::new(env.connection.clone());

        assert!(!repo.load_reset_skip());
        repo.save_reset_skip(true).unwrap();
        assert!(repo.load_reset_skip());
        repo.save_reset_skip(false).unwrap();
        assert!(!repo.load_reset_skip());
    }

    #[test]
    fn test_reset_skip_anything_but_true_is_false() {
        let env = TestEnvironment::new().unwrap();
        let repo = PreferencesRepository::new(env.connection.clone());

        fs::write(env.base_path.join(RESET_SKIP_FILE), "yes please").unwrap();
        assert!(!repo.load_reset_skip());
        fs::write(env.base_path.join(RESET_SKIP_FILE), "TRUE").unwrap();
        assert!(!repo.load_reset_skip());
    }

    #[test]
    fn test_language_round_trip() {
        let env = TestEnvironment::new().unwrap();
        let repo = PreferencesRepository::new(env.connection.clone());

        repo.save_language(Language::Chinese).unwrap();
        assert_eq!(repo.load_language(), Language::Chinese);
        assert_eq!(
            fs::read_to_string(env.base_path.join(LANGUAGE_FILE)).unwrap(),
            "zh"
        );
    }

    #[test]
    fn test_invalid_language_falls_back() {
        let env = TestEnvironment::new().unwrap();
        let repo = PreferencesRepository::new(env.connection.clone());

        fs::write(env.base_path.join(LANGUAGE_FILE), "klingon").unwrap();
        // The sniff only consults the environment, so the result is one of
        // the supported languages either way.
        let language = repo.load_language();
        assert!(Language::ALL.contains(&language));
    }
}
