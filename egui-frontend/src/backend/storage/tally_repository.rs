//! # Tally Repository
//!
//! Persistence for the cash tally: a single JSON record mapping face value
//! to note count (`{"1000":3,"5000":2}`).
//!
//! A missing, unreadable, or malformed record always loads as an empty
//! state — persisted data can never take the app down. Entries violating
//! the tally invariants (zero counts, unknown face values, counts past the
//! maximum) are repaired on load.

use anyhow::{Context, Result};
use log::{debug, warn};
use std::fs;
use std::path::PathBuf;

use shared::CashState;

use super::connection::StorageConnection;

const TALLY_FILE: &str = "cash_state.json";

/// File-backed repository for the persisted [`CashState`] record.
#[derive(Debug, Clone)]
pub struct TallyRepository {
    connection: StorageConnection,
}

impl TallyRepository {
    pub fn new(connection: StorageConnection) -> Self {
        Self { connection }
    }

    fn record_path(&self) -> PathBuf {
        self.connection.base_directory().join(TALLY_FILE)
    }

    /// Load the persisted tally, falling back to an empty state on any
    /// failure. The failure is logged, never raised.
    pub fn load(&self) -> CashState {
        let path = self.record_path();
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!("No persisted tally at {:?}, starting empty", path);
                return CashState::new();
            }
            Err(err) => {
                warn!("Failed to read tally record {:?}: {}", path, err);
                return CashState::new();
            }
        };

        match serde_json::from_str::<CashState>(&raw) {
            Ok(mut state) => {
                let repaired = state.sanitize();
                if repaired > 0 {
                    warn!("Dropped {} invalid entries from persisted tally", repaired);
                }
                state
            }
            Err(err) => {
                warn!("Malformed tally record {:?}: {}", path, err);
                CashState::new()
            }
        }
    }

    /// Persist the full mapping.
    pub fn save(&self, state: &CashState) -> Result<()> {
        let json = serde_json::to_string(state).context("failed to serialize tally")?;
        self.connection.write_atomic(&self.record_path(), &json)
    }

    /// Delete the persisted record outright (used by reset, so a fresh load
    /// cannot resurrect stale data). Idempotent.
    pub fn delete(&self) -> Result<()> {
        self.connection.remove_record(&self.record_path())
    }

    #[cfg(test)]
    pub fn record_exists(&self) -> bool {
        self.record_path().exists()
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::TestEnvironment;
    use super::*;

    #[test]
    fn test_save_and_load_round_trip() {
        let env = TestEnvironment::new().unwrap();
        let repo = TallyRepository::new(env.connection.clone());

        let mut state = CashState::new();
        state.set_count(1000, 3);
        state.set_count(500_000, 12);
        repo.save(&state).unwrap();

        assert_eq!(repo.load(), state);
    }

    #[test]
    fn test_missing_record_loads_empty() {
        let env = TestEnvironment::new().unwrap();
        let repo = TallyRepository::new(env.connection.clone());
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_malformed_record_loads_empty() {
        let env = TestEnvironment::new().unwrap();
        let repo = TallyRepository::new(env.connection.clone());

        fs::write(env.base_path.join(TALLY_FILE), "{not json").unwrap();
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_invalid_entries_repaired_on_load() {
        let env = TestEnvironment::new().unwrap();
        let repo = TallyRepository::new(env.connection.clone());

        fs::write(
            env.base_path.join(TALLY_FILE),
            r#"{"1000":0,"1500":4,"5000":20000}"#,
        )
        .unwrap();
        let state = repo.load();
        assert_eq!(state.count(1000), 0);
        assert_eq!(state.count(1500), 0);
        assert_eq!(state.count(5000), shared::MAX_COUNT);
    }

    #[test]
    fn test_delete_removes_record() {
        let env = TestEnvironment::new().unwrap();
        let repo = TallyRepository::new(env.connection.clone());

        let mut state = CashState::new();
        state.set_count(2000, 1);
        repo.save(&state).unwrap();
        assert!(repo.record_exists());

        repo.delete().unwrap();
        repo.delete().unwrap();
        assert!(!repo.record_exists());
        assert!(repo.load().is_empty());
    }
}
