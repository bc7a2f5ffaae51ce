//! Tally service for the cash counter.
//!
//! Owns the in-memory [`CashState`] and its persistence side effects:
//! every mutation re-persists the full mapping, and a full clear deletes
//! the persisted record instead of writing an empty one. Persistence is
//! best-effort — a failed write is logged and the in-memory state stays
//! authoritative for the session.

use log::{info, warn};
use thiserror::Error;

use shared::{is_denomination, CashState, TallyEntry};

use crate::backend::storage::TallyRepository;

/// Typed contract violations of the tally operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TallyError {
    #[error("unknown denomination: {0}")]
    UnknownDenomination(u32),
}

/// Service owning the tally state and its repository.
pub struct TallyService {
    repository: TallyRepository,
    state: CashState,
}

impl TallyService {
    /// Create the service, restoring any persisted tally. Load failures
    /// have already been downgraded to an empty state by the repository.
    pub fn new(repository: TallyRepository) -> Self {
        let state = repository.load();
        if !state.is_empty() {
            info!(
                "Restored tally: {} denominations, {} notes",
                state.denomination_count(),
                state.total_notes()
            );
        }
        Self { repository, state }
    }

    pub fn state(&self) -> &CashState {
        &self.state
    }

    /// Set the note count for a denomination. A count of 0 removes the
    /// entry; counts above the maximum are clamped. Persists afterward.
    pub fn set_count(&mut self, denomination: u32, count: u32) -> Result<(), TallyError> {
        if !is_denomination(denomination) {
            return Err(TallyError::UnknownDenomination(denomination));
        }
        self.state.set_count(denomination, count);
        self.persist();
        Ok(())
    }

    /// Remove a denomination's entry. Idempotent. Persists afterward.
    pub fn remove_entry(&mut self, denomination: u32) {
        self.state.remove(denomination);
        self.persist();
    }

    /// Empty the tally and delete the persisted record, so a fresh load
    /// cannot resurrect stale entries.
    pub fn clear(&mut self) {
        self.state.clear();
        if let Err(err) = self.repository.delete() {
            warn!("Failed to delete persisted tally: {:#}", err);
        }
    }

    pub fn count(&self, denomination: u32) -> u32 {
        self.state.count(denomination)
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    pub fn total_notes(&self) -> u32 {
        self.state.total_notes()
    }

    pub fn total_amount(&self) -> u64 {
        self.state.total_amount()
    }

    pub fn entries(&self) -> Vec<TallyEntry> {
        self.state.entries()
    }

    fn persist(&self) {
        if let Err(err) = self.repository.save(&self.state) {
            warn!("Failed to persist tally: {:#}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::test_utils::TestHelper;

    #[test]
    fn test_set_count_persists_and_reads_back() {
        let helper = TestHelper::new().unwrap();
        let mut service = TallyService::new(helper.tally_repo.clone());

        service.set_count(1000, 3).unwrap();
        service.set_count(5000, 2).unwrap();
        assert_eq!(service.total_notes(), 5);
        assert_eq!(service.total_amount(), 13_000);

        // A fresh service over the same repository sees the same state.
        let restored = TallyService::new(helper.tally_repo.clone());
        assert_eq!(restored.count(1000), 3);
        assert_eq!(restored.total_amount(), 13_000);
    }

    #[test]
    fn test_remove_entry_updates_totals() {
        let helper = TestHelper::new().unwrap();
        let mut service = TallyService::new(helper.tally_repo.clone());

        service.set_count(1000, 3).unwrap();
        service.set_count(5000, 2).unwrap();
        service.remove_entry(1000);
        assert_eq!(service.total_amount(), 10_000);
        service.remove_entry(1000); // idempotent
        assert_eq!(service.total_amount(), 10_000);
    }

    #[test]
    fn test_set_count_zero_removes_entry() {
        let helper = TestHelper::new().unwrap();
        let mut service = TallyService::new(helper.tally_repo.clone());

        service.set_count(20_000, 4).unwrap();
        service.set_count(20_000, 0).unwrap();
        assert!(service.is_empty());

        let restored = TallyService::new(helper.tally_repo.clone());
        assert!(restored.is_empty());
    }

    #[test]
    fn test_set_count_clamps_above_max() {
        let helper = TestHelper::new().unwrap();
        let mut service = TallyService::new(helper.tally_repo.clone());

        service.set_count(500_000, 10_000).unwrap();
        assert_eq!(service.count(500_000), shared::MAX_COUNT);
    }

    #[test]
    fn test_unknown_denomination_is_an_error() {
        let helper = TestHelper::new().unwrap();
        let mut service = TallyService::new(helper.tally_repo.clone());

        assert_eq!(
            service.set_count(1500, 3),
            Err(TallyError::UnknownDenomination(1500))
        );
        assert!(service.is_empty());
    }

    #[test]
    fn test_clear_deletes_persisted_record() {
        let helper = TestHelper::new().unwrap();
        let mut service = TallyService::new(helper.tally_repo.clone());

        service.set_count(1000, 1).unwrap();
        assert!(helper.tally_repo.record_exists());

        service.clear();
        service.clear(); // idempotent
        assert!(service.is_empty());
        assert!(!helper.tally_repo.record_exists());
    }
}
