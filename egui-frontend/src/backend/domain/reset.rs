//! Reset flow: the confirmation gate in front of the tally's clear
//! operation.
//!
//! A two-state machine (`Idle` / `ConfirmPending`) with a persisted
//! "skip confirmation" preference. Requesting a reset on an empty tally is
//! a no-op; with the skip preference set, the clear happens immediately
//! without entering `ConfirmPending`.

use log::{info, warn};

use crate::backend::storage::PreferencesRepository;

use super::tally::TallyService;

/// Where the reset flow currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetFlowState {
    Idle,
    ConfirmPending,
}

/// What a [`ResetFlow::request_reset`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    /// Nothing entered, nothing to reset.
    NothingToReset,
    /// Skip preference was set; the tally was cleared immediately.
    Cleared,
    /// Waiting on the user's confirmation.
    ConfirmationRequired,
}

/// The reset confirmation gate, with its persisted skip preference.
pub struct ResetFlow {
    preferences: PreferencesRepository,
    state: ResetFlowState,
    skip_confirmation: bool,
}

impl ResetFlow {
    pub fn new(preferences: PreferencesRepository) -> Self {
        let skip_confirmation = preferences.load_reset_skip();
        Self {
            preferences,
            state: ResetFlowState::Idle,
            skip_confirmation,
        }
    }

    pub fn state(&self) -> ResetFlowState {
        self.state
    }

    pub fn skip_confirmation(&self) -> bool {
        self.skip_confirmation
    }

    /// The user hit the reset button.
    pub fn request_reset(&mut self, tally: &mut TallyService) -> ResetOutcome {
        if tally.is_empty() {
            return ResetOutcome::NothingToReset;
        }
        if self.skip_confirmation {
            self.perform_reset(tally);
            return ResetOutcome::Cleared;
        }
        self.state = ResetFlowState::ConfirmPending;
        ResetOutcome::ConfirmationRequired
    }

    /// Back out of a pending confirmation without touching the tally.
    pub fn cancel(&mut self) {
        self.state = ResetFlowState::Idle;
    }

    /// Confirm the pending reset, recording whether future resets should
    /// skip the confirmation.
    pub fn confirm(&mut self, skip_next: bool, tally: &mut TallyService) {
        self.set_skip_confirmation(skip_next);
        self.perform_reset(tally);
    }

    fn set_skip_confirmation(&mut self, skip: bool) {
        self.skip_confirmation = skip;
        if let Err(err) = self.preferences.save_reset_skip(skip) {
            warn!("Failed to persist reset-skip preference: {:#}", err);
        }
    }

    fn perform_reset(&mut self, tally: &mut TallyService) {
        tally.clear();
        self.state = ResetFlowState::Idle;
        info!("Tally cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::test_utils::TestHelper;

    fn flow_and_tally(helper: &TestHelper) -> (ResetFlow, TallyService) {
        (
            ResetFlow::new(helper.preferences_repo.clone()),
            TallyService::new(helper.tally_repo.clone()),
        )
    }

    #[test]
    fn test_request_on_empty_tally_is_noop() {
        let helper = TestHelper::new().unwrap();
        let (mut flow, mut tally) = flow_and_tally(&helper);

        assert_eq!(flow.request_reset(&mut tally), ResetOutcome::NothingToReset);
        assert_eq!(flow.state(), ResetFlowState::Idle);
    }

    #[test]
    fn test_request_enters_confirm_pending() {
        let helper = TestHelper::new().unwrap();
        let (mut flow, mut tally) = flow_and_tally(&helper);
        tally.set_count(1000, 2).unwrap();

        assert_eq!(
            flow.request_reset(&mut tally),
            ResetOutcome::ConfirmationRequired
        );
        assert_eq!(flow.state(), ResetFlowState::ConfirmPending);
        // Nothing cleared yet.
        assert_eq!(tally.total_notes(), 2);
    }

    #[test]
    fn test_cancel_returns_to_idle_without_change() {
        let helper = TestHelper::new().unwrap();
        let (mut flow, mut tally) = flow_and_tally(&helper);
        tally.set_count(1000, 2).unwrap();

        flow.request_reset(&mut tally);
        flow.cancel();
        assert_eq!(flow.state(), ResetFlowState::Idle);
        assert_eq!(tally.total_notes(), 2);
    }

    #[test]
    fn test_confirm_clears_and_persists_skip_preference() {
        let helper = TestHelper::new().unwrap();
        let (mut flow, mut tally) = flow_and_tally(&helper);
        tally.set_count(1000, 2).unwrap();

        flow.request_reset(&mut tally);
        flow.confirm(true, &mut tally);
        assert!(tally.is_empty());
        assert_eq!(flow.state(), ResetFlowState::Idle);
        assert!(helper.preferences_repo.load_reset_skip());

        // A subsequent request on a non-empty tally clears immediately.
        tally.set_count(2000, 1).unwrap();
        assert_eq!(flow.request_reset(&mut tally), ResetOutcome::Cleared);
        assert!(tally.is_empty());
    }

    #[test]
    fn test_skip_preference_survives_restart() {
        let helper = TestHelper::new().unwrap();
        {
            let (mut flow, mut tally) = flow_and_tally(&helper);
            tally.set_count(1000, 2).unwrap();
            flow.request_reset(&mut tally);
            flow.confirm(true, &mut tally);
        }

        let (mut flow, mut tally) = flow_and_tally(&helper);
        assert!(flow.skip_confirmation());
        tally.set_count(5000, 3).unwrap();
        assert_eq!(flow.request_reset(&mut tally), ResetOutcome::Cleared);
    }

    #[test]
    fn test_confirm_with_skip_false_keeps_asking() {
        let helper = TestHelper::new().unwrap();
        let (mut flow, mut tally) = flow_and_tally(&helper);

        tally.set_count(1000, 2).unwrap();
        flow.request_reset(&mut tally);
        flow.confirm(false, &mut tally);

        tally.set_count(1000, 2).unwrap();
        assert_eq!(
            flow.request_reset(&mut tally),
            ResetOutcome::ConfirmationRequired
        );
    }
}
