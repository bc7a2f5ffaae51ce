//! # Count Editor State
//!
//! Transient editing session for one denomination: the pending count, the
//! stepper/direct input modes, commit validation, and the press-and-hold
//! auto-repeat timer.
//!
//! The two input modes deliberately validate differently: the stepper
//! clamps during every step so no invalid intermediate value can exist,
//! while direct entry keeps the raw digit string and rejects out-of-range
//! values on commit with a visible error.

use std::time::{Duration, Instant};

use shared::MAX_COUNT;

/// Delay before a held stepper button starts repeating.
const HOLD_INITIAL_DELAY: Duration = Duration::from_millis(320);
/// Interval between auto-repeat steps while held.
const HOLD_REPEAT_INTERVAL: Duration = Duration::from_millis(140);

/// Which input affordance the sheet is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountInputMode {
    Stepper,
    Direct,
}

/// Why a commit was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountError {
    /// Not a parseable non-negative integer.
    Invalid,
    /// Above [`MAX_COUNT`].
    AboveMax,
}

#[derive(Debug, Clone, Copy)]
struct HoldRepeat {
    delta: i32,
    next_fire: Instant,
}

/// One editing session. Created when a denomination tile is tapped,
/// dropped on commit/cancel/delete.
pub struct CountEditor {
    pub denomination: u32,
    pub mode: CountInputMode,
    pub direct_input: String,
    pub error: Option<CountError>,
    count: u32,
    hold: Option<HoldRepeat>,
}

impl CountEditor {
    /// Open a session seeded with the committed count (0 if none).
    pub fn open(denomination: u32, initial_count: u32) -> Self {
        Self {
            denomination,
            mode: CountInputMode::Stepper,
            direct_input: String::new(),
            error: None,
            count: initial_count.min(MAX_COUNT),
            hold: None,
        }
    }

    /// The stepper's current value.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// The value currently shown, whichever mode is active. Used for the
    /// subtotal preview; an unparseable direct entry previews as 0.
    pub fn display_value(&self) -> u64 {
        match self.mode {
            CountInputMode::Stepper => self.count as u64,
            CountInputMode::Direct => self.parse_direct().unwrap_or(0),
        }
    }

    pub fn subtotal(&self) -> u64 {
        self.display_value() * self.denomination as u64
    }

    /// Switch between stepper and direct entry. Entering direct mode seeds
    /// the text field from the stepper value (empty for 0); leaving it
    /// folds a parseable value back into the stepper, clamped.
    pub fn toggle_mode(&mut self) {
        self.error = None;
        self.end_hold();
        match self.mode {
            CountInputMode::Stepper => {
                self.direct_input = if self.count == 0 {
                    String::new()
                } else {
                    self.count.to_string()
                };
                self.mode = CountInputMode::Direct;
            }
            CountInputMode::Direct => {
                if let Some(value) = self.parse_direct() {
                    self.count = (value.min(MAX_COUNT as u64)) as u32;
                }
                self.mode = CountInputMode::Stepper;
            }
        }
    }

    /// Apply one stepper step, clamped to [0, MAX_COUNT].
    pub fn step(&mut self, delta: i32) {
        self.error = None;
        let stepped = self.count as i64 + delta as i64;
        self.count = stepped.clamp(0, MAX_COUNT as i64) as u32;
    }

    /// Pointer went down on a stepper button: step once and arm the
    /// auto-repeat timer.
    pub fn begin_hold(&mut self, delta: i32, now: Instant) {
        self.step(delta);
        self.hold = Some(HoldRepeat {
            delta,
            next_fire: now + HOLD_INITIAL_DELAY,
        });
    }

    /// Advance the auto-repeat timer. Returns true if any step fired.
    pub fn tick_hold(&mut self, now: Instant) -> bool {
        let mut fired = false;
        loop {
            let delta = match self.hold.as_mut() {
                Some(hold) if now >= hold.next_fire => {
                    hold.next_fire += HOLD_REPEAT_INTERVAL;
                    hold.delta
                }
                _ => break,
            };
            self.step(delta);
            fired = true;
        }
        fired
    }

    /// Pointer released, left the button, or was cancelled: stop repeating.
    pub fn end_hold(&mut self) {
        self.hold = None;
    }

    pub fn is_holding(&self) -> bool {
        self.hold.is_some()
    }

    /// Direction of the active hold, if any. Lets the renderer tie the
    /// repeat timer to the specific button that is held down.
    pub fn hold_delta(&self) -> Option<i32> {
        self.hold.map(|hold| hold.delta)
    }

    /// Strip anything but ASCII digits from the direct-entry field. Called
    /// after every edit of the text field.
    pub fn filter_direct_input(&mut self) {
        if self.direct_input.chars().any(|c| !c.is_ascii_digit()) {
            self.direct_input.retain(|c| c.is_ascii_digit());
        }
        self.error = None;
    }

    /// Validate the pending value. The stepper value is valid by
    /// construction; direct entry is rejected (never clamped) when out of
    /// range, and the session stays open with `error` set.
    pub fn commit(&mut self) -> Result<u32, CountError> {
        let result = match self.mode {
            CountInputMode::Stepper => Ok(self.count),
            CountInputMode::Direct => match self.parse_direct() {
                Some(value) if value > MAX_COUNT as u64 => Err(CountError::AboveMax),
                Some(value) => Ok(value as u32),
                None => Err(CountError::Invalid),
            },
        };
        self.error = result.err();
        result
    }

    fn parse_direct(&self) -> Option<u64> {
        if self.direct_input.is_empty() {
            return Some(0);
        }
        self.direct_input.parse::<u64>().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_clamps_initial_count() {
        let editor = CountEditor::open(1000, 50_000);
        assert_eq!(editor.count(), MAX_COUNT);
    }

    #[test]
    fn test_step_clamps_at_bounds() {
        let mut editor = CountEditor::open(1000, 0);
        editor.step(-1);
        assert_eq!(editor.count(), 0);

        let mut editor = CountEditor::open(1000, MAX_COUNT);
        editor.step(1);
        assert_eq!(editor.count(), MAX_COUNT);
        editor.step(-1);
        assert_eq!(editor.count(), MAX_COUNT - 1);
    }

    #[test]
    fn test_hold_repeats_after_initial_delay() {
        let start = Instant::now();
        let mut editor = CountEditor::open(1000, 0);

        editor.begin_hold(1, start);
        assert_eq!(editor.count(), 1); // immediate step

        // Before the initial delay nothing fires.
        assert!(!editor.tick_hold(start + Duration::from_millis(300)));
        assert_eq!(editor.count(), 1);

        // At the delay the first repeat fires, then every interval.
        assert!(editor.tick_hold(start + Duration::from_millis(320)));
        assert_eq!(editor.count(), 2);
        assert!(editor.tick_hold(start + Duration::from_millis(320 + 280)));
        assert_eq!(editor.count(), 4);
    }

    #[test]
    fn test_end_hold_stops_repeating() {
        let start = Instant::now();
        let mut editor = CountEditor::open(1000, 0);

        editor.begin_hold(1, start);
        editor.end_hold();
        assert!(!editor.is_holding());
        assert!(!editor.tick_hold(start + Duration::from_secs(5)));
        assert_eq!(editor.count(), 1);
    }

    #[test]
    fn test_commit_from_stepper_is_always_valid() {
        let mut editor = CountEditor::open(1000, 7);
        assert_eq!(editor.commit(), Ok(7));
        assert_eq!(editor.error, None);
    }

    #[test]
    fn test_direct_entry_empty_commits_as_zero() {
        let mut editor = CountEditor::open(1000, 3);
        editor.toggle_mode();
        editor.direct_input.clear();
        assert_eq!(editor.commit(), Ok(0));
    }

    #[test]
    fn test_direct_entry_rejects_above_max_without_clamping() {
        let mut editor = CountEditor::open(500_000, 0);
        editor.toggle_mode();
        editor.direct_input = "10000".to_string();
        editor.filter_direct_input();

        assert_eq!(editor.commit(), Err(CountError::AboveMax));
        assert_eq!(editor.error, Some(CountError::AboveMax));
        // Session state untouched; the user can correct it.
        assert_eq!(editor.direct_input, "10000");
    }

    #[test]
    fn test_direct_input_filters_non_digits() {
        let mut editor = CountEditor::open(1000, 0);
        editor.toggle_mode();
        editor.direct_input = "1a2b3-".to_string();
        editor.filter_direct_input();
        assert_eq!(editor.direct_input, "123");
        assert_eq!(editor.commit(), Ok(123));
    }

    #[test]
    fn test_toggle_mode_seeds_and_folds_back() {
        let mut editor = CountEditor::open(1000, 42);
        editor.toggle_mode();
        assert_eq!(editor.mode, CountInputMode::Direct);
        assert_eq!(editor.direct_input, "42");

        editor.direct_input = "77".to_string();
        editor.toggle_mode();
        assert_eq!(editor.mode, CountInputMode::Stepper);
        assert_eq!(editor.count(), 77);
    }

    #[test]
    fn test_toggle_from_zero_seeds_empty_field() {
        let mut editor = CountEditor::open(1000, 0);
        editor.toggle_mode();
        assert_eq!(editor.direct_input, "");
        assert_eq!(editor.display_value(), 0);
    }

    #[test]
    fn test_subtotal_tracks_display_value() {
        let mut editor = CountEditor::open(5000, 2);
        assert_eq!(editor.subtotal(), 10_000);
        editor.toggle_mode();
        editor.direct_input = "4".to_string();
        assert_eq!(editor.subtotal(), 20_000);
    }
}
