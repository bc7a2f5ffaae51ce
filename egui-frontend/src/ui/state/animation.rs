//! # Display Animation State
//!
//! Frame-driven interpolation for the total readout, plus the short
//! highlight pulse on a just-edited grid tile. Both are pure time
//! functions over `Instant`s so they can be unit-tested without a UI.

use std::time::{Duration, Instant};

/// How long the total takes to settle on a new value.
const TOTAL_ANIMATION_DURATION: Duration = Duration::from_millis(260);

/// How long a just-edited tile stays highlighted.
const RECENT_HIGHLIGHT_DURATION: Duration = Duration::from_millis(900);

fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// The animated total readout. Retargeted mid-flight whenever the real
/// total changes; a retarget to the already-settled value snaps directly
/// instead of animating.
pub struct AnimatedAmount {
    from: u64,
    target: u64,
    started_at: Option<Instant>,
}

impl AnimatedAmount {
    pub fn new(initial: u64) -> Self {
        Self {
            from: initial,
            target: initial,
            started_at: None,
        }
    }

    /// Point the animation at a new value. No-op when the target already
    /// matches (including the settled-equal snap case).
    pub fn retarget(&mut self, value: u64, now: Instant) {
        if value == self.target {
            return;
        }
        self.from = self.display(now);
        self.target = value;
        self.started_at = Some(now);
    }

    /// The value to render this frame.
    pub fn display(&self, now: Instant) -> u64 {
        let Some(started_at) = self.started_at else {
            return self.target;
        };
        let elapsed = now.saturating_duration_since(started_at);
        if elapsed >= TOTAL_ANIMATION_DURATION {
            return self.target;
        }
        let progress = elapsed.as_secs_f64() / TOTAL_ANIMATION_DURATION.as_secs_f64();
        let eased = ease_out_cubic(progress);
        let delta = self.target as f64 - self.from as f64;
        (self.from as f64 + delta * eased).round().max(0.0) as u64
    }

    /// Whether a repaint is still needed to finish the animation. Settles
    /// the internal state once the duration has elapsed.
    pub fn is_animating(&mut self, now: Instant) -> bool {
        match self.started_at {
            Some(started_at)
                if now.saturating_duration_since(started_at) < TOTAL_ANIMATION_DURATION =>
            {
                true
            }
            Some(_) => {
                self.from = self.target;
                self.started_at = None;
                false
            }
            None => false,
        }
    }
}

/// Marks the denomination tile that was just edited.
pub struct RecentHighlight {
    pub denomination: u32,
    since: Instant,
}

impl RecentHighlight {
    pub fn new(denomination: u32, now: Instant) -> Self {
        Self { denomination, since: now }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.since) >= RECENT_HIGHLIGHT_DURATION
    }

    /// 1.0 at the moment of the edit, fading to 0.0 at expiry.
    pub fn intensity(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.since).as_secs_f32();
        (1.0 - elapsed / RECENT_HIGHLIGHT_DURATION.as_secs_f32()).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settled_value_displays_directly() {
        let amount = AnimatedAmount::new(5000);
        assert_eq!(amount.display(Instant::now()), 5000);
    }

    #[test]
    fn test_retarget_interpolates_then_settles() {
        let start = Instant::now();
        let mut amount = AnimatedAmount::new(0);
        amount.retarget(10_000, start);

        let midway = amount.display(start + Duration::from_millis(130));
        assert!(midway > 0 && midway < 10_000);
        // Ease-out: more than half the distance is covered by half time.
        assert!(midway > 5_000);

        assert_eq!(amount.display(start + Duration::from_millis(260)), 10_000);
        assert!(!amount.is_animating(start + Duration::from_millis(300)));
    }

    #[test]
    fn test_retarget_to_settled_value_snaps() {
        let start = Instant::now();
        let mut amount = AnimatedAmount::new(7000);
        amount.retarget(7000, start);
        assert!(!amount.is_animating(start));
        assert_eq!(amount.display(start + Duration::from_millis(1)), 7000);
    }

    #[test]
    fn test_retarget_mid_flight_restarts_from_current() {
        let start = Instant::now();
        let mut amount = AnimatedAmount::new(0);
        amount.retarget(10_000, start);

        let mid = start + Duration::from_millis(130);
        let value_at_mid = amount.display(mid);
        amount.retarget(0, mid);

        // The new flight starts where the old one was interrupted.
        assert_eq!(amount.display(mid), value_at_mid);
        assert_eq!(amount.display(mid + Duration::from_millis(260)), 0);
    }

    #[test]
    fn test_animation_decreases_toward_smaller_target() {
        let start = Instant::now();
        let mut amount = AnimatedAmount::new(10_000);
        amount.retarget(2_000, start);
        let midway = amount.display(start + Duration::from_millis(130));
        assert!(midway < 10_000 && midway > 2_000);
    }

    #[test]
    fn test_recent_highlight_expiry() {
        let start = Instant::now();
        let highlight = RecentHighlight::new(5000, start);
        assert!(!highlight.is_expired(start + Duration::from_millis(899)));
        assert!(highlight.is_expired(start + Duration::from_millis(900)));
        assert!(highlight.intensity(start) > 0.99);
        assert_eq!(highlight.intensity(start + Duration::from_secs(2)), 0.0);
    }
}
