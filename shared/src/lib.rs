use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub mod currency;
pub mod i18n;

pub use currency::format_vnd;
pub use i18n::{copy, Language, UiCopy};

/// Maximum note count a single denomination can hold.
pub const MAX_COUNT: u32 = 9999;

/// The fixed set of VND note denominations, largest first (grid order).
pub const DENOMINATIONS: [u32; 9] = [
    500_000, 200_000, 100_000, 50_000, 20_000, 10_000, 5_000, 2_000, 1_000,
];

/// Whether a face value belongs to the fixed denomination set.
pub fn is_denomination(value: u32) -> bool {
    DENOMINATIONS.contains(&value)
}

/// A single (denomination, count) pair as shown in the entered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyEntry {
    pub denomination: u32,
    pub count: u32,
}

impl TallyEntry {
    /// Monetary value of this entry (denomination × count).
    pub fn subtotal(&self) -> u64 {
        self.denomination as u64 * self.count as u64
    }
}

/// The tally of entered notes: denomination → count.
///
/// Invariants:
/// - a key is present only while its count is in 1..=MAX_COUNT;
/// - no key exists outside [`DENOMINATIONS`].
///
/// Serializes to a JSON object keyed by the numeric face value, e.g.
/// `{"1000":3,"5000":2}` — the shape the persisted record uses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CashState {
    counts: BTreeMap<u32, u32>,
}

impl CashState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the count for a denomination. A count of 0 removes the entry;
    /// anything above [`MAX_COUNT`] is clamped. Face values outside the
    /// fixed set are ignored and reported via the return value.
    pub fn set_count(&mut self, denomination: u32, count: u32) -> bool {
        if !is_denomination(denomination) {
            return false;
        }
        if count == 0 {
            self.counts.remove(&denomination);
        } else {
            self.counts.insert(denomination, count.min(MAX_COUNT));
        }
        true
    }

    /// Remove a denomination's entry. Idempotent.
    pub fn remove(&mut self, denomination: u32) {
        self.counts.remove(&denomination);
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.counts.clear();
    }

    /// Committed count for a denomination, 0 when not present.
    pub fn count(&self, denomination: u32) -> u32 {
        self.counts.get(&denomination).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of denominations with a non-zero count.
    pub fn denomination_count(&self) -> usize {
        self.counts.len()
    }

    /// Total number of notes across all entries. Derived, never cached.
    pub fn total_notes(&self) -> u32 {
        self.counts.values().sum()
    }

    /// Total monetary amount across all entries. Derived, never cached.
    pub fn total_amount(&self) -> u64 {
        self.counts
            .iter()
            .map(|(denom, count)| *denom as u64 * *count as u64)
            .sum()
    }

    /// Active entries in grid order (largest denomination first).
    pub fn entries(&self) -> Vec<TallyEntry> {
        DENOMINATIONS
            .iter()
            .filter_map(|&denomination| {
                let count = self.count(denomination);
                (count > 0).then_some(TallyEntry { denomination, count })
            })
            .collect()
    }

    /// Drop anything a stale or hand-edited persisted record may contain
    /// that the invariants forbid: zero counts, unknown face values, and
    /// counts above [`MAX_COUNT`] (clamped). Returns how many entries were
    /// repaired or dropped.
    pub fn sanitize(&mut self) -> usize {
        let before = self.counts.clone();
        self.counts
            .retain(|denom, count| is_denomination(*denom) && *count > 0);
        for count in self.counts.values_mut() {
            *count = (*count).min(MAX_COUNT);
        }
        before
            .into_iter()
            .filter(|(denom, count)| self.counts.get(denom).copied() != Some(*count))
            .count()
    }
}
