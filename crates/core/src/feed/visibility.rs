//! Debounced visibility tracking.
//!
//! Each item has at most one pending visibility change. A new observation
//! for the same item replaces it and restarts the delay; only a change that
//! survives the full [`VISIBILITY_DEBOUNCE_MS`] window is handed to the
//! controller.

use std::collections::BTreeMap;

use crate::types::Millis;

/// Visible fraction of an item at which it counts as on screen.
pub const VISIBILITY_THRESHOLD: f64 = 0.7;

/// Quiet period before a visibility change is acted on.
pub const VISIBILITY_DEBOUNCE_MS: Millis = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingVisibility {
    pub visible: bool,
    pub due_at: Millis,
    /// Observation order across all items.
    pub seq: u64,
}

/// A visibility change whose debounce window has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettledVisibility {
    pub index: usize,
    pub visible: bool,
    pub seq: u64,
}

pub fn is_visible(fraction: f64) -> bool {
    fraction >= VISIBILITY_THRESHOLD
}

#[derive(Debug, Default)]
pub struct VisibilityDebouncer {
    pending: BTreeMap<usize, PendingVisibility>,
    seq: u64,
}

impl VisibilityDebouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an observed visible fraction, replacing any pending change.
    pub fn observe(&mut self, index: usize, fraction: f64, now: Millis) {
        self.seq += 1;
        self.pending.insert(
            index,
            PendingVisibility {
                visible: is_visible(fraction),
                due_at: now + VISIBILITY_DEBOUNCE_MS,
                seq: self.seq,
            },
        );
    }

    /// Remove and return every change that is due, in observation order.
    pub fn take_settled(&mut self, now: Millis) -> Vec<SettledVisibility> {
        let due: Vec<usize> = self
            .pending
            .iter()
            .filter(|(_, p)| p.due_at <= now)
            .map(|(index, _)| *index)
            .collect();

        let mut settled: Vec<SettledVisibility> = due
            .into_iter()
            .filter_map(|index| {
                self.pending.remove(&index).map(|p| SettledVisibility {
                    index,
                    visible: p.visible,
                    seq: p.seq,
                })
            })
            .collect();
        settled.sort_by_key(|s| s.seq);
        settled
    }

    pub fn pending(&self, index: usize) -> Option<&PendingVisibility> {
        self.pending.get(&index)
    }

    /// Earliest time at which something will settle.
    pub fn next_due(&self) -> Option<Millis> {
        self.pending.values().map(|p| p.due_at).min()
    }

    /// Drop the pending change for a removed item and shift later indices down.
    pub fn remove_index(&mut self, index: usize) {
        self.pending = std::mem::take(&mut self.pending)
            .into_iter()
            .filter(|(i, _)| *i != index)
            .map(|(i, p)| if i > index { (i - 1, p) } else { (i, p) })
            .collect();
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
