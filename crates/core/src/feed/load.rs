//! Feed-level load state.
//!
//! Same shape as the product detail view: each load carries a sequence
//! number and only the latest one may change the state.

use crate::fetch::FetchError;
use crate::look::Look;

pub const MESSAGE_LOAD_FAILED: &str = "Failed to load looks. Please try again.";
pub const MESSAGE_EMPTY: &str = "No looks available";

#[derive(Debug, Clone, PartialEq)]
pub enum FeedLoadState {
    Idle,
    Loading { seq: u64 },
    Failed,
    Empty,
    Ready(Vec<Look>),
}

impl FeedLoadState {
    /// Message to show instead of the feed, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Failed => Some(MESSAGE_LOAD_FAILED),
            Self::Empty => Some(MESSAGE_EMPTY),
            _ => None,
        }
    }

    pub fn can_retry(&self) -> bool {
        matches!(self, Self::Failed)
    }
}

#[derive(Debug)]
pub struct FeedLoad {
    state: FeedLoadState,
    next_seq: u64,
}

impl Default for FeedLoad {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedLoad {
    pub fn new() -> Self {
        Self {
            state: FeedLoadState::Idle,
            next_seq: 0,
        }
    }

    pub fn state(&self) -> &FeedLoadState {
        &self.state
    }

    /// Start a load, superseding any in flight. Returns its sequence number.
    pub fn begin(&mut self) -> u64 {
        self.next_seq += 1;
        self.state = FeedLoadState::Loading { seq: self.next_seq };
        self.next_seq
    }

    /// Restart after a failure. Does nothing in any other state.
    pub fn retry(&mut self) -> Option<u64> {
        self.state.can_retry().then(|| self.begin())
    }

    /// Apply a finished load. Returns `false` if it was superseded.
    pub fn complete(&mut self, seq: u64, result: Result<Vec<Look>, FetchError>) -> bool {
        if self.state != (FeedLoadState::Loading { seq }) {
            tracing::debug!(seq, "Discarding stale feed load");
            return false;
        }

        self.state = match result {
            Ok(looks) if looks.is_empty() => FeedLoadState::Empty,
            Ok(looks) => FeedLoadState::Ready(looks),
            Err(err) => {
                tracing::warn!(error = %err, "Feed load failed");
                FeedLoadState::Failed
            }
        };
        true
    }
}
