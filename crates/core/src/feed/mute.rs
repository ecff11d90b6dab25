//! Feed-wide mute flag.
//!
//! Owned by the controller and passed by reference into each item's update
//! path; there is no process-wide mute state.

use serde::Serialize;

use super::media::MediaElement;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MuteState {
    muted: bool,
}

impl Default for MuteState {
    /// Feeds start muted so autoplay is permitted.
    fn default() -> Self {
        Self { muted: true }
    }
}

impl MuteState {
    pub fn new(muted: bool) -> Self {
        Self { muted }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Flip the flag and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    pub fn apply_to<M: MediaElement>(&self, media: &mut M) {
        media.set_muted(self.muted);
    }
}
