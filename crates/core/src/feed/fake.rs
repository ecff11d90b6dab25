//! Recording media element for tests.

use super::media::{MediaElement, MediaError, ReadyState};

#[derive(Debug, Clone)]
pub struct FakeMedia {
    pub playing: bool,
    pub muted: bool,
    pub rewinds: usize,
    pub play_calls: usize,
    pub ready: ReadyState,
    /// Returned by the next `play` call instead of starting playback.
    pub fail_next_play: Option<MediaError>,
}

impl FakeMedia {
    pub fn ready() -> Self {
        Self::with_ready_state(ReadyState::HaveEnoughData)
    }

    pub fn with_ready_state(ready: ReadyState) -> Self {
        Self {
            playing: false,
            muted: false,
            rewinds: 0,
            play_calls: 0,
            ready,
            fail_next_play: None,
        }
    }
}

impl MediaElement for FakeMedia {
    fn play(&mut self) -> Result<(), MediaError> {
        self.play_calls += 1;
        if let Some(err) = self.fail_next_play.take() {
            return Err(err);
        }
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn rewind(&mut self) {
        self.rewinds += 1;
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn ready_state(&self) -> ReadyState {
        self.ready
    }
}
