//! Media element abstraction.
//!
//! The controller drives video and image elements through [`MediaElement`] so
//! it can be hosted by any view layer, and tested with a recording fake.

use serde::Serialize;

/// Buffered readiness of a media element, ordered like the HTML media states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ReadyState {
    HaveNothing = 0,
    HaveMetadata = 1,
    HaveCurrentData = 2,
    HaveFutureData = 3,
    HaveEnoughData = 4,
}

/// A video may start once at least one frame is decoded.
pub const MIN_PLAYABLE_READY_STATE: ReadyState = ReadyState::HaveCurrentData;

/// Failure reported by a media element.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MediaError {
    /// A play request was interrupted by a later pause. Not a real failure.
    #[error("play request interrupted")]
    Interrupted,

    /// The host refused playback (e.g. an autoplay policy).
    #[error("playback not allowed: {0}")]
    NotAllowed(String),

    /// The media could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// The media could not be fetched.
    #[error("network error: {0}")]
    Network(String),
}

/// Operations the controller needs from a rendered video or image element.
///
/// Image elements implement `play`/`pause` as no-ops; their progress is
/// driven by the controller's own timer.
pub trait MediaElement {
    fn play(&mut self) -> Result<(), MediaError>;
    fn pause(&mut self);
    /// Seek back to the first frame.
    fn rewind(&mut self);
    fn set_muted(&mut self, muted: bool);
    fn ready_state(&self) -> ReadyState;
}

/// Per-item readiness as reported in snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Readiness {
    Loading,
    Ready,
    Playing,
    Paused,
    Error,
}
