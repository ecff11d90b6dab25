//! Feed playback: which look is active, what plays, and how far along it is.

pub mod controller;
pub mod item;
pub mod load;
pub mod media;
pub mod mute;
pub mod progress;
pub mod visibility;

#[cfg(test)]
mod fake;

pub use controller::{FeedController, FeedEvent, TapOutcome};
pub use item::{FeedItem, FeedItemPlaybackState, ItemPhase};
pub use load::{FeedLoad, FeedLoadState};
pub use media::{MediaElement, MediaError, ReadyState, Readiness};
pub use mute::MuteState;
pub use progress::{ProgressTimer, IMAGE_DURATION_MS, TICK_INTERVAL_MS};
pub use visibility::{VISIBILITY_DEBOUNCE_MS, VISIBILITY_THRESHOLD};
