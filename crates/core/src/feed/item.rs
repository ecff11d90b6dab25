//! Per-item playback state.

use serde::Serialize;

use super::media::{MediaElement, MediaError, Readiness, MIN_PLAYABLE_READY_STATE};
use super::mute::MuteState;
use super::progress::{video_percent, Completion, ProgressTimer};
use crate::look::{ContentType, Look};
use crate::types::{Millis, ResourceId};

/// Where an item sits in the activation cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemPhase {
    Inactive,
    /// Selected as active, waiting for media to become playable.
    BecomingActive,
    ActivePlaying,
    ActivePaused,
}

impl ItemPhase {
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Inactive)
    }
}

/// Render-facing view of one item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItemPlaybackState {
    pub index: usize,
    pub look_id: ResourceId,
    pub content_type: ContentType,
    pub phase: ItemPhase,
    pub is_active: bool,
    pub is_paused: bool,
    pub is_muted: bool,
    pub progress_percent: f64,
    pub readiness: Readiness,
    /// Show a retry affordance over the media.
    pub retryable: bool,
}

#[derive(Debug)]
pub struct FeedItem<M> {
    look: Look,
    media: M,
    phase: ItemPhase,
    readiness: Readiness,
    loaded: bool,
    user_paused: bool,
    timer: ProgressTimer,
    video_progress: f64,
}

impl<M: MediaElement> FeedItem<M> {
    pub fn new(look: Look, mut media: M, mute: &MuteState) -> Self {
        mute.apply_to(&mut media);
        Self {
            look,
            media,
            phase: ItemPhase::Inactive,
            readiness: Readiness::Loading,
            loaded: false,
            user_paused: false,
            timer: ProgressTimer::default(),
            video_progress: 0.0,
        }
    }

    pub fn look(&self) -> &Look {
        &self.look
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    pub fn phase(&self) -> ItemPhase {
        self.phase
    }

    pub fn readiness(&self) -> Readiness {
        self.readiness
    }

    pub fn is_user_paused(&self) -> bool {
        self.user_paused
    }

    pub fn is_errored(&self) -> bool {
        self.readiness == Readiness::Error
    }

    pub fn is_playing(&self) -> bool {
        self.phase == ItemPhase::ActivePlaying && self.readiness == Readiness::Playing
    }

    pub fn progress_percent(&self, now: Millis) -> f64 {
        match self.look.content_type {
            ContentType::Image => self.timer.percent(now),
            ContentType::Video => self.video_progress,
        }
    }

    pub(crate) fn snapshot(&self, index: usize, mute: &MuteState, now: Millis) -> FeedItemPlaybackState {
        FeedItemPlaybackState {
            index,
            look_id: self.look.id.clone(),
            content_type: self.look.content_type,
            phase: self.phase,
            is_active: self.phase.is_active(),
            is_paused: self.user_paused || self.phase == ItemPhase::ActivePaused,
            is_muted: mute.is_muted(),
            progress_percent: self.progress_percent(now),
            readiness: self.readiness,
            retryable: self.is_errored(),
        }
    }

    pub(crate) fn activate(&mut self, now: Millis, mute: &MuteState) {
        self.phase = ItemPhase::BecomingActive;
        self.video_progress = 0.0;
        mute.apply_to(&mut self.media);
        self.try_start(now);
    }

    /// Move from `BecomingActive` to playing once the media allows it.
    pub(crate) fn try_start(&mut self, now: Millis) {
        if self.phase != ItemPhase::BecomingActive || self.is_errored() {
            return;
        }
        match self.look.content_type {
            ContentType::Image => {
                if self.loaded {
                    self.timer.start(now);
                    self.phase = ItemPhase::ActivePlaying;
                    self.readiness = Readiness::Playing;
                }
            }
            ContentType::Video => {
                if self.media.ready_state() >= MIN_PLAYABLE_READY_STATE {
                    self.play_video();
                }
            }
        }
    }

    fn play_video(&mut self) {
        match self.media.play() {
            Ok(()) => {
                self.phase = ItemPhase::ActivePlaying;
                self.readiness = Readiness::Playing;
            }
            // A later pause already won; nothing to report.
            Err(MediaError::Interrupted) => {}
            Err(err) => {
                tracing::warn!(look_id = %self.look.id, error = %err, "Video play failed");
                self.phase = ItemPhase::ActivePaused;
                self.readiness = Readiness::Paused;
            }
        }
    }

    /// Pause, rewind and zero progress so re-entry starts from the beginning.
    pub(crate) fn deactivate(&mut self) {
        self.media.pause();
        self.media.rewind();
        self.timer.reset();
        self.video_progress = 0.0;
        self.user_paused = false;
        self.phase = ItemPhase::Inactive;
        if !self.is_errored() {
            self.readiness = if self.loaded {
                Readiness::Ready
            } else {
                Readiness::Loading
            };
        }
    }

    /// Handle a tap on the media surface. Returns `Some(true)` if the item is
    /// now paused, `Some(false)` if it resumed, `None` if the tap did nothing.
    pub(crate) fn toggle_pause(&mut self, now: Millis) -> Option<bool> {
        if self.is_errored() {
            return None;
        }
        match self.phase {
            ItemPhase::ActivePlaying => {
                match self.look.content_type {
                    ContentType::Video => self.media.pause(),
                    ContentType::Image => self.timer.pause(now),
                }
                self.user_paused = true;
                self.phase = ItemPhase::ActivePaused;
                self.readiness = Readiness::Paused;
                Some(true)
            }
            ItemPhase::ActivePaused => {
                self.user_paused = false;
                match self.look.content_type {
                    ContentType::Video => self.play_video(),
                    ContentType::Image => {
                        self.timer.resume(now);
                        self.phase = ItemPhase::ActivePlaying;
                        self.readiness = Readiness::Playing;
                    }
                }
                Some(false)
            }
            ItemPhase::Inactive | ItemPhase::BecomingActive => None,
        }
    }

    /// A load that clears an error restarts the item the same way
    /// [`Self::retry`] does, from zero and through `BecomingActive`.
    pub(crate) fn mark_loaded(&mut self, now: Millis) {
        if self.is_errored() {
            self.retry();
        }
        self.loaded = true;
        if self.readiness == Readiness::Loading {
            self.readiness = Readiness::Ready;
        }
        self.try_start(now);
    }

    pub(crate) fn mark_failed(&mut self, error: &MediaError, now: Millis) {
        if *error == MediaError::Interrupted {
            return;
        }
        tracing::warn!(look_id = %self.look.id, error = %error, "Media failed to load");
        self.timer.pause(now);
        self.readiness = Readiness::Error;
    }

    /// Put an errored item back into loading so the host can reload it.
    pub(crate) fn retry(&mut self) -> bool {
        if !self.is_errored() {
            return false;
        }
        self.loaded = false;
        self.readiness = Readiness::Loading;
        if self.phase.is_active() {
            self.timer.reset();
            self.video_progress = 0.0;
            self.user_paused = false;
            self.phase = ItemPhase::BecomingActive;
        }
        true
    }

    /// Late position reports for a rewound, inactive video are dropped.
    pub(crate) fn set_video_position(&mut self, current_time: f64, duration: f64) {
        if !self.phase.is_active() {
            return;
        }
        self.video_progress = video_percent(current_time, duration);
    }

    /// Sample the image timer while this item is playing.
    pub(crate) fn tick(&mut self, now: Millis) -> Option<Completion> {
        if self.look.content_type != ContentType::Image || !self.is_playing() {
            return None;
        }
        self.timer.tick(now)
    }

    pub(crate) fn completion_is_current(&self, completion: Completion) -> bool {
        self.timer.is_current(completion)
    }

    /// Restart a finished video from its first frame.
    pub(crate) fn loop_video(&mut self) {
        self.media.rewind();
        self.video_progress = 0.0;
        self.play_video();
    }

    pub(crate) fn release(mut self) -> M {
        self.media.pause();
        self.media
    }
}
