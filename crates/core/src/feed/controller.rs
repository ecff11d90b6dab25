//! Feed playback controller.
//!
//! Owns every mounted feed item and decides which single item is active.
//! The host reports visible fractions, media callbacks and taps, calls
//! [`FeedController::poll`] on every animation tick, and renders
//! [`FeedController::snapshot`].
//!
//! At most one item is ever playing: activation always deactivates the
//! previously active item (pause + rewind + reset) before the new item's
//! media is started.

use super::item::{FeedItem, FeedItemPlaybackState};
use super::media::{MediaElement, MediaError};
use super::mute::MuteState;
use super::visibility::VisibilityDebouncer;
use crate::look::{ContentType, Look};
use crate::overlay::{self, TapTarget};
use crate::types::{Millis, ResourceId};

/// Something the host should react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedEvent {
    Activated { index: usize },
    Deactivated { index: usize },
    /// Bring this item into view; the feed advanced to it.
    ScrollRequested { index: usize },
    /// The last item was a video and restarted from the beginning.
    Looped { index: usize },
}

/// Result of a tap on a feed item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TapOutcome {
    /// A hotspot consumed the tap. Playback is untouched.
    OpenProduct(ResourceId),
    Paused,
    Resumed,
    Ignored,
}

#[derive(Debug)]
pub struct FeedController<M> {
    items: Vec<FeedItem<M>>,
    active: Option<usize>,
    mute: MuteState,
    visibility: VisibilityDebouncer,
}

impl<M: MediaElement> Default for FeedController<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: MediaElement> FeedController<M> {
    pub fn new() -> Self {
        Self::with_mute(MuteState::default())
    }

    pub fn with_mute(mute: MuteState) -> Self {
        Self {
            items: Vec::new(),
            active: None,
            mute,
            visibility: VisibilityDebouncer::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Mounting
    // -----------------------------------------------------------------------

    /// Append a look to the feed. Returns its index.
    pub fn mount(&mut self, look: Look, media: M) -> usize {
        self.items.push(FeedItem::new(look, media, &self.mute));
        self.items.len() - 1
    }

    /// Remove a look, releasing its media element.
    pub fn remove(&mut self, look_id: &ResourceId) -> Option<M> {
        let index = self.items.iter().position(|item| &item.look().id == look_id)?;

        match self.active {
            Some(active) if active == index => {
                self.items[index].deactivate();
                self.active = None;
            }
            Some(active) if active > index => self.active = Some(active - 1),
            _ => {}
        }
        self.visibility.remove_index(index);

        Some(self.items.remove(index).release())
    }

    /// Release every item. The controller is empty afterwards.
    pub fn teardown(&mut self) -> Vec<M> {
        self.active = None;
        self.visibility.clear();
        tracing::debug!(items = self.items.len(), "Tearing down feed");
        self.items.drain(..).map(FeedItem::release).collect()
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn is_muted(&self) -> bool {
        self.mute.is_muted()
    }

    pub fn item(&self, index: usize) -> Option<&FeedItem<M>> {
        self.items.get(index)
    }

    /// Direct access to an item's element, e.g. to swap its source on retry.
    pub fn media_mut(&mut self, index: usize) -> Option<&mut M> {
        self.items.get_mut(index).map(FeedItem::media_mut)
    }

    pub fn playing_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_playing()).count()
    }

    /// Earliest time a pending visibility change settles, for hosts that
    /// schedule polls instead of polling every frame.
    pub fn next_visibility_due(&self) -> Option<Millis> {
        self.visibility.next_due()
    }

    pub fn snapshot(&self, now: Millis) -> Vec<FeedItemPlaybackState> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| item.snapshot(index, &self.mute, now))
            .collect()
    }

    // -----------------------------------------------------------------------
    // Scroll / time
    // -----------------------------------------------------------------------

    /// Record the visible fraction of an item. Acted on by [`Self::poll`]
    /// once it has been stable for the debounce window.
    pub fn observe_visibility(&mut self, index: usize, fraction: f64, now: Millis) {
        if index >= self.items.len() {
            tracing::debug!(index, "Ignoring visibility for unmounted item");
            return;
        }
        self.visibility.observe(index, fraction, now);
    }

    /// Apply settled visibility changes and advance timers.
    pub fn poll(&mut self, now: Millis) -> Vec<FeedEvent> {
        let mut events = Vec::new();

        let mut candidate: Option<usize> = None;
        for change in self.visibility.take_settled(now) {
            if change.index >= self.items.len() {
                continue;
            }
            if change.visible {
                candidate = Some(change.index);
            } else if self.active == Some(change.index) {
                self.deactivate_active(&mut events);
            }
        }
        if let Some(index) = candidate {
            if self.active != Some(index) {
                self.activate(index, now, &mut events);
            }
        }

        if let Some(index) = self.active {
            self.items[index].try_start(now);

            if let Some(completion) = self.items[index].tick(now) {
                let item = &self.items[index];
                if item.completion_is_current(completion) && !item.is_user_paused() {
                    self.advance_into(now, &mut events);
                }
            }
        }

        events
    }

    /// Move to the next item, as if the current one finished.
    pub fn advance(&mut self, now: Millis) -> Vec<FeedEvent> {
        let mut events = Vec::new();
        self.advance_into(now, &mut events);
        events
    }

    /// Step back to the item before the active one.
    pub fn previous(&mut self, now: Millis) -> Vec<FeedEvent> {
        match self.active {
            Some(current) if current > 0 => self.go_to(current - 1, now),
            _ => Vec::new(),
        }
    }

    /// Make `index` the active item and ask the host to scroll to it.
    /// Does nothing if it is already active or not mounted.
    pub fn go_to(&mut self, index: usize, now: Millis) -> Vec<FeedEvent> {
        let mut events = Vec::new();
        if index >= self.items.len() || self.active == Some(index) {
            return events;
        }
        self.activate(index, now, &mut events);
        events.push(FeedEvent::ScrollRequested { index });
        events
    }

    // -----------------------------------------------------------------------
    // Media callbacks
    // -----------------------------------------------------------------------

    /// The element has decoded enough to show (video `loadeddata`, image `load`).
    pub fn media_loaded(&mut self, index: usize, now: Millis) {
        if let Some(item) = self.items.get_mut(index) {
            item.mark_loaded(now);
        }
    }

    pub fn media_time_update(&mut self, index: usize, current_time: f64, duration: f64) {
        if let Some(item) = self.items.get_mut(index) {
            item.set_video_position(current_time, duration);
        }
    }

    /// A video reached its end.
    pub fn media_ended(&mut self, index: usize, now: Millis) -> Vec<FeedEvent> {
        if self.active != Some(index) {
            return Vec::new();
        }
        let item = &self.items[index];
        if item.is_user_paused() || item.is_errored() {
            return Vec::new();
        }
        self.advance(now)
    }

    /// The element failed. The item stays where it is in the activation
    /// cycle and waits for [`Self::retry_media`].
    pub fn media_error(&mut self, index: usize, error: MediaError, now: Millis) {
        if let Some(item) = self.items.get_mut(index) {
            item.mark_failed(&error, now);
        }
    }

    /// Returns `true` if the item was errored and should be reloaded.
    pub fn retry_media(&mut self, index: usize) -> bool {
        self.items.get_mut(index).is_some_and(|item| item.retry())
    }

    // -----------------------------------------------------------------------
    // User input
    // -----------------------------------------------------------------------

    /// Route a tap at percentage coordinates on an item.
    ///
    /// Hotspots get the first look at the tap; a tap they consume never
    /// reaches the media surface.
    pub fn tap(&mut self, index: usize, x: f64, y: f64, now: Millis) -> TapOutcome {
        let Some(item) = self.items.get(index) else {
            return TapOutcome::Ignored;
        };

        if item.look().content_type == ContentType::Image && !item.is_errored() {
            if let TapTarget::Hotspot { product_id, .. } =
                overlay::route_tap(&item.look().hotspots, x, y)
            {
                tracing::debug!(index, %product_id, "Hotspot tapped");
                return TapOutcome::OpenProduct(product_id);
            }
        }

        self.toggle_pause(index, now)
    }

    /// Tap-to-pause on the media surface. Only the active item responds.
    pub fn toggle_pause(&mut self, index: usize, now: Millis) -> TapOutcome {
        if self.active != Some(index) {
            return TapOutcome::Ignored;
        }
        match self.items[index].toggle_pause(now) {
            Some(true) => TapOutcome::Paused,
            Some(false) => TapOutcome::Resumed,
            None => TapOutcome::Ignored,
        }
    }

    /// Flip the feed-wide mute flag and push it to every mounted element.
    pub fn toggle_mute(&mut self) -> bool {
        let muted = self.mute.toggle();
        for item in &mut self.items {
            self.mute.apply_to(item.media_mut());
        }
        tracing::debug!(muted, "Toggled feed mute");
        muted
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn activate(&mut self, index: usize, now: Millis, events: &mut Vec<FeedEvent>) {
        if let Some(previous) = self.active.take() {
            if previous != index {
                self.items[previous].deactivate();
                events.push(FeedEvent::Deactivated { index: previous });
            }
        }

        self.items[index].activate(now, &self.mute);
        self.active = Some(index);
        tracing::debug!(index, look_id = %self.items[index].look().id, "Activated feed item");
        events.push(FeedEvent::Activated { index });
    }

    fn deactivate_active(&mut self, events: &mut Vec<FeedEvent>) {
        if let Some(index) = self.active.take() {
            self.items[index].deactivate();
            tracing::debug!(index, "Deactivated feed item");
            events.push(FeedEvent::Deactivated { index });
        }
    }

    fn advance_into(&mut self, now: Millis, events: &mut Vec<FeedEvent>) {
        let Some(current) = self.active else {
            return;
        };
        let next = current + 1;
        if next < self.items.len() {
            self.activate(next, now, events);
            events.push(FeedEvent::ScrollRequested { index: next });
        } else if self.items[current].look().is_video() {
            self.items[current].loop_video();
            events.push(FeedEvent::Looped { index: current });
        }
    }
}
