// SPDX-License-Identifier: MPL-2.0
//! Media element port definition.
//!
//! This module defines the [`MediaElement`] trait: the host-owned playback
//! object the player controller drives. Adapters wrap a real host element
//! (a browser `<video>`, a native decoder) or simulate one for tests.
//!
//! # Design Notes
//!
//! - The element is the source of truth for playback state; the controller
//!   only mirrors it after notifications
//! - Mutations are requests: the element reports the outcome through events
//! - Host policy may refuse play, fullscreen and picture-in-picture requests
//!   with a [`HostRejection`]

use thiserror::Error;

use super::events::{EventSink, Listener, MediaEvent};

/// Why the host refused a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostRejection {
    /// Blocked by host policy (autoplay rules, missing user activation).
    #[error("Request not allowed: {0}")]
    NotAllowed(String),

    /// The host does not offer this capability.
    #[error("Request not supported: {0}")]
    NotSupported(String),
}

/// Display mode of the first caption track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptionMode {
    Hidden,
    Showing,
}

impl CaptionMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Hidden => Self::Showing,
            Self::Showing => Self::Hidden,
        }
    }

    #[must_use]
    pub fn is_showing(self) -> bool {
        matches!(self, Self::Showing)
    }
}

// =============================================================================
// MediaElement Trait
// =============================================================================

/// Port for the host media element.
///
/// Times are in seconds. `duration()` is `NaN` until metadata has loaded.
///
/// # Lifecycle
///
/// 1. The host creates and owns the element
/// 2. A controller subscribes with [`add_event_listener`](Self::add_event_listener)
/// 3. The controller issues requests and reads values back on notifications
/// 4. Dropping the returned [`Listener`] guards ends the subscription
pub trait MediaElement {
    /// Requests playback. Emits `Play` once playback actually starts.
    ///
    /// # Errors
    ///
    /// Returns a [`HostRejection`] if host policy blocks playback.
    fn play(&mut self) -> Result<(), HostRejection>;

    /// Requests a pause. Emits `Pause` if the element was playing.
    fn pause(&mut self);

    fn is_paused(&self) -> bool;

    fn current_time(&self) -> f64;

    /// Moves the playhead. The element clamps to its own bounds.
    fn set_current_time(&mut self, secs: f64);

    /// Total length in seconds; `NaN` while unknown.
    fn duration(&self) -> f64;

    fn volume(&self) -> f64;

    /// Emits `VolumeChange` when the value changes.
    fn set_volume(&mut self, volume: f64);

    fn is_muted(&self) -> bool;

    /// Emits `VolumeChange` when the flag changes.
    fn set_muted(&mut self, muted: bool);

    fn playback_rate(&self) -> f64;

    fn set_playback_rate(&mut self, rate: f64);

    fn is_fullscreen(&self) -> bool;

    /// # Errors
    ///
    /// Returns a [`HostRejection`] if fullscreen is unavailable or denied.
    fn request_fullscreen(&mut self) -> Result<(), HostRejection>;

    /// # Errors
    ///
    /// Returns a [`HostRejection`] if the host refuses to leave fullscreen.
    fn exit_fullscreen(&mut self) -> Result<(), HostRejection>;

    fn is_picture_in_picture(&self) -> bool;

    /// # Errors
    ///
    /// Returns a [`HostRejection`] if picture-in-picture is unavailable or denied.
    fn request_picture_in_picture(&mut self) -> Result<(), HostRejection>;

    /// # Errors
    ///
    /// Returns a [`HostRejection`] if the host refuses to close the mini player.
    fn exit_picture_in_picture(&mut self) -> Result<(), HostRejection>;

    /// Mode of the first caption track, or `None` without one.
    fn caption_mode(&self) -> Option<CaptionMode>;

    /// Sets the mode of the first caption track. No-op without one.
    fn set_caption_mode(&mut self, mode: CaptionMode);

    /// Subscribes `sink` to `event` for as long as the returned guard lives.
    fn add_event_listener(&self, event: MediaEvent, sink: EventSink) -> Listener;
}

/// Lets a host keep ownership of its element while a controller drives it.
impl<T: MediaElement + ?Sized> MediaElement for &mut T {
    fn play(&mut self) -> Result<(), HostRejection> {
        (**self).play()
    }

    fn pause(&mut self) {
        (**self).pause();
    }

    fn is_paused(&self) -> bool {
        (**self).is_paused()
    }

    fn current_time(&self) -> f64 {
        (**self).current_time()
    }

    fn set_current_time(&mut self, secs: f64) {
        (**self).set_current_time(secs);
    }

    fn duration(&self) -> f64 {
        (**self).duration()
    }

    fn volume(&self) -> f64 {
        (**self).volume()
    }

    fn set_volume(&mut self, volume: f64) {
        (**self).set_volume(volume);
    }

    fn is_muted(&self) -> bool {
        (**self).is_muted()
    }

    fn set_muted(&mut self, muted: bool) {
        (**self).set_muted(muted);
    }

    fn playback_rate(&self) -> f64 {
        (**self).playback_rate()
    }

    fn set_playback_rate(&mut self, rate: f64) {
        (**self).set_playback_rate(rate);
    }

    fn is_fullscreen(&self) -> bool {
        (**self).is_fullscreen()
    }

    fn request_fullscreen(&mut self) -> Result<(), HostRejection> {
        (**self).request_fullscreen()
    }

    fn exit_fullscreen(&mut self) -> Result<(), HostRejection> {
        (**self).exit_fullscreen()
    }

    fn is_picture_in_picture(&self) -> bool {
        (**self).is_picture_in_picture()
    }

    fn request_picture_in_picture(&mut self) -> Result<(), HostRejection> {
        (**self).request_picture_in_picture()
    }

    fn exit_picture_in_picture(&mut self) -> Result<(), HostRejection> {
        (**self).exit_picture_in_picture()
    }

    fn caption_mode(&self) -> Option<CaptionMode> {
        (**self).caption_mode()
    }

    fn set_caption_mode(&mut self, mode: CaptionMode) {
        (**self).set_caption_mode(mode);
    }

    fn add_event_listener(&self, event: MediaEvent, sink: EventSink) -> Listener {
        (**self).add_event_listener(event, sink)
    }
}
