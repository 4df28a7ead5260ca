// SPDX-License-Identifier: MPL-2.0
//! In-memory media element implementing the [`MediaElement`] port trait.
//!
//! [`SimulatedMediaElement`] follows the notification order of a browser
//! `<video>` element without decoding anything. Time only moves when the
//! host calls [`advance`](SimulatedMediaElement::advance), which makes the
//! player deterministic under test and in benches.
//!
//! # Example
//!
//! ```
//! use iced_reel::application::port::MediaElement;
//! use iced_reel::infrastructure::SimulatedMediaElement;
//!
//! let mut media = SimulatedMediaElement::new();
//! media.load(120.0);
//! media.play().unwrap();
//! media.advance(1.5);
//! assert_eq!(media.current_time(), 1.5);
//! ```
//!
//! [`MediaElement`]: crate::application::port::MediaElement

use tracing::trace;

use crate::application::port::{
    CaptionMode, EventSink, EventTarget, HostRejection, Listener, MediaElement, MediaEvent,
};
use crate::domain::video::is_known_duration;

/// What the simulated host allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostCapabilities {
    /// When false, `play()` is rejected as if autoplay policy blocked it.
    pub playback_allowed: bool,
    pub fullscreen: bool,
    pub picture_in_picture: bool,
}

impl Default for HostCapabilities {
    fn default() -> Self {
        Self {
            playback_allowed: true,
            fullscreen: true,
            picture_in_picture: true,
        }
    }
}

#[derive(Debug)]
pub struct SimulatedMediaElement {
    events: EventTarget,
    capabilities: HostCapabilities,
    paused: bool,
    current_time: f64,
    duration: f64,
    volume: f64,
    muted: bool,
    playback_rate: f64,
    fullscreen: bool,
    picture_in_picture: bool,
    caption_mode: Option<CaptionMode>,
}

impl Default for SimulatedMediaElement {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedMediaElement {
    /// A paused element with no metadata loaded and no caption track.
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: EventTarget::new(),
            capabilities: HostCapabilities::default(),
            paused: true,
            current_time: 0.0,
            duration: f64::NAN,
            volume: 1.0,
            muted: false,
            playback_rate: 1.0,
            fullscreen: false,
            picture_in_picture: false,
            caption_mode: None,
        }
    }

    #[must_use]
    pub fn with_capabilities(mut self, capabilities: HostCapabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Attaches a caption track in the given mode.
    #[must_use]
    pub fn with_caption_track(mut self, mode: CaptionMode) -> Self {
        self.caption_mode = Some(mode);
        self
    }

    /// Sets the duration without notifying, as if metadata was already
    /// available before anyone subscribed.
    #[must_use]
    pub fn with_duration(mut self, duration_secs: f64) -> Self {
        self.duration = duration_secs;
        self
    }

    #[must_use]
    pub fn with_volume(mut self, volume: f64, muted: bool) -> Self {
        self.volume = volume.clamp(0.0, 1.0);
        self.muted = muted;
        self
    }

    pub fn set_capabilities(&mut self, capabilities: HostCapabilities) {
        self.capabilities = capabilities;
    }

    /// Finishes loading media of the given length. Emits `LoadedData`.
    pub fn load(&mut self, duration_secs: f64) {
        self.duration = duration_secs;
        self.current_time = 0.0;
        self.emit(MediaEvent::LoadedData);
    }

    /// Moves playback forward by `secs` of wall time, scaled by the rate.
    ///
    /// Emits `TimeUpdate`. Reaching the end pauses the element and emits
    /// `Pause`. Does nothing while paused.
    pub fn advance(&mut self, secs: f64) {
        if self.paused {
            return;
        }
        let next = self.current_time + secs * self.playback_rate;
        let ended = is_known_duration(self.duration) && next >= self.duration;
        self.current_time = if ended { self.duration } else { next };
        self.emit(MediaEvent::TimeUpdate);
        if ended {
            self.paused = true;
            self.emit(MediaEvent::Pause);
        }
    }

    /// Leaves fullscreen on the host's own initiative (Esc key).
    pub fn host_exit_fullscreen(&mut self) {
        if self.fullscreen {
            self.fullscreen = false;
            self.emit(MediaEvent::FullscreenChange);
        }
    }

    /// Closes the mini player on the host's own initiative.
    pub fn host_close_picture_in_picture(&mut self) {
        if self.picture_in_picture {
            self.picture_in_picture = false;
            self.emit(MediaEvent::LeavePictureInPicture);
        }
    }

    /// Live subscriptions across all notification kinds.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.events.listener_count()
    }

    fn emit(&self, event: MediaEvent) {
        let delivered = self.events.dispatch(event);
        trace!(event = event.name(), delivered, "Simulated media event");
    }
}

impl MediaElement for SimulatedMediaElement {
    fn play(&mut self) -> Result<(), HostRejection> {
        if !self.capabilities.playback_allowed {
            return Err(HostRejection::NotAllowed(
                "playback requires user activation".to_string(),
            ));
        }
        if !self.paused {
            return Ok(());
        }
        if is_known_duration(self.duration) && self.current_time >= self.duration {
            self.current_time = 0.0;
        }
        self.paused = false;
        self.emit(MediaEvent::Play);
        Ok(())
    }

    fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            self.emit(MediaEvent::Pause);
        }
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn current_time(&self) -> f64 {
        self.current_time
    }

    fn set_current_time(&mut self, secs: f64) {
        if secs.is_nan() {
            return;
        }
        let upper = if is_known_duration(self.duration) {
            self.duration
        } else {
            f64::INFINITY
        };
        self.current_time = secs.clamp(0.0, upper);
        self.emit(MediaEvent::TimeUpdate);
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn volume(&self) -> f64 {
        self.volume
    }

    fn set_volume(&mut self, volume: f64) {
        let volume = volume.clamp(0.0, 1.0);
        if volume != self.volume {
            self.volume = volume;
            self.emit(MediaEvent::VolumeChange);
        }
    }

    fn is_muted(&self) -> bool {
        self.muted
    }

    fn set_muted(&mut self, muted: bool) {
        if muted != self.muted {
            self.muted = muted;
            self.emit(MediaEvent::VolumeChange);
        }
    }

    fn playback_rate(&self) -> f64 {
        self.playback_rate
    }

    fn set_playback_rate(&mut self, rate: f64) {
        if rate.is_finite() && rate > 0.0 {
            self.playback_rate = rate;
        }
    }

    fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    fn request_fullscreen(&mut self) -> Result<(), HostRejection> {
        if !self.capabilities.fullscreen {
            return Err(HostRejection::NotSupported("fullscreen".to_string()));
        }
        if !self.fullscreen {
            self.fullscreen = true;
            self.emit(MediaEvent::FullscreenChange);
        }
        Ok(())
    }

    fn exit_fullscreen(&mut self) -> Result<(), HostRejection> {
        self.host_exit_fullscreen();
        Ok(())
    }

    fn is_picture_in_picture(&self) -> bool {
        self.picture_in_picture
    }

    fn request_picture_in_picture(&mut self) -> Result<(), HostRejection> {
        if !self.capabilities.picture_in_picture {
            return Err(HostRejection::NotSupported(
                "picture-in-picture".to_string(),
            ));
        }
        if !self.picture_in_picture {
            self.picture_in_picture = true;
            self.emit(MediaEvent::EnterPictureInPicture);
        }
        Ok(())
    }

    fn exit_picture_in_picture(&mut self) -> Result<(), HostRejection> {
        self.host_close_picture_in_picture();
        Ok(())
    }

    fn caption_mode(&self) -> Option<CaptionMode> {
        self.caption_mode
    }

    fn set_caption_mode(&mut self, mode: CaptionMode) {
        if let Some(current) = self.caption_mode.as_mut() {
            *current = mode;
        }
    }

    fn add_event_listener(&self, event: MediaEvent, sink: EventSink) -> Listener {
        self.events.add_listener(event, sink)
    }
}
