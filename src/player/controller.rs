// SPDX-License-Identifier: MPL-2.0
//! Player controller: gestures in, element notifications mirrored out.
//!
//! The controller subscribes to every [`MediaEvent`] on mount and keeps the
//! [`Listener`] guards for its whole lifetime. Notifications land on a queue
//! the controller owns; the host drains it with [`Controller::pump`] or
//! [`Controller::process_next`], and each handler runs to completion before the
//! next event is looked at.
//!
//! Gestures never write element-owned values into [`PlayerState`] directly.
//! They issue a request and the state follows the resulting notification.

use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};
use tracing::{debug, info, warn};

use crate::application::port::{HostRejection, Listener, MediaElement, MediaEvent};
use crate::config::PlayerConfig;
use crate::domain::video::{
    format_duration, is_known_duration, Fraction, PlaybackSpeed, ThumbnailSet, UiMode, Volume,
    VolumeLevel,
};

use super::scrub::{PointerSample, ScrubState, TimelineBounds};
use super::state::PlayerState;

/// One mounted player.
pub struct Controller<A: MediaElement> {
    media: A,
    thumbnails: ThumbnailSet,
    state: PlayerState,
    bounds: TimelineBounds,
    events: UnboundedReceiver<MediaEvent>,
    /// Held for the controller's lifetime; dropping them deregisters.
    listeners: Vec<Listener>,
}

impl<A: MediaElement> Controller<A> {
    /// Subscribes to `media` and seeds the state from its current values.
    pub fn mount(media: A, thumbnails: ThumbnailSet) -> Self {
        let (sink, events) = unbounded_channel();
        let listeners = MediaEvent::ALL
            .iter()
            .map(|&event| media.add_event_listener(event, sink.clone()))
            .collect();

        let mut controller = Self {
            media,
            thumbnails,
            state: PlayerState::default(),
            bounds: TimelineBounds::default(),
            events,
            listeners,
        };
        controller.sync_from_media();
        info!(
            thumbnails = %controller.thumbnails.dir().display(),
            interval_secs = controller.thumbnails.interval_secs(),
            "Player mounted"
        );
        controller
    }

    /// Applies `[player]` preferences: initial volume, then autoplay.
    pub fn apply_player_config(&mut self, config: &PlayerConfig) {
        self.set_volume(config.initial_volume);
        if config.autoplay && self.media.is_paused() {
            if let Err(err) = self.media.play() {
                warn!(%err, "Autoplay rejected by host");
            }
        }
    }

    /// Releases every listener and hands the element back to the host.
    pub fn unmount(self) -> A {
        let Self {
            media, listeners, ..
        } = self;
        let released = listeners.len();
        drop(listeners);
        info!(released, "Player unmounted");
        media
    }

    #[must_use]
    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    #[must_use]
    pub fn media(&self) -> &A {
        &self.media
    }

    /// Direct element access for host-driven changes (loading, time passing).
    /// Notifications they trigger are picked up by the next drain.
    pub fn media_mut(&mut self) -> &mut A {
        &mut self.media
    }

    #[must_use]
    pub fn thumbnails(&self) -> &ThumbnailSet {
        &self.thumbnails
    }

    #[must_use]
    pub fn timeline_bounds(&self) -> TimelineBounds {
        self.bounds
    }

    /// Updates the timeline extent used to turn pointer X into a fraction.
    pub fn set_timeline_bounds(&mut self, bounds: TimelineBounds) {
        self.bounds = bounds;
    }

    // ═══════════════════════════════════════════════════════════════════════
    // EVENT LOOP
    // ═══════════════════════════════════════════════════════════════════════

    /// Handles every queued notification. Returns how many were handled.
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.events.try_recv() {
            self.handle_event(event);
            handled += 1;
        }
        handled
    }

    /// Waits for the next notification and handles it.
    ///
    /// Returns `None` once the element has gone away and the queue is drained.
    pub async fn process_next(&mut self) -> Option<MediaEvent> {
        let event = self.events.recv().await?;
        self.handle_event(event);
        Some(event)
    }

    /// Mirrors one notification into the state.
    pub fn handle_event(&mut self, event: MediaEvent) {
        debug!(event = event.name(), "Media event");
        match event {
            MediaEvent::Play => self.state.is_paused = false,
            MediaEvent::Pause => self.state.is_paused = true,
            MediaEvent::LoadedData => self.sync_times(),
            MediaEvent::TimeUpdate => {
                let current = self.media.current_time();
                if !self.state.scrub.is_scrubbing() {
                    self.state.progress_fraction = Fraction::of(current, self.media.duration());
                }
                self.state.current_time_text = format_duration(current);
            }
            MediaEvent::VolumeChange => self.sync_volume(),
            MediaEvent::FullscreenChange
            | MediaEvent::EnterPictureInPicture
            | MediaEvent::LeavePictureInPicture => self.sync_ui_mode(),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // PLAYBACK
    // ═══════════════════════════════════════════════════════════════════════

    /// Requests play when paused, pause otherwise.
    pub fn toggle_playback(&mut self) {
        if self.media.is_paused() {
            self.request_play();
        } else {
            self.media.pause();
        }
    }

    /// Moves the playhead to `fraction` of the duration.
    ///
    /// Ignored until the duration is known.
    pub fn seek_to(&mut self, fraction: f64) {
        let fraction = Fraction::new(fraction);
        let duration = self.media.duration();
        if !is_known_duration(duration) {
            debug!(fraction = fraction.value(), "Seek ignored, duration unknown");
            return;
        }
        self.media.set_current_time(fraction.value() * duration);
    }

    /// Next rate on the quarter-step cycle.
    pub fn cycle_playback_speed(&mut self) {
        let next = PlaybackSpeed::new(self.media.playback_rate()).cycle();
        self.media.set_playback_rate(next.value());
        // No rate notification is subscribed, so read it back right away
        self.state.playback_speed = PlaybackSpeed::new(self.media.playback_rate());
        debug!(speed = self.state.playback_speed.value(), "Playback speed");
    }

    // ═══════════════════════════════════════════════════════════════════════
    // AUDIO
    // ═══════════════════════════════════════════════════════════════════════

    /// Slider input. Zero mutes, anything else unmutes.
    pub fn set_volume(&mut self, value: f64) {
        let volume = Volume::new(value);
        self.media.set_volume(volume.value());
        self.media.set_muted(volume.is_silent());
    }

    pub fn toggle_mute(&mut self) {
        let muted = self.media.is_muted();
        self.media.set_muted(!muted);
    }

    /// Flips the first caption track. No-op without one.
    pub fn toggle_captions(&mut self) {
        let Some(mode) = self.media.caption_mode() else {
            debug!("No caption track to toggle");
            return;
        };
        self.media.set_caption_mode(mode.toggled());
        self.sync_captions();
    }

    // ═══════════════════════════════════════════════════════════════════════
    // VIEW MODES
    // ═══════════════════════════════════════════════════════════════════════

    pub fn toggle_fullscreen(&mut self) {
        let result = if self.media.is_fullscreen() {
            self.media.exit_fullscreen()
        } else {
            self.media.request_fullscreen()
        };
        log_rejection("fullscreen", result);
    }

    /// Theater is a local layout choice; the element is not involved.
    pub fn toggle_theater_mode(&mut self) {
        self.state.theater = !self.state.theater;
        self.sync_ui_mode();
    }

    pub fn toggle_mini_player(&mut self) {
        let result = if self.media.is_picture_in_picture() {
            self.media.exit_picture_in_picture()
        } else {
            self.media.request_picture_in_picture()
        };
        log_rejection("picture-in-picture", result);
    }

    // ═══════════════════════════════════════════════════════════════════════
    // SCRUBBING
    // ═══════════════════════════════════════════════════════════════════════

    /// Primary button pressed on the timeline.
    pub fn pointer_down(&mut self, pointer: PointerSample) {
        if pointer.primary_held {
            self.begin_scrub(pointer.x);
        }
    }

    /// Pointer moved over the timeline or, while scrubbing, anywhere.
    ///
    /// A move without the button held ends a scrub whose release was missed.
    pub fn pointer_move(&mut self, pointer: PointerSample) {
        match (self.state.scrub, pointer.primary_held) {
            (ScrubState::Scrubbing { .. }, true) => self.update_scrub(pointer.x),
            (ScrubState::Scrubbing { .. }, false) => self.end_scrub(pointer.x),
            (ScrubState::Idle, _) => self.update_preview(self.bounds.fraction_at(pointer.x)),
        }
    }

    pub fn pointer_up(&mut self, pointer: PointerSample) {
        if self.state.scrub.is_scrubbing() {
            self.end_scrub(pointer.x);
        }
    }

    /// Pointer left the timeline. Hides the hover preview unless scrubbing.
    pub fn pointer_leave(&mut self) {
        if !self.state.scrub.is_scrubbing() {
            self.state.preview_thumbnail = None;
        }
    }

    /// Starts a scrub at pointer `x`, pausing playback.
    ///
    /// The paused flag is captured before the pause request goes out.
    pub fn begin_scrub(&mut self, x: f32) {
        if self.state.scrub.is_scrubbing() {
            self.update_scrub(x);
            return;
        }
        let was_paused = self.media.is_paused();
        self.state.scrub = ScrubState::Scrubbing { was_paused };
        self.media.pause();
        debug!(was_paused, "Scrub started");
        self.update_scrub(x);
    }

    /// Moves the scrub cursor to pointer `x`. Last write wins.
    pub fn update_scrub(&mut self, x: f32) {
        if !self.state.scrub.is_scrubbing() {
            return;
        }
        let fraction = self.bounds.fraction_at(x);
        self.update_preview(fraction);
        self.state.progress_fraction = fraction;
        self.state.scrub_thumbnail = self.state.preview_thumbnail.clone();
    }

    /// Commits the seek at pointer `x` and resumes if playback was running.
    pub fn end_scrub(&mut self, x: f32) {
        let ScrubState::Scrubbing { was_paused } = self.state.scrub else {
            return;
        };
        let fraction = self.bounds.fraction_at(x);
        self.update_preview(fraction);
        self.state.progress_fraction = fraction;
        self.state.scrub = ScrubState::Idle;
        self.state.scrub_thumbnail = None;

        self.seek_to(fraction.value());
        if !was_paused {
            self.request_play();
        }
        debug!(fraction = fraction.value(), resumed = !was_paused, "Scrub ended");
    }

    // ═══════════════════════════════════════════════════════════════════════
    // INTERNAL
    // ═══════════════════════════════════════════════════════════════════════

    fn request_play(&mut self) {
        if let Err(err) = self.media.play() {
            warn!(%err, "Play request rejected by host");
        }
    }

    fn update_preview(&mut self, fraction: Fraction) {
        self.state.preview_fraction = fraction;
        self.state.preview_thumbnail = self
            .thumbnails
            .preview_for(fraction, self.media.duration());
    }

    fn sync_from_media(&mut self) {
        self.state.is_paused = self.media.is_paused();
        self.state.playback_speed = PlaybackSpeed::new(self.media.playback_rate());
        self.sync_volume();
        self.sync_captions();
        self.sync_times();
        self.sync_ui_mode();
    }

    fn sync_times(&mut self) {
        let current = self.media.current_time();
        let duration = self.media.duration();
        self.state.total_time_text = format_duration(duration);
        self.state.current_time_text = format_duration(current);
        if !self.state.scrub.is_scrubbing() {
            self.state.progress_fraction = Fraction::of(current, duration);
        }
    }

    fn sync_volume(&mut self) {
        let volume = self.media.volume();
        self.state.volume_level = VolumeLevel::from_volume(volume, self.media.is_muted());
        self.state.volume_slider = volume;
    }

    fn sync_captions(&mut self) {
        self.state.captions_visible = self
            .media
            .caption_mode()
            .is_some_and(|mode| mode.is_showing());
    }

    fn sync_ui_mode(&mut self) {
        self.state.ui_mode = UiMode::resolve(
            self.media.is_fullscreen(),
            self.media.is_picture_in_picture(),
            self.state.theater,
        );
    }
}

fn log_rejection(request: &str, result: Result<(), HostRejection>) {
    if let Err(err) = result {
        warn!(request, %err, "Host rejected view mode change");
    }
}
