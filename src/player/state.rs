// SPDX-License-Identifier: MPL-2.0
//! Derived UI state mirrored from the media element.

use std::path::{Path, PathBuf};

use crate::domain::video::{format_duration, Fraction, PlaybackSpeed, UiMode, VolumeLevel};

use super::scrub::ScrubState;

/// Everything the controls view renders.
///
/// Only the [`Controller`](super::Controller) mutates this. Values that the
/// element owns are updated when its notifications arrive, never ahead of them.
#[derive(Debug, Clone, PartialEq)]
#[allow(clippy::struct_excessive_bools)]
pub struct PlayerState {
    // ═══════════════════════════════════════════════════════════════════════
    // PLAYBACK
    // ═══════════════════════════════════════════════════════════════════════
    pub(super) is_paused: bool,
    pub(super) scrub: ScrubState,
    pub(super) playback_speed: PlaybackSpeed,

    // ═══════════════════════════════════════════════════════════════════════
    // AUDIO
    // ═══════════════════════════════════════════════════════════════════════
    pub(super) volume_level: VolumeLevel,
    /// Raw element volume, shown on the slider even while muted.
    pub(super) volume_slider: f64,

    pub(super) captions_visible: bool,

    // ═══════════════════════════════════════════════════════════════════════
    // TIMELINE
    // ═══════════════════════════════════════════════════════════════════════
    pub(super) current_time_text: String,
    pub(super) total_time_text: String,
    pub(super) progress_fraction: Fraction,
    pub(super) preview_fraction: Fraction,
    pub(super) preview_thumbnail: Option<PathBuf>,
    pub(super) scrub_thumbnail: Option<PathBuf>,

    // ═══════════════════════════════════════════════════════════════════════
    // LAYOUT
    // ═══════════════════════════════════════════════════════════════════════
    pub(super) theater: bool,
    pub(super) ui_mode: UiMode,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            is_paused: true,
            scrub: ScrubState::Idle,
            playback_speed: PlaybackSpeed::default(),
            volume_level: VolumeLevel::default(),
            volume_slider: crate::config::DEFAULT_VOLUME,
            captions_visible: false,
            current_time_text: format_duration(0.0),
            total_time_text: format_duration(0.0),
            progress_fraction: Fraction::ZERO,
            preview_fraction: Fraction::ZERO,
            preview_thumbnail: None,
            scrub_thumbnail: None,
            theater: false,
            ui_mode: UiMode::Normal,
        }
    }
}

impl PlayerState {
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    #[must_use]
    pub fn scrub(&self) -> ScrubState {
        self.scrub
    }

    #[must_use]
    pub fn is_scrubbing(&self) -> bool {
        self.scrub.is_scrubbing()
    }

    #[must_use]
    pub fn playback_speed(&self) -> PlaybackSpeed {
        self.playback_speed
    }

    #[must_use]
    pub fn volume_level(&self) -> VolumeLevel {
        self.volume_level
    }

    #[must_use]
    pub fn volume_slider(&self) -> f64 {
        self.volume_slider
    }

    #[must_use]
    pub fn captions_visible(&self) -> bool {
        self.captions_visible
    }

    #[must_use]
    pub fn current_time_text(&self) -> &str {
        &self.current_time_text
    }

    #[must_use]
    pub fn total_time_text(&self) -> &str {
        &self.total_time_text
    }

    #[must_use]
    pub fn progress_fraction(&self) -> Fraction {
        self.progress_fraction
    }

    #[must_use]
    pub fn preview_fraction(&self) -> Fraction {
        self.preview_fraction
    }

    /// Hover preview image for the current preview fraction.
    #[must_use]
    pub fn preview_thumbnail(&self) -> Option<&Path> {
        self.preview_thumbnail.as_deref()
    }

    /// Large overlay image, only set while scrubbing.
    #[must_use]
    pub fn scrub_thumbnail(&self) -> Option<&Path> {
        self.scrub_thumbnail.as_deref()
    }

    #[must_use]
    pub fn is_theater(&self) -> bool {
        self.theater
    }

    #[must_use]
    pub fn ui_mode(&self) -> UiMode {
        self.ui_mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_paused_and_idle() {
        let state = PlayerState::default();
        assert!(state.is_paused());
        assert!(!state.is_scrubbing());
        assert_eq!(state.current_time_text(), "0:00");
        assert_eq!(state.total_time_text(), "0:00");
        assert_eq!(state.ui_mode(), UiMode::Normal);
        assert!(state.preview_thumbnail().is_none());
    }
}
