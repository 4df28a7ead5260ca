// SPDX-License-Identifier: MPL-2.0
//! Derived display states for the player chrome.

use crate::config::HIGH_VOLUME_THRESHOLD;

/// Volume icon bucket derived from the element's volume and mute flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VolumeLevel {
    Muted,
    Low,
    #[default]
    High,
}

impl VolumeLevel {
    /// Buckets a raw volume. Muted wins regardless of the numeric volume.
    #[must_use]
    pub fn from_volume(volume: f64, muted: bool) -> Self {
        if muted || volume <= 0.0 {
            Self::Muted
        } else if volume >= HIGH_VOLUME_THRESHOLD {
            Self::High
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub fn is_muted(self) -> bool {
        matches!(self, Self::Muted)
    }
}

/// Layout the view renders the player in.
///
/// Fullscreen and mini-player are owned by the host platform and only
/// mirrored here; theater is a purely local layout choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    #[default]
    Normal,
    Theater,
    MiniPlayer,
    Fullscreen,
}

impl UiMode {
    /// Resolves the visible mode. Host-owned modes take precedence over theater.
    #[must_use]
    pub fn resolve(fullscreen: bool, picture_in_picture: bool, theater: bool) -> Self {
        if fullscreen {
            Self::Fullscreen
        } else if picture_in_picture {
            Self::MiniPlayer
        } else if theater {
            Self::Theater
        } else {
            Self::Normal
        }
    }
}
