// SPDX-License-Identifier: MPL-2.0
//! Video playback newtypes.
//!
//! This module provides type-safe wrappers for player values,
//! ensuring they are always within valid ranges.

use crate::config::{
    DEFAULT_PLAYBACK_SPEED, DEFAULT_VOLUME, MAX_PLAYBACK_SPEED, MAX_VOLUME, MIN_PLAYBACK_SPEED,
    MIN_VOLUME, PLAYBACK_SPEED_STEP,
};

// =============================================================================
// Fraction
// =============================================================================

/// Position along the timeline, guaranteed to be within `[0.0, 1.0]`.
///
/// `NaN` collapses to `0.0`, so a fraction derived from an unknown duration
/// is always safe to render.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Fraction(f64);

impl Fraction {
    pub const ZERO: Self = Self(0.0);
    pub const ONE: Self = Self(1.0);

    /// Creates a new fraction, clamping to `[0.0, 1.0]`.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            Self::ZERO
        } else {
            Self(value.clamp(0.0, 1.0))
        }
    }

    /// `position / duration`, or zero when the duration is not usable yet.
    #[must_use]
    pub fn of(position_secs: f64, duration_secs: f64) -> Self {
        if is_known_duration(duration_secs) {
            Self::new(position_secs / duration_secs)
        } else {
            Self::ZERO
        }
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

/// Returns true once the media element reports a finite, positive duration.
#[must_use]
pub fn is_known_duration(duration_secs: f64) -> bool {
    duration_secs.is_finite() && duration_secs > 0.0
}

// =============================================================================
// Volume
// =============================================================================

/// Volume level, guaranteed to be within valid range (0.0–1.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume(f64);

impl Volume {
    /// Creates a new volume level, clamping to valid range.
    #[must_use]
    pub fn new(volume: f64) -> Self {
        if volume.is_nan() {
            Self(MIN_VOLUME)
        } else {
            Self(volume.clamp(MIN_VOLUME, MAX_VOLUME))
        }
    }

    /// Returns the volume value as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns true if the volume is exactly zero (slider pulled all the way down).
    #[must_use]
    pub fn is_silent(self) -> bool {
        self.0 == 0.0
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(DEFAULT_VOLUME)
    }
}

// =============================================================================
// PlaybackSpeed
// =============================================================================

/// Playback rate on the fixed speed cycle.
///
/// Cycling adds a quarter step and wraps back to the slowest speed once the
/// result exceeds the fastest one:
/// `0.25 → 0.5 → 0.75 → 1.0 → 1.25 → 1.5 → 1.75 → 2.0 → 0.25`.
///
/// # Example
///
/// ```
/// use iced_reel::domain::video::PlaybackSpeed;
///
/// let speed = PlaybackSpeed::new(2.0);
/// assert_eq!(speed.cycle().value(), 0.25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackSpeed(f64);

impl PlaybackSpeed {
    /// Wraps a rate reported by the media element.
    ///
    /// Non-positive or non-finite rates fall back to normal speed.
    #[must_use]
    pub fn new(speed: f64) -> Self {
        if speed.is_finite() && speed > 0.0 {
            Self(speed)
        } else {
            Self(DEFAULT_PLAYBACK_SPEED)
        }
    }

    /// Returns the speed value as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns the next speed on the cycle.
    #[must_use]
    pub fn cycle(self) -> Self {
        let next = self.0 + PLAYBACK_SPEED_STEP;
        if next > MAX_PLAYBACK_SPEED {
            Self(MIN_PLAYBACK_SPEED)
        } else {
            Self(next)
        }
    }

    /// Label shown on the speed button (`1x`, `0.25x`, `1.5x`).
    #[must_use]
    pub fn label(self) -> String {
        format!("{}x", self.0)
    }
}

impl Default for PlaybackSpeed {
    fn default() -> Self {
        Self(DEFAULT_PLAYBACK_SPEED)
    }
}

// =============================================================================
// Tests
// =============================================================================
