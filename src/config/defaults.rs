// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Thumbnails**: Bucket width, image size and naming shared by the
//!   generator and the player
//! - **Volume**: Slider bounds and step
//! - **Playback Speed**: Speed cycle bounds
//! - **Generator**: Download and transcoder defaults

// ==========================================================================
// Thumbnail Defaults
// ==========================================================================

/// Seconds of video covered by one preview thumbnail.
pub const DEFAULT_THUMBNAIL_INTERVAL_SECS: u32 = 5;

/// Minimum thumbnail interval in seconds.
pub const MIN_THUMBNAIL_INTERVAL_SECS: u32 = 1;

/// Maximum thumbnail interval in seconds.
pub const MAX_THUMBNAIL_INTERVAL_SECS: u32 = 600;

/// Thumbnail width in pixels.
pub const DEFAULT_THUMBNAIL_WIDTH: u32 = 320;

/// Thumbnail height in pixels.
pub const DEFAULT_THUMBNAIL_HEIGHT: u32 = 180;

/// File name prefix of every thumbnail (`<prefix>-<index>.jpg`).
pub const DEFAULT_THUMBNAIL_PREFIX: &str = "thumbnail";

/// Thumbnail file extension.
pub const THUMBNAIL_EXTENSION: &str = "jpg";

/// Directory the thumbnails are written to and served from.
pub const DEFAULT_THUMBNAIL_DIR: &str = "previewImgs";

// ==========================================================================
// Volume Defaults
// ==========================================================================

/// Volume when a player is mounted (full volume).
pub const DEFAULT_VOLUME: f64 = 1.0;

/// Minimum volume level.
pub const MIN_VOLUME: f64 = 0.0;

/// Maximum volume level.
pub const MAX_VOLUME: f64 = 1.0;

/// Volume slider step (5%).
pub const VOLUME_STEP: f64 = 0.05;

/// Volume at or above which the level bucket is "high".
pub const HIGH_VOLUME_THRESHOLD: f64 = 0.5;

// ==========================================================================
// Playback Speed Defaults
// ==========================================================================

/// Normal playback speed.
pub const DEFAULT_PLAYBACK_SPEED: f64 = 1.0;

/// Slowest speed of the cycle, also the wrap target.
pub const MIN_PLAYBACK_SPEED: f64 = 0.25;

/// Fastest speed of the cycle.
pub const MAX_PLAYBACK_SPEED: f64 = 2.0;

/// Increment applied by one speed cycle step.
pub const PLAYBACK_SPEED_STEP: f64 = 0.25;

// ==========================================================================
// Generator Defaults
// ==========================================================================

/// Transcoder executable looked up on `PATH`.
pub const DEFAULT_FFMPEG_BINARY: &str = "ffmpeg";

/// Where a downloaded source video is stored.
pub const DEFAULT_DOWNLOAD_PATH: &str = "downloadedVideo.mp4";

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_THUMBNAIL_INTERVAL_SECS > 0);
    assert!(DEFAULT_THUMBNAIL_INTERVAL_SECS >= MIN_THUMBNAIL_INTERVAL_SECS);
    assert!(DEFAULT_THUMBNAIL_INTERVAL_SECS <= MAX_THUMBNAIL_INTERVAL_SECS);
    assert!(DEFAULT_THUMBNAIL_WIDTH > 0);
    assert!(DEFAULT_THUMBNAIL_HEIGHT > 0);

    assert!(MIN_VOLUME < MAX_VOLUME);
    assert!(DEFAULT_VOLUME >= MIN_VOLUME);
    assert!(DEFAULT_VOLUME <= MAX_VOLUME);
    assert!(HIGH_VOLUME_THRESHOLD > MIN_VOLUME);
    assert!(HIGH_VOLUME_THRESHOLD < MAX_VOLUME);
    assert!(VOLUME_STEP > 0.0);

    assert!(MIN_PLAYBACK_SPEED > 0.0);
    assert!(MIN_PLAYBACK_SPEED < MAX_PLAYBACK_SPEED);
    assert!(DEFAULT_PLAYBACK_SPEED >= MIN_PLAYBACK_SPEED);
    assert!(DEFAULT_PLAYBACK_SPEED <= MAX_PLAYBACK_SPEED);
    assert!(PLAYBACK_SPEED_STEP > 0.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumbnail_defaults_match_generator_contract() {
        assert_eq!(DEFAULT_THUMBNAIL_INTERVAL_SECS, 5);
        assert_eq!(DEFAULT_THUMBNAIL_WIDTH, 320);
        assert_eq!(DEFAULT_THUMBNAIL_HEIGHT, 180);
        assert_eq!(DEFAULT_THUMBNAIL_PREFIX, "thumbnail");
    }

    #[test]
    fn speed_cycle_has_eight_steps() {
        let steps = (MAX_PLAYBACK_SPEED - MIN_PLAYBACK_SPEED) / PLAYBACK_SPEED_STEP + 1.0;
        assert_eq!(steps, 8.0);
    }

    #[test]
    fn volume_step_divides_range() {
        let steps = (MAX_VOLUME - MIN_VOLUME) / VOLUME_STEP;
        assert!((steps - steps.round()).abs() < 1e-9);
    }
}
