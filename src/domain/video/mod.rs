// SPDX-License-Identifier: MPL-2.0
//! Video player domain types.
//!
//! This module contains player value objects and enums that are
//! independent of any presentation or infrastructure concerns.

pub mod newtypes;
pub mod playback;
pub mod thumbnails;
pub mod time_format;

// Re-export commonly used types
pub use newtypes::{is_known_duration, Fraction, PlaybackSpeed, Volume};
pub use playback::{UiMode, VolumeLevel};
pub use thumbnails::ThumbnailSet;
pub use time_format::format_duration;
