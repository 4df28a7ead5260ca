// SPDX-License-Identifier: MPL-2.0
//! Pre-rendered preview thumbnails indexed by time bucket.
//!
//! The offline generator emits one image per `interval_secs` of video, named
//! `<dir>/<prefix>-<index>.jpg` with indices starting at 1. This type maps a
//! timeline fraction back onto that naming.

use std::path::{Path, PathBuf};

use crate::config::{ThumbnailConfig, THUMBNAIL_EXTENSION};

use super::newtypes::{is_known_duration, Fraction};

#[derive(Debug, Clone, PartialEq)]
pub struct ThumbnailSet {
    dir: PathBuf,
    prefix: String,
    interval_secs: u32,
}

impl ThumbnailSet {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>, interval_secs: u32) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
            interval_secs: interval_secs.max(1),
        }
    }

    #[must_use]
    pub fn from_config(config: &ThumbnailConfig) -> Self {
        Self::new(&config.dir, &config.prefix, config.interval_secs())
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[must_use]
    pub fn interval_secs(&self) -> u32 {
        self.interval_secs
    }

    /// Bucket index for a timeline position, never below 1.
    ///
    /// Returns `None` while the duration is unknown.
    #[must_use]
    pub fn index_for(&self, fraction: Fraction, duration_secs: f64) -> Option<u32> {
        if !is_known_duration(duration_secs) {
            return None;
        }
        let bucket = (fraction.value() * duration_secs / f64::from(self.interval_secs)).floor();
        // Saturating float-to-int cast; fraction is at most 1.0 so this stays small
        Some((bucket as u32).max(1))
    }

    /// File for a bucket index.
    #[must_use]
    pub fn path_for(&self, index: u32) -> PathBuf {
        self.dir
            .join(format!("{}-{}.{}", self.prefix, index, THUMBNAIL_EXTENSION))
    }

    /// File to show for a timeline position, if the duration is known.
    #[must_use]
    pub fn preview_for(&self, fraction: Fraction, duration_secs: f64) -> Option<PathBuf> {
        self.index_for(fraction, duration_secs)
            .map(|index| self.path_for(index))
    }

    /// `printf`-style output pattern handed to the transcoder.
    #[must_use]
    pub fn output_pattern(&self) -> PathBuf {
        self.dir
            .join(format!("{}-%d.{}", self.prefix, THUMBNAIL_EXTENSION))
    }

    /// Number of thumbnails a video of this length produces.
    #[must_use]
    pub fn expected_count(&self, duration_secs: f64) -> u32 {
        if !is_known_duration(duration_secs) {
            return 0;
        }
        (duration_secs / f64::from(self.interval_secs)).ceil() as u32
    }

    /// Returns true if `file_name` follows the `<prefix>-<index>.jpg` convention.
    #[must_use]
    pub fn matches(&self, file_name: &str) -> bool {
        file_name
            .strip_prefix(self.prefix.as_str())
            .and_then(|rest| rest.strip_prefix('-'))
            .and_then(|rest| rest.strip_suffix(THUMBNAIL_EXTENSION))
            .and_then(|rest| rest.strip_suffix('.'))
            .is_some_and(|index| {
                !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit())
            })
    }
}

impl Default for ThumbnailSet {
    fn default() -> Self {
        Self::from_config(&ThumbnailConfig::default())
    }
}
