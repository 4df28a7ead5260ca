// SPDX-License-Identifier: MPL-2.0
//! Domain layer - player values and rules with no external crate dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! Bounds come from [`crate::config::defaults`] so the generator and the player
//! share one set of constants.
//!
//! # Modules
//!
//! - [`video`]: Player types ([`Fraction`](video::Fraction),
//!   [`PlaybackSpeed`](video::PlaybackSpeed), [`VolumeLevel`](video::VolumeLevel),
//!   [`UiMode`](video::UiMode), [`ThumbnailSet`](video::ThumbnailSet))

pub mod video;
