// SPDX-License-Identifier: MPL-2.0
//! `iced_reel` is the interaction core of a custom video player plus an
//! offline preview thumbnail generator.
//!
//! The player side mirrors a host media element into UI state: play/pause,
//! a scrub bar with thumbnail previews, volume, playback speed, captions,
//! and fullscreen, theater and mini-player modes. The tool side downloads a
//! video and renders one preview image per time bucket with `ffmpeg`.
//!
//! # Layers
//!
//! - [`domain`]: pure player values and the thumbnail naming convention
//! - [`application`]: the [`MediaElement`](application::port::MediaElement) port
//! - [`infrastructure`]: adapters implementing the port
//! - [`player`]: the controller and its derived state
//! - [`ui`] and [`app`]: iced controls and the preview window
//! - [`media`]: download and thumbnail generation

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod media;
pub mod player;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
