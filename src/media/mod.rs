// SPDX-License-Identifier: MPL-2.0
//! Offline media tooling for the thumbnail generator.
//!
//! - [`download`]: fetch the source video over HTTP(S)
//! - [`thumbnails`]: run `ffmpeg` to emit one preview image per time bucket
//! - `probe` (feature `ffmpeg-probe`): read the source duration up front

pub mod download;
#[cfg(feature = "ffmpeg-probe")]
pub mod probe;
pub mod thumbnails;

// Re-export commonly used types
pub use download::download_video;
pub use thumbnails::{count_thumbnails, generate_thumbnails, prepare_output_dir, ThumbnailJob};
