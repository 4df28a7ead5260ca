// SPDX-License-Identifier: MPL-2.0
//! Source duration probing with `FFmpeg` libraries.
//!
//! Only compiled with the `ffmpeg-probe` feature. Reads container metadata
//! without decoding frames.

use std::path::Path;
use std::sync::Once;

use crate::error::{Error, Result};

/// Static flag to ensure FFmpeg is initialized only once.
static FFMPEG_INIT: Once = Once::new();

/// Initialize FFmpeg with its log level lowered to errors.
pub fn init_ffmpeg() -> Result<()> {
    let mut init_result: Result<()> = Ok(());

    FFMPEG_INIT.call_once(|| {
        if let Err(e) = ffmpeg_next::init() {
            init_result = Err(Error::Probe(format!("FFmpeg initialization failed: {e}")));
            return;
        }

        // SAFETY: av_log_set_level is thread-safe and only affects logging
        unsafe {
            ffmpeg_next::ffi::av_log_set_level(ffmpeg_next::ffi::AV_LOG_ERROR);
        }
    });

    init_result
}

/// Duration of the best video stream in seconds.
///
/// Falls back to the container duration when the stream does not carry one.
///
/// # Errors
///
/// Returns [`Error::Probe`] if the file cannot be opened, has no video
/// stream, or reports no duration.
pub fn probe_duration<P: AsRef<Path>>(path: P) -> Result<f64> {
    init_ffmpeg()?;

    let ictx = ffmpeg_next::format::input(&path)
        .map_err(|e| Error::Probe(format!("Failed to open video file: {e}")))?;

    let video_stream = ictx
        .streams()
        .best(ffmpeg_next::media::Type::Video)
        .ok_or_else(|| Error::Probe("No video stream found".to_string()))?;

    let duration_secs = if video_stream.duration() > 0 {
        let time_base = video_stream.time_base();
        video_stream.duration() as f64 * f64::from(time_base.numerator())
            / f64::from(time_base.denominator())
    } else if ictx.duration() > 0 {
        ictx.duration() as f64 / f64::from(ffmpeg_next::ffi::AV_TIME_BASE)
    } else {
        return Err(Error::Probe("Video reports no duration".to_string()));
    };

    Ok(duration_secs)
}
