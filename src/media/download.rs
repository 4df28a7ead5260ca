// SPDX-License-Identifier: MPL-2.0
//! Plain HTTP(S) download of the source video.
//!
//! One GET, streamed to disk. No retries and no checksum; a failed transfer
//! removes whatever was written so far on a best-effort basis.

use std::io::Write;
use std::path::Path;

use futures_util::StreamExt;
use tracing::{info, warn};

use crate::error::{Error, Result};

const USER_AGENT: &str = concat!("IcedReel/", env!("CARGO_PKG_VERSION"));

/// Downloads `url` into `destination`, creating parent directories.
///
/// `progress` receives values in `[0.0, 1.0]` when the server reports a
/// content length. Returns the number of bytes written.
///
/// # Errors
///
/// Returns [`Error::Download`] for network failures and non-success statuses,
/// and [`Error::Io`] if the file cannot be written.
pub async fn download_video(
    url: &str,
    destination: &Path,
    progress: impl FnMut(f32) + Send,
) -> Result<u64> {
    info!(url, destination = %destination.display(), "Downloading video");

    match stream_to_file(url, destination, progress).await {
        Ok(bytes) => {
            info!(bytes, "Video downloaded");
            Ok(bytes)
        }
        Err(err) => {
            // Fire and forget; the file may not exist yet
            let _ = std::fs::remove_file(destination);
            warn!(%err, "Download failed");
            Err(err)
        }
    }
}

async fn stream_to_file(
    url: &str,
    destination: &Path,
    mut progress: impl FnMut(f32) + Send,
) -> Result<u64> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .build()?;

    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(Error::Download(format!(
            "HTTP status: {}",
            response.status()
        )));
    }

    let total_size = response.content_length().unwrap_or(0);

    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut file = std::fs::File::create(destination)?;
    let mut downloaded: u64 = 0;
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk)?;
        downloaded += chunk.len() as u64;

        if total_size > 0 {
            progress(downloaded as f32 / total_size as f32);
        }
    }
    file.flush()?;

    Ok(downloaded)
}
