// SPDX-License-Identifier: MPL-2.0
//! Preview thumbnail generation through the `ffmpeg` command line.
//!
//! Frames are sampled every `interval_secs`, scaled, and written as
//! `<dir>/<prefix>-<index>.jpg` with indices from 1, the layout
//! [`ThumbnailSet`] reads back.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::config::{GeneratorConfig, ThumbnailConfig};
use crate::domain::video::ThumbnailSet;
use crate::error::{Error, Result};

/// Everything one transcoder run needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbnailJob {
    pub input: PathBuf,
    pub set: ThumbnailSet,
    pub width: u32,
    pub height: u32,
    pub ffmpeg_binary: String,
}

impl ThumbnailJob {
    #[must_use]
    pub fn from_config(
        input: impl Into<PathBuf>,
        thumbnails: &ThumbnailConfig,
        generator: &GeneratorConfig,
    ) -> Self {
        Self {
            input: input.into(),
            set: ThumbnailSet::from_config(thumbnails),
            width: thumbnails.width,
            height: thumbnails.height,
            ffmpeg_binary: generator.ffmpeg_binary.clone(),
        }
    }

    /// Arguments handed to the transcoder.
    ///
    /// `-y` lets a rerun overwrite thumbnails from a previous run instead of
    /// waiting on an overwrite prompt.
    #[must_use]
    pub fn ffmpeg_args(&self) -> Vec<OsString> {
        vec![
            OsString::from("-y"),
            OsString::from("-i"),
            self.input.clone().into_os_string(),
            OsString::from("-vf"),
            OsString::from(format!(
                "fps=1/{},scale={}:{}",
                self.set.interval_secs(),
                self.width,
                self.height
            )),
            self.set.output_pattern().into_os_string(),
        ]
    }
}

/// Creates the output directory if absent. Returns true if it was created.
///
/// # Errors
///
/// Returns [`Error::Io`] if the directory cannot be created.
pub fn prepare_output_dir(dir: &Path) -> Result<bool> {
    if dir.is_dir() {
        info!(dir = %dir.display(), "Output directory already exists");
        return Ok(false);
    }
    std::fs::create_dir_all(dir)?;
    info!(dir = %dir.display(), "Created output directory");
    Ok(true)
}

/// Runs the transcoder and returns how many thumbnails ended up on disk.
///
/// # Errors
///
/// Returns [`Error::Transcode`] if the binary cannot be started or exits with
/// a failure status, and [`Error::Io`] for directory failures.
pub async fn generate_thumbnails(job: &ThumbnailJob) -> Result<usize> {
    prepare_output_dir(job.set.dir())?;

    let args = job.ffmpeg_args();
    debug!(binary = %job.ffmpeg_binary, ?args, "Starting transcoder");

    let output = Command::new(&job.ffmpeg_binary)
        .args(&args)
        .stdin(Stdio::null())
        .output()
        .await
        .map_err(|e| Error::Transcode(format!("failed to run {}: {e}", job.ffmpeg_binary)))?;

    let stderr = String::from_utf8_lossy(&output.stderr);
    for line in stderr.lines().filter(|line| !line.trim().is_empty()) {
        debug!(target: "iced_reel::ffmpeg", "{line}");
    }

    if !output.status.success() {
        let detail = stderr
            .lines()
            .rev()
            .find(|line| !line.trim().is_empty())
            .unwrap_or("no output");
        return Err(Error::Transcode(format!(
            "{} exited with {}: {detail}",
            job.ffmpeg_binary, output.status
        )));
    }

    let count = count_thumbnails(&job.set)?;
    if count == 0 {
        warn!(dir = %job.set.dir().display(), "Transcoder produced no thumbnails");
    } else {
        info!(count, dir = %job.set.dir().display(), "Thumbnails generated");
    }
    Ok(count)
}

/// Counts files in the set's directory that follow its naming convention.
///
/// # Errors
///
/// Returns [`Error::Io`] if the directory cannot be read.
pub fn count_thumbnails(set: &ThumbnailSet) -> Result<usize> {
    let mut count = 0;
    for entry in std::fs::read_dir(set.dir())? {
        let entry = entry?;
        if entry
            .file_name()
            .to_str()
            .is_some_and(|name| set.matches(name))
        {
            count += 1;
        }
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn job(dir: &Path, binary: &str) -> ThumbnailJob {
        ThumbnailJob {
            input: PathBuf::from("downloadedVideo.mp4"),
            set: ThumbnailSet::new(dir, "thumbnail", 5),
            width: 320,
            height: 180,
            ffmpeg_binary: binary.to_string(),
        }
    }

    #[test]
    fn args_sample_scale_and_name_frames() {
        let job = job(Path::new("previewImgs"), "ffmpeg");
        let args: Vec<String> = job
            .ffmpeg_args()
            .into_iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect();

        assert_eq!(
            args,
            vec![
                "-y".to_string(),
                "-i".to_string(),
                "downloadedVideo.mp4".to_string(),
                "-vf".to_string(),
                "fps=1/5,scale=320:180".to_string(),
                PathBuf::from("previewImgs")
                    .join("thumbnail-%d.jpg")
                    .to_string_lossy()
                    .into_owned(),
            ]
        );
    }

    #[test]
    fn job_from_config_uses_both_sections() {
        let thumbnails = ThumbnailConfig {
            interval_secs: 10,
            width: 160,
            height: 90,
            ..ThumbnailConfig::default()
        };
        let generator = GeneratorConfig {
            ffmpeg_binary: "/opt/ffmpeg/bin/ffmpeg".to_string(),
            ..GeneratorConfig::default()
        };
        let job = ThumbnailJob::from_config("in.mp4", &thumbnails, &generator);
        assert_eq!(job.set.interval_secs(), 10);
        assert_eq!(job.width, 160);
        assert_eq!(job.ffmpeg_binary, "/opt/ffmpeg/bin/ffmpeg");
    }

    #[test]
    fn prepare_creates_missing_dir_once() {
        let dir = tempdir().expect("temp dir");
        let out = dir.path().join("client").join("previewImgs");
        assert!(prepare_output_dir(&out).expect("create"));
        assert!(out.is_dir());
        assert!(!prepare_output_dir(&out).expect("exists"));
    }

    #[test]
    fn count_ignores_foreign_files() {
        let dir = tempdir().expect("temp dir");
        for name in ["thumbnail-1.jpg", "thumbnail-2.jpg", "preview1.jpg", "notes.txt"] {
            std::fs::write(dir.path().join(name), b"").expect("write");
        }
        let set = ThumbnailSet::new(dir.path(), "thumbnail", 5);
        assert_eq!(count_thumbnails(&set).expect("count"), 2);
    }

    #[tokio::test]
    async fn missing_binary_is_a_transcode_error() {
        let dir = tempdir().expect("temp dir");
        let job = job(&dir.path().join("out"), "iced-reel-no-such-ffmpeg");
        let err = generate_thumbnails(&job).await.expect_err("spawn fails");
        assert!(matches!(err, Error::Transcode(ref msg) if msg.contains("failed to run")));
        // Directory is still prepared before the transcoder runs
        assert!(dir.path().join("out").is_dir());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn failing_binary_is_a_transcode_error() {
        let dir = tempdir().expect("temp dir");
        let job = job(dir.path(), "false");
        let err = generate_thumbnails(&job).await.expect_err("exit status");
        assert!(matches!(err, Error::Transcode(ref msg) if msg.contains("exited with")));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn successful_run_counts_existing_thumbnails() {
        let dir = tempdir().expect("temp dir");
        std::fs::write(dir.path().join("thumbnail-1.jpg"), b"").expect("write");
        let job = job(dir.path(), "true");
        assert_eq!(generate_thumbnails(&job).await.expect("run"), 1);
    }
}
