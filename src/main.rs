// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use std::process::ExitCode;

use iced_reel::config::{self, Config};
use iced_reel::domain::video::ThumbnailSet;
use iced_reel::error::{Error, Result};
use iced_reel::media::{download_video, generate_thumbnails, ThumbnailJob};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: iced_reel [OPTIONS]

Downloads a video and renders preview thumbnails with ffmpeg.

Options:
  --url URL          Download the source video first
  --input FILE       Use a local source video
  --output DIR       Thumbnail directory (overrides [thumbnails] dir)
  --interval SECS    Seconds per thumbnail (overrides [thumbnails] interval_secs)
  --config FILE      Read settings from FILE instead of the config directory
  --preview          Open the scrub preview window for the thumbnail directory
  --duration SECS    Video length for --preview
  -h, --help         Print this help
";

struct Args {
    url: Option<String>,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    interval: Option<u32>,
    config: Option<PathBuf>,
    preview: bool,
    duration: Option<f64>,
}

fn parse_args() -> std::result::Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let parsed = Args {
        url: args.opt_value_from_str("--url")?,
        input: args.opt_value_from_str("--input")?,
        output: args.opt_value_from_str("--output")?,
        interval: args.opt_value_from_str("--interval")?,
        config: args.opt_value_from_str("--config")?,
        preview: args.contains("--preview"),
        duration: args.opt_value_from_fn("--duration", parse_duration)?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        return Err(pico_args::Error::ArgumentParsingFailed {
            cause: format!("unexpected arguments: {remaining:?}"),
        });
    }
    Ok(Some(parsed))
}

fn parse_duration(value: &str) -> std::result::Result<f64, String> {
    let secs: f64 = value.parse().map_err(|err| format!("{err}"))?;
    if secs.is_finite() && secs > 0.0 {
        Ok(secs)
    } else {
        Err(format!("duration must be a positive number of seconds, got {value}"))
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<(Config, Option<String>)> {
    match path {
        Some(path) => config::load_from_path(path).map(|config| (config, None)),
        None => Ok(config::load()),
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{err}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    let (mut config, config_warning) = match load_config(args.config.as_ref()) {
        Ok(loaded) => loaded,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config.logging.level);
    if let Some(warning) = config_warning {
        warn!("{warning}");
    }

    if let Some(output) = args.output.clone() {
        config.thumbnails.dir = output;
    }
    if let Some(interval) = args.interval {
        config.thumbnails.interval_secs = interval;
    }
    if let Some(url) = args.url.clone() {
        config.generator.source_url = Some(url);
    }

    let outcome = if args.preview {
        run_preview(&config, &args)
    } else {
        run_generator(&config, args.input)
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run_generator(config: &Config, input: Option<PathBuf>) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let source = match (&config.generator.source_url, input) {
            (Some(url), _) => {
                let destination = &config.generator.download_path;
                let mut next_report = 0.1_f32;
                download_video(url, destination, |progress| {
                    if progress >= next_report {
                        info!(percent = (progress * 100.0) as u32, "Download progress");
                        next_report += 0.1;
                    }
                })
                .await?;
                destination.clone()
            }
            (None, Some(input)) => input,
            (None, None) => {
                return Err(Error::Config(
                    "no source video: pass --url, --input or set [generator] source_url"
                        .to_string(),
                ));
            }
        };

        let job = ThumbnailJob::from_config(&source, &config.thumbnails, &config.generator);
        log_expected_count(&job);
        let count = generate_thumbnails(&job).await?;
        info!(count, dir = %job.set.dir().display(), "Done");
        Ok(())
    })
}

#[cfg(feature = "ffmpeg-probe")]
fn log_expected_count(job: &ThumbnailJob) {
    match iced_reel::media::probe::probe_duration(&job.input) {
        Ok(duration) => info!(
            duration_secs = duration,
            expected = job.set.expected_count(duration),
            "Probed source video"
        ),
        Err(err) => warn!(%err, "Could not probe source duration"),
    }
}

#[cfg(not(feature = "ffmpeg-probe"))]
fn log_expected_count(_job: &ThumbnailJob) {}

fn run_preview(config: &Config, args: &Args) -> Result<()> {
    let duration_secs = preview_duration(config, args)?;
    let flags = iced_reel::app::Flags {
        thumbnails: ThumbnailSet::from_config(&config.thumbnails),
        duration_secs,
        player: config.player.clone(),
    };
    iced_reel::app::run(flags).map_err(|e| Error::Io(format!("Preview window failed: {e}")))
}

fn preview_duration(config: &Config, args: &Args) -> Result<f64> {
    if let Some(duration) = args.duration {
        return Ok(duration);
    }

    #[cfg(feature = "ffmpeg-probe")]
    {
        let source = args
            .input
            .clone()
            .unwrap_or_else(|| config.generator.download_path.clone());
        iced_reel::media::probe::probe_duration(source)
    }

    #[cfg(not(feature = "ffmpeg-probe"))]
    {
        let _ = config;
        Err(Error::Config(
            "--preview needs --duration SECS (or the ffmpeg-probe feature)".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_duration_accepts_positive_seconds() {
        assert_eq!(parse_duration("120"), Ok(120.0));
        assert_eq!(parse_duration("0.5"), Ok(0.5));
    }

    #[test]
    fn parse_duration_rejects_non_positive_and_non_finite() {
        assert!(parse_duration("0").is_err());
        assert!(parse_duration("-5").is_err());
        assert!(parse_duration("inf").is_err());
        assert!(parse_duration("NaN").is_err());
        assert!(parse_duration("abc").is_err());
    }
}
