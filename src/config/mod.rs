// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, loaded from a `settings.toml`
//! file shared by the player and the thumbnail generator.
//!
//! # Configuration Sections
//!
//! - `[thumbnails]` - Bucket width, image size and naming. The generator writes
//!   with these values and the player reads with them, so both sides always
//!   agree on the preview image convention.
//! - `[player]` - Mount-time player preferences
//! - `[generator]` - Source video and transcoder settings
//! - `[logging]` - Fallback log filter when `RUST_LOG` is unset
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with explicit path
//! 2. Set `ICED_REEL_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_reel::config;
//!
//! let (config, warning) = config::load();
//! if let Some(warning) = warning {
//!     eprintln!("{warning}");
//! }
//! println!("thumbnails every {}s", config.thumbnails.interval_secs());
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Preview thumbnail convention shared by generator and player.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ThumbnailConfig {
    /// Directory holding `<prefix>-<index>.jpg` files.
    #[serde(default = "default_thumbnail_dir")]
    pub dir: PathBuf,

    /// File name prefix.
    #[serde(default = "default_thumbnail_prefix")]
    pub prefix: String,

    /// Seconds of video covered by one thumbnail.
    #[serde(default = "default_thumbnail_interval_secs")]
    pub interval_secs: u32,

    /// Thumbnail width in pixels.
    #[serde(default = "default_thumbnail_width")]
    pub width: u32,

    /// Thumbnail height in pixels.
    #[serde(default = "default_thumbnail_height")]
    pub height: u32,
}

impl ThumbnailConfig {
    /// Bucket width clamped to the supported range.
    #[must_use]
    pub fn interval_secs(&self) -> u32 {
        self.interval_secs
            .clamp(MIN_THUMBNAIL_INTERVAL_SECS, MAX_THUMBNAIL_INTERVAL_SECS)
    }
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self {
            dir: default_thumbnail_dir(),
            prefix: default_thumbnail_prefix(),
            interval_secs: DEFAULT_THUMBNAIL_INTERVAL_SECS,
            width: DEFAULT_THUMBNAIL_WIDTH,
            height: DEFAULT_THUMBNAIL_HEIGHT,
        }
    }
}

/// Player preferences applied when a player is mounted.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PlayerConfig {
    /// Volume pushed to the media element on mount (0.0 to 1.0).
    #[serde(default = "default_volume")]
    pub initial_volume: f64,

    /// Request playback right after mount.
    #[serde(default)]
    pub autoplay: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            initial_volume: DEFAULT_VOLUME,
            autoplay: false,
        }
    }
}

/// Thumbnail generator settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GeneratorConfig {
    /// Video to download before generating thumbnails.
    #[serde(default)]
    pub source_url: Option<String>,

    /// Local file the download is written to.
    #[serde(default = "default_download_path")]
    pub download_path: PathBuf,

    /// Transcoder executable.
    #[serde(default = "default_ffmpeg_binary")]
    pub ffmpeg_binary: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source_url: None,
            download_path: default_download_path(),
            ffmpeg_binary: default_ffmpeg_binary(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub thumbnails: ThumbnailConfig,

    #[serde(default)]
    pub player: PlayerConfig,

    #[serde(default)]
    pub generator: GeneratorConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_thumbnail_dir() -> PathBuf {
    PathBuf::from(DEFAULT_THUMBNAIL_DIR)
}

fn default_thumbnail_prefix() -> String {
    DEFAULT_THUMBNAIL_PREFIX.to_string()
}

fn default_thumbnail_interval_secs() -> u32 {
    DEFAULT_THUMBNAIL_INTERVAL_SECS
}

fn default_thumbnail_width() -> u32 {
    DEFAULT_THUMBNAIL_WIDTH
}

fn default_thumbnail_height() -> u32 {
    DEFAULT_THUMBNAIL_HEIGHT
}

fn default_volume() -> f64 {
    DEFAULT_VOLUME
}

fn default_download_path() -> PathBuf {
    PathBuf::from(DEFAULT_DOWNLOAD_PATH)
}

fn default_ffmpeg_binary() -> String {
    DEFAULT_FFMPEG_BINARY.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!(
                            "ignoring {}: {err}; using default settings",
                            path.display()
                        )),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn load_from_path_reads_every_section() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            r#"
[thumbnails]
dir = "public/previews"
prefix = "frame"
interval_secs = 10
width = 160
height = 90

[player]
initial_volume = 0.4
autoplay = true

[generator]
source_url = "https://example.com/video.mp4"
download_path = "video.mp4"
ffmpeg_binary = "/usr/local/bin/ffmpeg"

[logging]
level = "debug"
"#,
        )
        .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");

        let expected = Config {
            thumbnails: ThumbnailConfig {
                dir: PathBuf::from("public/previews"),
                prefix: "frame".to_string(),
                interval_secs: 10,
                width: 160,
                height: 90,
            },
            player: PlayerConfig {
                initial_volume: 0.4,
                autoplay: true,
            },
            generator: GeneratorConfig {
                source_url: Some("https://example.com/video.mp4".to_string()),
                download_path: PathBuf::from("video.mp4"),
                ffmpeg_binary: "/usr/local/bin/ffmpeg".to_string(),
            },
            logging: LoggingConfig {
                level: "debug".to_string(),
            },
        };
        assert_eq!(loaded, expected);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        assert!(matches!(load_from_path(&config_path), Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_warns_and_falls_back_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[thumbnails\n")
            .expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_missing_file_returns_defaults_silently() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_sections_fill_in_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[thumbnails]\ninterval_secs = 10\n")
            .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.thumbnails.interval_secs, 10);
        assert_eq!(loaded.thumbnails.prefix, DEFAULT_THUMBNAIL_PREFIX);
        assert_eq!(loaded.player, PlayerConfig::default());
        assert_eq!(loaded.generator.ffmpeg_binary, DEFAULT_FFMPEG_BINARY);
    }

    #[test]
    fn interval_is_clamped_to_supported_range() {
        let config = ThumbnailConfig {
            interval_secs: 0,
            ..ThumbnailConfig::default()
        };
        assert_eq!(config.interval_secs(), MIN_THUMBNAIL_INTERVAL_SECS);
    }

    #[test]
    fn load_with_override_reads_settings_file_in_base_dir() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(
            temp_dir.path().join(CONFIG_FILE),
            "[player]\ninitial_volume = 0.25\n",
        )
        .expect("failed to write config");

        let (loaded, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert!(warning.is_none());
        assert_eq!(
            loaded.player,
            PlayerConfig {
                initial_volume: 0.25,
                autoplay: false,
            }
        );
        assert_eq!(loaded.thumbnails, ThumbnailConfig::default());
    }
}
