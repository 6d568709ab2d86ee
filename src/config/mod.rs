// SPDX-License-Identifier: MPL-2.0
//! Application configuration loaded from a `config.toml` file.
//!
//! # Configuration Sections
//!
//! - `[controls]` - Control bar auto-hide delays
//! - `[metadata]` - Background metadata extraction
//! - `[logging]` - Default `tracing` filter
//!
//! Playback preferences (volume, mute, rate, loop) are not part of this file:
//! they change on every user action and are written through a
//! [`PreferenceStore`](crate::application::port::PreferenceStore) instead.
//!
//! # Examples
//!
//! ```no_run
//! use vidlens::config;
//!
//! let (config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("using default configuration: {key}");
//! }
//! assert!(config.controls.hide_delay().as_millis() > 0);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "config.toml";

/// Warning key returned when an existing config file cannot be parsed.
pub const LOAD_ERROR_WARNING: &str = "config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// Control bar auto-hide settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ControlsConfig {
    /// Delay before hiding after the last pointer activity (milliseconds).
    #[serde(default = "default_hide_delay_ms")]
    pub hide_delay_ms: u64,

    /// Delay before hiding once the pointer leaves the player (milliseconds).
    #[serde(default = "default_leave_hide_delay_ms")]
    pub leave_hide_delay_ms: u64,
}

impl ControlsConfig {
    /// Returns the activity hide delay as a `Duration`.
    #[must_use]
    pub fn hide_delay(&self) -> Duration {
        Duration::from_millis(self.hide_delay_ms)
    }

    /// Returns the pointer-leave hide delay as a `Duration`.
    #[must_use]
    pub fn leave_hide_delay(&self) -> Duration {
        Duration::from_millis(self.leave_hide_delay_ms)
    }
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            hide_delay_ms: DEFAULT_CONTROLS_HIDE_DELAY_MS,
            leave_hide_delay_ms: DEFAULT_CONTROLS_LEAVE_HIDE_DELAY_MS,
        }
    }
}

/// Background metadata extraction settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetadataConfig {
    /// Whether loaded files are analyzed in the background.
    #[serde(default = "default_metadata_enabled")]
    pub enabled: bool,

    /// Path or name of the `mediainfo` executable.
    #[serde(default = "default_mediainfo_path")]
    pub mediainfo_path: String,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            enabled: default_metadata_enabled(),
            mediainfo_path: default_mediainfo_path(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Control bar settings.
    #[serde(default)]
    pub controls: ControlsConfig,

    /// Metadata extraction settings.
    #[serde(default)]
    pub metadata: MetadataConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_hide_delay_ms() -> u64 {
    DEFAULT_CONTROLS_HIDE_DELAY_MS
}

fn default_leave_hide_delay_ms() -> u64 {
    DEFAULT_CONTROLS_LEAVE_HIDE_DELAY_MS
}

fn default_metadata_enabled() -> bool {
    true
}

fn default_mediainfo_path() -> String {
    DEFAULT_MEDIAINFO_PATH.to_string()
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

// =============================================================================
// Load / Save
// =============================================================================

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default directory.
///
/// Returns a tuple of (config, optional_warning). A missing file yields the
/// defaults silently; an unreadable one yields the defaults and a warning key.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            return match load_from_path(&path) {
                Ok(config) => (config, None),
                Err(error) => {
                    tracing::warn!(path = %path.display(), %error, "ignoring invalid config file");
                    (Config::default(), Some(LOAD_ERROR_WARNING.to_string()))
                }
            };
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

/// Saves the configuration to the default directory.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.controls.hide_delay(), Duration::from_millis(3000));
        assert_eq!(config.controls.leave_hide_delay(), Duration::from_millis(1000));
        assert!(config.metadata.enabled);
        assert_eq!(config.metadata.mediainfo_path, "mediainfo");
        assert_eq!(config.logging.filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            controls: ControlsConfig {
                hide_delay_ms: 5000,
                leave_hide_delay_ms: 250,
            },
            metadata: MetadataConfig {
                enabled: false,
                mediainfo_path: "/opt/mediainfo/bin/mediainfo".to_string(),
            },
            logging: LoggingConfig {
                filter: "vidlens=debug".to_string(),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("config.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_file_fills_missing_fields_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "[controls]\nhide_delay_ms = 1500\n").expect("write file");

        let loaded = load_from_path(&config_path).expect("partial config should load");
        assert_eq!(loaded.controls.hide_delay_ms, 1500);
        assert_eq!(
            loaded.controls.leave_hide_delay_ms,
            DEFAULT_CONTROLS_LEAVE_HIDE_DELAY_MS
        );
        assert_eq!(loaded.metadata, MetadataConfig::default());
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "not = valid = toml").expect("write file");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[controls\nbroken").expect("write file");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(warning.as_deref(), Some(LOAD_ERROR_WARNING));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        let config = Config {
            controls: ControlsConfig {
                hide_delay_ms: 4000,
                ..ControlsConfig::default()
            },
            ..Config::default()
        };

        save_with_override(&config, Some(base_dir.clone())).expect("save should succeed");
        assert!(base_dir.join(CONFIG_FILE).exists());

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(loaded.controls.hide_delay_ms, 4000);
    }
}
