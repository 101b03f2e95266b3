//! Configuration file management for ecgview.
//!
//! Settings live in `~/.config/ecgview/ecgview.toml`. Every field has a default, so
//! a config containing only `config_version` is valid.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::player::viewport::{DEFAULT_GRID_LINES, DEFAULT_HEIGHT, DEFAULT_WINDOW};
use crate::player::{PlayerError, Viewport};

/// Where the sample document is read from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourceConfig {
    /// Local path or http(s) URL of the ECG JSON document
    #[serde(default = "default_location")]
    pub location: String,
}

fn default_location() -> String {
    "ecgData.json".to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            location: default_location(),
        }
    }
}

/// Chart geometry in samples and chart units.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewportConfig {
    /// Number of samples visible at once
    #[serde(default = "default_window")]
    pub window: usize,
    /// Height of the chart; samples are scaled into `0..height`
    #[serde(default = "default_height")]
    pub height: f64,
    /// Number of horizontal grid lines
    #[serde(default = "default_grid_lines")]
    pub grid_lines: usize,
}

fn default_window() -> usize {
    DEFAULT_WINDOW
}

fn default_height() -> f64 {
    DEFAULT_HEIGHT
}

fn default_grid_lines() -> usize {
    DEFAULT_GRID_LINES
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            window: default_window(),
            height: default_height(),
            grid_lines: default_grid_lines(),
        }
    }
}

impl ViewportConfig {
    /// Validates the configured geometry.
    pub fn to_viewport(&self) -> Result<Viewport, PlayerError> {
        Viewport::new(self.window, self.height, self.grid_lines)
    }
}

/// Animation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaybackConfig {
    /// Frames (and therefore samples) advanced per second
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u32,
    /// Start scrolling as soon as the samples are loaded
    #[serde(default)]
    pub autostart: bool,
}

fn default_frame_rate() -> u32 {
    60
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            frame_rate: default_frame_rate(),
            autostart: false,
        }
    }
}

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EcgConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub viewport: ViewportConfig,
    #[serde(default)]
    pub playback: PlaybackConfig,
}

impl EcgConfig {
    /// Loads configuration from the user's config directory.
    ///
    /// # Errors
    /// - If the config directory cannot be determined
    /// - If the config file cannot be read
    /// - If the TOML is malformed
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let config_path = config_path()?;
        let config_content = fs::read_to_string(&config_path)?;
        Ok(Self::from_toml(&config_content)?)
    }

    /// Parses configuration text. The `config_version` key is ignored here.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Path of the config file. Creates the parent directory if missing.
///
/// # Errors
/// - If the home directory cannot be determined
/// - If the config directory cannot be created
pub fn config_path() -> Result<PathBuf, std::io::Error> {
    let home = dirs::home_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not find home directory",
        )
    })?;
    let config_dir = home.join(".config").join("ecgview");
    fs::create_dir_all(&config_dir)?;
    Ok(config_dir.join("ecgview.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_config() {
        let config = EcgConfig::from_toml(r#"config_version = "0.1.0""#).unwrap();
        assert_eq!(config, EcgConfig::default());
        assert_eq!(config.viewport.to_viewport().unwrap(), Viewport::default());
        assert_eq!(config.playback.frame_rate, 60);
        assert!(!config.playback.autostart);
    }

    #[test]
    fn test_partial_sections() {
        let config = EcgConfig::from_toml(
            r#"
            [source]
            location = "https://example.com/ecgData.json"

            [viewport]
            window = 400

            [playback]
            autostart = true
            "#,
        )
        .unwrap();
        assert_eq!(config.source.location, "https://example.com/ecgData.json");
        assert_eq!(config.viewport.window, 400);
        assert_eq!(config.viewport.height, 550.0);
        assert!(config.playback.autostart);
        assert_eq!(config.playback.frame_rate, 60);
    }

    #[test]
    fn test_invalid_viewport_is_rejected() {
        let config = EcgConfig::from_toml("[viewport]\nwindow = 0\n").unwrap();
        assert!(config.viewport.to_viewport().is_err());
    }

    #[test]
    fn test_embedded_default_config_parses() {
        let config = EcgConfig::from_toml(include_str!("../../environments/ecgview.toml")).unwrap();
        assert_eq!(config, EcgConfig::default());
    }

    #[test]
    fn test_round_trip() {
        let mut config = EcgConfig::default();
        config.playback.frame_rate = 30;
        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(EcgConfig::from_toml(&text).unwrap(), config);
    }
}
