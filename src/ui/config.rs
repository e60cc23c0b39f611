//! # Configuration
//!
//! Optional user configuration read from `~/.config/valentine/config.json`
//! (or the file given with `--config`).
//!
//! ## Overview
//!
//! The [`Config`] struct is deserialized from a JSON file in the user's XDG
//! config directory. Every field is optional and a missing file means
//! defaults. The file is only ever read: the page keeps no state between
//! runs.
//!
//! ## File Location
//!
//! ```text
//! ~/.config/valentine/config.json
//! ```
//!
//! The `directories` crate is used to resolve the platform-appropriate config
//! directory.
//!
//! ## Example
//!
//! ```json
//! {
//!   "theme": "Rose Night",
//!   "threshold": 160.0,
//!   "image_path": "/srv/valentine/us.jpg",
//!   "message": "Love you, my munchkin!"
//! }
//! ```

use crate::ui::avoidance::{CellMetrics, CursorAvoidance, DEFAULT_THRESHOLD};
use crate::ui::photo::DEFAULT_IMAGE_PATH;
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Message shown in the accept modal unless configured otherwise.
pub const DEFAULT_MESSAGE: &str = "Love you, my munchkin!";

/// User configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// The name of the selected theme (must match a built-in theme name).
    #[serde(default = "default_theme_name")]
    pub theme: String,

    /// Avoidance radius in virtual pixels.
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Photo shown after saying yes.
    #[serde(default = "default_image_path")]
    pub image_path: PathBuf,

    /// Message shown under the photo.
    #[serde(default = "default_message")]
    pub message: String,

    /// Width of one terminal cell in virtual pixels.
    #[serde(default = "default_cell_width")]
    pub cell_width: f64,

    /// Height of one terminal cell in virtual pixels.
    #[serde(default = "default_cell_height")]
    pub cell_height: f64,
}

fn default_theme_name() -> String {
    "Rose".to_string()
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

fn default_image_path() -> PathBuf {
    PathBuf::from(DEFAULT_IMAGE_PATH)
}

fn default_message() -> String {
    DEFAULT_MESSAGE.to_string()
}

fn default_cell_width() -> f64 {
    CellMetrics::default().width
}

fn default_cell_height() -> f64 {
    CellMetrics::default().height
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
            threshold: default_threshold(),
            image_path: default_image_path(),
            message: default_message(),
            cell_width: default_cell_width(),
            cell_height: default_cell_height(),
        }
    }
}

impl Config {
    /// Load configuration from the platform config directory. Returns
    /// `Config::default()` if the file does not exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from a specific path. Returns `Config::default()` if
    /// the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Reject values that would make the page misbehave.
    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            bail!(
                "Invalid threshold {}: must be a finite, non-negative number",
                self.threshold
            );
        }
        for (name, value) in [
            ("cell_width", self.cell_width),
            ("cell_height", self.cell_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                bail!("Invalid {name} {value}: must be a finite, positive number");
            }
        }
        Ok(())
    }

    /// Build the avoidance controller described by this configuration.
    pub fn avoidance(&self) -> CursorAvoidance {
        CursorAvoidance::new(
            self.threshold,
            CellMetrics::new(self.cell_width, self.cell_height),
        )
    }

    /// Return the path to the config file.
    fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "valentine")
            .context("Could not determine config directory")?;
        Ok(dirs.config_dir().join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme, "Rose");
        assert_eq!(config.threshold, 140.0);
        assert_eq!(config.image_path, PathBuf::from("valentines-photo.jpg"));
        assert_eq!(config.message, "Love you, my munchkin!");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_empty_uses_defaults() {
        let config: Config = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(config.theme, "Rose");
        assert_eq!(config.cell_width, 8.0);
        assert_eq!(config.cell_height, 16.0);
    }

    #[test]
    fn test_deserialize_partial() {
        let json = r#"{"theme": "Rose Night", "threshold": 99.5}"#;
        let config: Config = serde_json::from_str(json).expect("deserialize");
        assert_eq!(config.theme, "Rose Night");
        assert_eq!(config.threshold, 99.5);
        assert_eq!(config.message, DEFAULT_MESSAGE);
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let config_path = temp_dir.path().join("config.json");
        fs::write(
            &config_path,
            r#"{"image_path": "/tmp/us.png", "message": "Hi"}"#,
        )
        .expect("write");

        let loaded = Config::load_from(&config_path).expect("load_from");
        assert_eq!(loaded.image_path, PathBuf::from("/tmp/us.png"));
        assert_eq!(loaded.message, "Hi");
    }

    #[test]
    fn test_load_from_missing_file_returns_default() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let config_path = temp_dir.path().join("does_not_exist.json");

        let loaded = Config::load_from(&config_path).expect("load_from");
        assert_eq!(loaded.theme, "Rose");
    }

    #[test]
    fn test_load_from_invalid_json_errors() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let config_path = temp_dir.path().join("config.json");
        fs::write(&config_path, "{ not json").expect("write");

        let err = Config::load_from(&config_path).expect_err("should fail");
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_deny_unknown_fields() {
        let json = r#"{"theme": "Rose", "unknown_field": true}"#;
        let result: Result<Config, _> = serde_json::from_str(json);
        assert!(result.is_err(), "should reject unknown fields");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config {
            threshold: -1.0,
            ..Config::default()
        };
        assert!(config.validate().is_err());

        config.threshold = f64::NAN;
        assert!(config.validate().is_err());

        config.threshold = 140.0;
        config.cell_height = 0.0;
        let err = config.validate().expect_err("zero cell height");
        assert!(err.to_string().contains("cell_height"));
    }

    #[test]
    fn test_avoidance_uses_configured_values() {
        let config = Config {
            threshold: 50.0,
            cell_width: 10.0,
            cell_height: 20.0,
            ..Config::default()
        };
        let avoidance = config.avoidance();
        assert_eq!(avoidance.threshold(), 50.0);
        assert_eq!(avoidance.metrics(), CellMetrics::new(10.0, 20.0));
    }
}
