//! Configuration file support for doodlepad.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/doodlepad/config.toml`. Settings include the starting brush,
//! long-press picker timing and the canvas surface used by the replay shell.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{CanvasConfig, DrawingConfig, LongPressConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "black"
/// default_brush_size = 25
///
/// [long_press]
/// delay_ms = 500
/// period_ms = 500
/// preview_radius = 200.0
///
/// [canvas]
/// width = 1080
/// height = 1920
/// background = "white"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Brush defaults (color, size)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Long-press color picker timing and appearance
    #[serde(default)]
    pub long_press: LongPressConfig,

    /// Canvas surface settings
    #[serde(default)]
    pub canvas: CanvasConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `default_brush_size`: 1 - 100
    /// - `long_press.delay_ms`, `long_press.period_ms`: 50 - 5000
    /// - `long_press.preview_radius`: 10.0 - 1000.0
    /// - `canvas.width`, `canvas.height`: 16 - 8192
    pub fn validate_and_clamp(&mut self) {
        // Brush size: 1 - 100
        if !(1..=100).contains(&self.drawing.default_brush_size) {
            log::warn!(
                "Invalid default_brush_size {}, clamping to 1-100 range",
                self.drawing.default_brush_size
            );
            self.drawing.default_brush_size = self.drawing.default_brush_size.clamp(1, 100);
        }

        if !self.drawing.default_color.is_known() {
            log::warn!(
                "Unknown default_color {:?}, falling back to 'black'",
                self.drawing.default_color
            );
            self.drawing.default_color = ColorSpec::Name("black".to_string());
        }

        // Long-press timing: 50 - 5000 ms
        if !(50..=5000).contains(&self.long_press.delay_ms) {
            log::warn!(
                "Invalid long_press delay_ms {}, clamping to 50-5000 range",
                self.long_press.delay_ms
            );
            self.long_press.delay_ms = self.long_press.delay_ms.clamp(50, 5000);
        }

        if !(50..=5000).contains(&self.long_press.period_ms) {
            log::warn!(
                "Invalid long_press period_ms {}, clamping to 50-5000 range",
                self.long_press.period_ms
            );
            self.long_press.period_ms = self.long_press.period_ms.clamp(50, 5000);
        }

        // Picker radius: 10.0 - 1000.0 (NaN falls back to the default)
        if self.long_press.preview_radius.is_nan() {
            log::warn!("Invalid long_press preview_radius NaN, using 200.0");
            self.long_press.preview_radius = 200.0;
        } else if !(10.0..=1000.0).contains(&self.long_press.preview_radius) {
            log::warn!(
                "Invalid long_press preview_radius {:.1}, clamping to 10.0-1000.0 range",
                self.long_press.preview_radius
            );
            self.long_press.preview_radius = self.long_press.preview_radius.clamp(10.0, 1000.0);
        }

        // Canvas size: 16 - 8192
        if !(16..=8192).contains(&self.canvas.width) {
            log::warn!(
                "Invalid canvas width {}, clamping to 16-8192 range",
                self.canvas.width
            );
            self.canvas.width = self.canvas.width.clamp(16, 8192);
        }

        if !(16..=8192).contains(&self.canvas.height) {
            log::warn!(
                "Invalid canvas height {}, clamping to 16-8192 range",
                self.canvas.height
            );
            self.canvas.height = self.canvas.height.clamp(16, 8192);
        }

        if !self.canvas.background.is_known() {
            log::warn!(
                "Unknown canvas background {:?}, falling back to 'white'",
                self.canvas.background
            );
            self.canvas.background = ColorSpec::Name("white".to_string());
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/doodlepad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("doodlepad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path.
    ///
    /// Unlike [`Config::load`], a missing file is an error. All loaded values
    /// are validated and clamped to acceptable ranges.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the current configuration to `path`.
    ///
    /// Serializes the config to TOML format, creating the parent directory if
    /// it doesn't exist.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory cannot be created
    /// - The config cannot be serialized to TOML
    /// - The file cannot be written
    pub fn save(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Creates a documented default configuration file at `config_path`.
    ///
    /// Writes the example config from `config.example.toml`; used by
    /// `doodlepad --init-config`.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file(config_path: &Path) -> Result<()> {
        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(config_path, default_config)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(())
    }

    /// JSON schema describing the config file, for editor tooling.
    pub fn json_schema() -> Schema {
        schema_for!(Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, WHITE};

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();
        assert_eq!(config.drawing.default_color.to_color(), BLACK);
        assert_eq!(config.drawing.default_brush_size, 25);
        assert_eq!(config.long_press.delay_ms, 500);
        assert_eq!(config.long_press.period_ms, 500);
        assert_eq!(config.long_press.preview_radius, 200.0);
        assert_eq!((config.canvas.width, config.canvas.height), (1080, 1920));
        assert_eq!(config.canvas.background.to_color(), WHITE);
    }

    #[test]
    fn example_file_parses_to_defaults() {
        let config: Config = toml::from_str(include_str!("../../config.example.toml")).unwrap();
        assert_eq!(config.drawing.default_brush_size, 25);
        assert_eq!(config.long_press.delay_ms, 500);
        assert_eq!(config.canvas.background, ColorSpec::Name("white".into()));
    }

    #[test]
    fn partial_sections_fill_in_defaults() {
        let config: Config = toml::from_str(
            r#"
            [drawing]
            default_color = [0, 0, 255]

            [long_press]
            period_ms = 250
            "#,
        )
        .unwrap();

        assert_eq!(config.drawing.default_color, ColorSpec::Rgb([0, 0, 255]));
        assert_eq!(config.drawing.default_brush_size, 25);
        assert_eq!(config.long_press.delay_ms, 500);
        assert_eq!(config.long_press.period_ms, 250);
        assert_eq!(config.canvas.width, 1080);
    }

    #[test]
    fn validate_clamps_out_of_range_values() {
        let mut config = Config::default();
        config.drawing.default_brush_size = 0;
        config.drawing.default_color = ColorSpec::Name("chartreuse".into());
        config.long_press.delay_ms = 10;
        config.long_press.period_ms = 60_000;
        config.long_press.preview_radius = f64::NAN;
        config.canvas.width = 4;
        config.canvas.height = 100_000;

        config.validate_and_clamp();

        assert_eq!(config.drawing.default_brush_size, 1);
        assert_eq!(config.drawing.default_color, ColorSpec::Name("black".into()));
        assert_eq!(config.long_press.delay_ms, 50);
        assert_eq!(config.long_press.period_ms, 5000);
        assert_eq!(config.long_press.preview_radius, 200.0);
        assert_eq!(config.canvas.width, 16);
        assert_eq!(config.canvas.height, 8192);
    }

    #[test]
    fn save_then_load_from_preserves_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.drawing.default_brush_size = 40;
        config.canvas.background = ColorSpec::Rgb([10, 20, 30]);
        config.save(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.drawing.default_brush_size, 40);
        assert_eq!(loaded.canvas.background, ColorSpec::Rgb([10, 20, 30]));
    }

    #[test]
    fn create_default_file_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        Config::create_default_file(&path).unwrap();
        assert!(path.exists());
        assert!(Config::create_default_file(&path).is_err());
    }

    #[test]
    fn load_from_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[drawing\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn json_schema_lists_sections() {
        let schema = serde_json::to_value(Config::json_schema()).unwrap();
        let properties = &schema["properties"];
        assert!(properties.get("drawing").is_some());
        assert!(properties.get("long_press").is_some());
        assert!(properties.get("canvas").is_some());
    }
}
