//! Configuration file support for inkboard.
//!
//! Handles loading and validating user settings from
//! `~/.config/inkboard/config.toml`: pen defaults, calibration reference
//! marks, and the drawing-surface geometry. If no config file exists,
//! sensible defaults are used automatically.

pub mod types;

// Re-export commonly used types at module level
pub use types::{CalibrationConfig, DrawingConfig, SurfaceConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::draw::color;

/// Main configuration structure containing all user settings.
///
/// All fields have sensible defaults and will use those if not specified
/// in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "red"
/// default_width = 3
///
/// [calibration]
/// reference_a = [100, 100]
/// reference_b = [500, 400]
/// calibrate_on_start = true
///
/// [surface]
/// width = 1024
/// height = 768
/// background = "white"
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Pen defaults (color, width)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Calibration reference marks and startup behavior
    #[serde(default)]
    pub calibration: CalibrationConfig,

    /// Drawing-surface geometry and background
    #[serde(default)]
    pub surface: SurfaceConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped or replaced with their defaults and a
    /// warning is logged, so a bad config file never produces undefined
    /// behavior at draw time.
    ///
    /// Validated ranges:
    /// - `default_width`: 1 - 64
    /// - `surface.width` / `surface.height`: 64 - 16384
    /// - color names must resolve against the stroke palette
    /// - reference marks must not share an x or y coordinate
    fn validate_and_clamp(&mut self) {
        // Pen width: 1 - 64
        if !(1..=64).contains(&self.drawing.default_width) {
            log::warn!(
                "Invalid default_width {}, clamping to 1-64 range",
                self.drawing.default_width
            );
            self.drawing.default_width = self.drawing.default_width.clamp(1, 64);
        }

        // Pen color must resolve against the palette
        if color::name_to_index(&self.drawing.default_color).is_none() {
            log::warn!(
                "Unknown default_color '{}', falling back to 'black'",
                self.drawing.default_color
            );
            self.drawing.default_color = "black".to_string();
        }

        // Surface dimensions: 64 - 16384
        if !(64..=16384).contains(&self.surface.width) {
            log::warn!(
                "Invalid surface width {}, clamping to 64-16384 range",
                self.surface.width
            );
            self.surface.width = self.surface.width.clamp(64, 16384);
        }
        if !(64..=16384).contains(&self.surface.height) {
            log::warn!(
                "Invalid surface height {}, clamping to 64-16384 range",
                self.surface.height
            );
            self.surface.height = self.surface.height.clamp(64, 16384);
        }

        if color::name_to_index(&self.surface.background).is_none() {
            log::warn!(
                "Unknown background color '{}', falling back to 'white'",
                self.surface.background
            );
            self.surface.background = "white".to_string();
        }

        // Reference marks sharing an axis would leave that axis's slope
        // underdetermined; fall back to the default pair
        let [ax, ay] = self.calibration.reference_a;
        let [bx, by] = self.calibration.reference_b;
        if ax == bx || ay == by {
            log::warn!(
                "Calibration references ({ax}, {ay}) and ({bx}, {by}) share a coordinate; \
                 using the default marks"
            );
            let defaults = CalibrationConfig::default();
            self.calibration.reference_a = defaults.reference_a;
            self.calibration.reference_b = defaults.reference_b;
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/inkboard/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined
    /// (e.g., HOME not set).
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("inkboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults
    /// if the file does not exist.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path (the `--config` flag).
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// The default pen color as a palette index.
    pub fn default_color_index(&self) -> usize {
        color::name_to_index(&self.drawing.default_color).unwrap_or(color::BLACK_IDX)
    }

    /// The surface background as a palette color.
    pub fn background_color(&self) -> crate::draw::Color {
        color::stroke_color(color::name_to_index(&self.surface.background).unwrap_or(color::ERASER_IDX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let mut config = Config::default();
        config.validate_and_clamp();
        assert_eq!(config.drawing.default_color, "black");
        assert_eq!(config.calibration.reference_a, [100, 100]);
        assert_eq!(config.calibration.reference_b, [500, 400]);
        assert!(config.calibration.calibrate_on_start);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut config: Config = toml::from_str(
            r#"
            [drawing]
            default_width = 500

            [surface]
            width = 10
            "#,
        )
        .unwrap();
        config.validate_and_clamp();
        assert_eq!(config.drawing.default_width, 64);
        assert_eq!(config.surface.width, 64);
    }

    #[test]
    fn unknown_color_names_fall_back() {
        let mut config: Config = toml::from_str(
            r#"
            [drawing]
            default_color = "mauve"
            "#,
        )
        .unwrap();
        config.validate_and_clamp();
        assert_eq!(config.drawing.default_color, "black");
    }

    #[test]
    fn axis_sharing_references_fall_back_to_defaults() {
        let mut config: Config = toml::from_str(
            r#"
            [calibration]
            reference_a = [100, 100]
            reference_b = [100, 400]
            "#,
        )
        .unwrap();
        config.validate_and_clamp();
        assert_eq!(config.calibration.reference_a, [100, 100]);
        assert_eq!(config.calibration.reference_b, [500, 400]);
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config: Config = toml::from_str("[drawing]\ndefault_color = \"red\"\n").unwrap();
        assert_eq!(config.drawing.default_color, "red");
        assert_eq!(config.surface.width, 1024);
        assert!(config.calibration.calibrate_on_start);
    }
}
