//! Configuration type definitions.

use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the pen a fresh session starts with. Users change both at
/// runtime through the tool buttons.
#[derive(Debug, Serialize, Deserialize)]
pub struct DrawingConfig {
    /// Default pen color - a named palette color (black, blue, red,
    /// green, white)
    #[serde(default = "default_color")]
    pub default_color: String,

    /// Default pen width in pixels (valid range: 1 - 64)
    #[serde(default = "default_width")]
    pub default_width: u32,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_width: default_width(),
        }
    }
}

/// Calibration settings.
///
/// The two reference marks the user clicks during calibration, in logical
/// coordinates. They must not share an x or y coordinate, or the mapping
/// would be underdetermined on that axis.
#[derive(Debug, Serialize, Deserialize)]
pub struct CalibrationConfig {
    /// First reference mark as `[x, y]`
    #[serde(default = "default_reference_a")]
    pub reference_a: [i32; 2],

    /// Second reference mark as `[x, y]`
    #[serde(default = "default_reference_b")]
    pub reference_b: [i32; 2],

    /// Whether a session opens in calibration mode (set false to start
    /// drawing immediately with the identity mapping)
    #[serde(default = "default_calibrate_on_start")]
    pub calibrate_on_start: bool,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            reference_a: default_reference_a(),
            reference_b: default_reference_b(),
            calibrate_on_start: default_calibrate_on_start(),
        }
    }
}

/// Drawing-surface settings for the headless driver.
#[derive(Debug, Serialize, Deserialize)]
pub struct SurfaceConfig {
    /// Surface width in pixels (valid range: 64 - 16384)
    #[serde(default = "default_surface_width")]
    pub width: u32,

    /// Surface height in pixels (valid range: 64 - 16384)
    #[serde(default = "default_surface_height")]
    pub height: u32,

    /// Background color name (also the eraser pen color)
    #[serde(default = "default_background")]
    pub background: String,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: default_surface_width(),
            height: default_surface_height(),
            background: default_background(),
        }
    }
}

fn default_color() -> String {
    "black".to_string()
}

fn default_width() -> u32 {
    crate::input::tool::LINE_WIDTH
}

fn default_reference_a() -> [i32; 2] {
    [100, 100]
}

fn default_reference_b() -> [i32; 2] {
    [500, 400]
}

fn default_calibrate_on_start() -> bool {
    true
}

fn default_surface_width() -> u32 {
    1024
}

fn default_surface_height() -> u32 {
    768
}

fn default_background() -> String {
    "white".to_string()
}
