//! RGBA color type and the fixed stroke palette.

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components.
    ///
    /// All values should be in the range 0.0 to 1.0.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }
}

/// Predefined black color
pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined blue color
pub const BLUE: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined red color
pub const RED: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Dark green, legible against the white board background
pub const GREEN: Color = Color {
    r: 0.0,
    g: 0.39,
    b: 0.0,
    a: 1.0,
};

/// Predefined white color (board background and eraser pen)
pub const WHITE: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

/// Number of palette slots available to strokes.
pub const NUM_COLORS: usize = 5;

/// Palette index of the black pen.
pub const BLACK_IDX: usize = 0;
/// Palette index of the blue pen.
pub const BLUE_IDX: usize = 1;
/// Palette index of the red pen.
pub const RED_IDX: usize = 2;
/// Palette index of the green pen.
pub const GREEN_IDX: usize = 3;
/// Palette index of the eraser pen (same color as the background).
pub const ERASER_IDX: usize = 4;

/// Fixed stroke palette, indexed modulo [`NUM_COLORS`].
pub const STROKE_PALETTE: [Color; NUM_COLORS] = [BLACK, BLUE, RED, GREEN, WHITE];

/// Resolves a stroke color index against the palette.
///
/// Indices are always interpreted modulo the palette size, so oversized
/// values wrap instead of panicking.
pub fn stroke_color(index: usize) -> Color {
    STROKE_PALETTE[index % NUM_COLORS]
}

/// Maps color name strings to palette indices.
///
/// Used by the configuration system to parse color names from the config
/// file and by the replay driver's `tool` command.
pub fn name_to_index(name: &str) -> Option<usize> {
    match name.to_lowercase().as_str() {
        "black" => Some(BLACK_IDX),
        "blue" => Some(BLUE_IDX),
        "red" => Some(RED_IDX),
        "green" => Some(GREEN_IDX),
        "white" => Some(ERASER_IDX),
        _ => None,
    }
}

/// Maps a palette index back to its name, for logging.
pub fn index_to_name(index: usize) -> &'static str {
    match index % NUM_COLORS {
        BLACK_IDX => "black",
        BLUE_IDX => "blue",
        RED_IDX => "red",
        GREEN_IDX => "green",
        _ => "white",
    }
}
