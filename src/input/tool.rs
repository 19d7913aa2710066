//! Pen tool state: current color/width plus the remembered pre-eraser pair.

use crate::draw::color::{BLACK_IDX, ERASER_IDX};

/// Thinnest pen preset, in pixels.
pub const THIN_WIDTH: u32 = 1;
/// Default-ish middle pen preset.
pub const NORMAL_WIDTH: u32 = 2;
/// Thick pen preset.
pub const THICK_WIDTH: u32 = 3;
/// Widest regular pen preset.
pub const VERY_THICK_WIDTH: u32 = 5;
/// Width a fresh session starts with.
pub const LINE_WIDTH: u32 = THICK_WIDTH;
/// Width forced while the eraser is selected.
pub const ERASER_WIDTH: u32 = 32;

/// The session's pen selection.
///
/// `last_color`/`last_width` remember the most recent non-eraser choice so
/// that picking a color after erasing restores the old width, and vice
/// versa. The eraser itself never overwrites the remembered pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolState {
    pub current_color: usize,
    pub current_width: u32,
    last_color: usize,
    last_width: u32,
}

impl ToolState {
    pub fn new(color: usize, width: u32) -> Self {
        Self {
            current_color: color,
            current_width: width,
            last_color: color,
            last_width: width,
        }
    }

    /// Picks a pen color; also leaves the eraser by restoring the
    /// remembered width.
    pub fn select_color(&mut self, index: usize) {
        self.current_color = index;
        self.last_color = index;
        self.current_width = self.last_width;
    }

    /// Picks a pen width; also leaves the eraser by restoring the
    /// remembered color.
    pub fn select_width(&mut self, width: u32) {
        self.current_width = width;
        self.last_width = width;
        self.current_color = self.last_color;
    }

    /// Switches to the wide background-colored pen.
    pub fn select_eraser(&mut self) {
        self.current_color = ERASER_IDX;
        self.current_width = ERASER_WIDTH;
    }

    /// The clear-button reset: black pen at the startup width. Only the
    /// remembered color is reset; the remembered width survives a clear.
    pub fn reset(&mut self) {
        self.current_color = BLACK_IDX;
        self.last_color = BLACK_IDX;
        self.current_width = LINE_WIDTH;
    }

    pub fn eraser_active(&self) -> bool {
        self.current_color == ERASER_IDX && self.current_width == ERASER_WIDTH
    }
}

impl Default for ToolState {
    fn default() -> Self {
        Self::new(BLACK_IDX, LINE_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{GREEN_IDX, RED_IDX};

    #[test]
    fn color_after_eraser_restores_remembered_width() {
        let mut tools = ToolState::new(RED_IDX, VERY_THICK_WIDTH);
        tools.select_eraser();
        assert!(tools.eraser_active());

        tools.select_color(GREEN_IDX);
        assert_eq!(tools.current_color, GREEN_IDX);
        assert_eq!(tools.current_width, VERY_THICK_WIDTH);
    }

    #[test]
    fn width_after_eraser_restores_remembered_color() {
        let mut tools = ToolState::new(RED_IDX, THIN_WIDTH);
        tools.select_eraser();

        tools.select_width(THICK_WIDTH);
        assert_eq!(tools.current_color, RED_IDX);
        assert_eq!(tools.current_width, THICK_WIDTH);
    }

    #[test]
    fn eraser_does_not_overwrite_the_remembered_pair() {
        let mut tools = ToolState::new(GREEN_IDX, NORMAL_WIDTH);
        tools.select_eraser();
        tools.select_eraser();

        tools.select_color(GREEN_IDX);
        assert_eq!(tools.current_width, NORMAL_WIDTH);
    }

    #[test]
    fn reset_returns_to_black_startup_pen() {
        let mut tools = ToolState::new(RED_IDX, VERY_THICK_WIDTH);
        tools.select_eraser();
        tools.reset();

        assert_eq!(tools.current_color, crate::draw::color::BLACK_IDX);
        assert_eq!(tools.current_width, LINE_WIDTH);
    }
}
