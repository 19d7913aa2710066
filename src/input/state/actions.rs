use crate::draw::color;
use crate::input::events::ToolSelect;

use super::{BoardState, Mode};

impl BoardState {
    /// Applies a tool selection resolved by the UI chrome.
    ///
    /// Pen changes land on the tool state only; the next stroke start
    /// picks them up. Structural selections (clear, page switch,
    /// calibrate) take effect immediately.
    pub fn on_tool_select(&mut self, selection: ToolSelect) {
        match selection {
            ToolSelect::Color(index) => {
                self.tools.select_color(index);
                log::debug!("Pen color set to {}", color::index_to_name(index));
            }
            ToolSelect::Width(width) => {
                self.tools.select_width(width);
                log::debug!("Pen width set to {width}px");
            }
            ToolSelect::Eraser => {
                self.tools.select_eraser();
                log::debug!("Eraser selected");
            }
            ToolSelect::Calibrate => {
                self.mode = Mode::Calibrating;
                self.calibration.begin();
                self.redraw.mark_full();
                log::info!("Entering calibration mode");
            }
            ToolSelect::Clear => self.clear_active_page(),
            ToolSelect::Page(index) => self.switch_page(index),
            ToolSelect::Quit => {
                self.should_exit = true;
            }
        }
    }

    /// Empties the active page, drops any capture in progress, and resets
    /// the pen to the startup selection.
    pub fn clear_active_page(&mut self) {
        self.pages.clear_active();
        self.discard_capture();
        self.tools.reset();
        self.redraw.mark_full();
    }

    /// Switches the active page; out-of-range requests are no-ops.
    ///
    /// A capture in progress is discarded rather than carried across
    /// pages.
    pub fn switch_page(&mut self, index: usize) {
        if self.pages.switch_to(index) {
            self.discard_capture();
            self.redraw.mark_full();
            log::debug!("Active page is now {index}");
        }
    }

    /// Records new surface dimensions. The offscreen cache is invalid at
    /// any other size, so a full redraw is due.
    pub fn on_resize(&mut self, width: u32, height: u32) {
        if width == self.surface_width && height == self.surface_height {
            return;
        }
        self.surface_width = width;
        self.surface_height = height;
        self.redraw.mark_full();
    }
}
