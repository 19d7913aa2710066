//! Board session state and mode machine.

use crate::draw::damage::{Redraw, RedrawTracker};
use crate::draw::page::PageSet;
use crate::draw::stroke::Stroke;
use crate::input::calibration::{CalibrationSession, CalibrationTransform};
use crate::input::tool::ToolState;
use crate::util::Point;

/// Top-level input mode.
///
/// Pointer events are routed to the calibration session while calibrating
/// and to the stroke-capture machine while drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Collecting reference clicks; nothing is drawn.
    Calibrating,
    /// Normal operation: pointer gestures become strokes.
    Drawing,
}

/// Curve actions distilled from pointer events.
///
/// Color and width ride along only on `Start`; the stroke keeps them for
/// its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveAction {
    /// Pen down: begin a stroke at this logical point.
    Start {
        point: Point,
        color: usize,
        width: u32,
    },
    /// Pen drag: extend the in-progress stroke.
    Extend { point: Point },
    /// Pen up: complete the stroke and file it on the active page.
    Finish { point: Point },
}

/// All session state: pages, pen selection, calibration, and the stroke
/// currently being captured.
///
/// Every pointer or tool event is processed to completion (model mutation
/// plus redraw hint) before the next one is accepted; the glue drains
/// [`BoardState::take_redraw`] after each event.
pub struct BoardState {
    /// The fixed set of canvas pages
    pub pages: PageSet,
    /// Current/remembered pen selection
    pub tools: ToolState,
    /// Committed raw→logical mapping (identity until first calibration)
    pub transform: CalibrationTransform,
    /// Click collection for the calibration pass in progress
    pub calibration: CalibrationSession,
    /// Current input mode
    pub mode: Mode,
    /// Whether the platform was asked to shut down
    pub should_exit: bool,
    /// Surface width in pixels (set by the backend on configure/resize)
    pub surface_width: u32,
    /// Surface height in pixels
    pub surface_height: u32,
    /// The in-progress stroke; only meaningful while `capturing`
    pub(crate) drawing: Stroke,
    /// IDLE vs CAPTURING
    pub(crate) capturing: bool,
    /// Pending redraw work for the render glue
    pub(crate) redraw: RedrawTracker,
}

impl BoardState {
    /// Creates a session with the given pen defaults and calibration
    /// reference marks.
    ///
    /// With `calibrate_on_start` the session opens in calibration mode,
    /// like the physical boards this targets; otherwise the identity
    /// transform is used until the user asks to calibrate.
    pub fn with_defaults(
        color: usize,
        width: u32,
        reference_a: Point,
        reference_b: Point,
        calibrate_on_start: bool,
    ) -> Self {
        let mode = if calibrate_on_start {
            Mode::Calibrating
        } else {
            Mode::Drawing
        };
        let mut state = Self {
            pages: PageSet::new(),
            tools: ToolState::new(color, width),
            transform: CalibrationTransform::default(),
            calibration: CalibrationSession::new(reference_a, reference_b),
            mode,
            should_exit: false,
            surface_width: 0,
            surface_height: 0,
            drawing: Stroke::default(),
            capturing: false,
            redraw: RedrawTracker::new(),
        };
        // First drain paints the initial screen (calibration cross or
        // blank page).
        state.redraw.mark_full();
        state
    }

    /// Whether a stroke capture is in progress.
    pub fn capturing(&self) -> bool {
        self.capturing
    }

    /// The in-progress stroke, for full repaints that must include it.
    pub fn current_stroke(&self) -> Option<&Stroke> {
        if self.capturing { Some(&self.drawing) } else { None }
    }

    /// Drains the pending redraw work accumulated since the last call.
    pub fn take_redraw(&mut self) -> Option<Redraw> {
        self.redraw.take()
    }

    /// Forces the next drain to regenerate everything.
    pub fn mark_full_redraw(&mut self) {
        self.redraw.mark_full();
    }

    /// Drops the in-progress stroke without filing it anywhere.
    pub(crate) fn discard_capture(&mut self) {
        self.drawing.clear();
        self.capturing = false;
    }

    /// Files the in-progress stroke on the active page and resets the
    /// capture slot. The stroke is moved, never aliased.
    pub(crate) fn flush_capture_into_page(&mut self) {
        let stroke = std::mem::take(&mut self.drawing);
        self.pages.active_mut().push(stroke);
    }
}
