use crate::draw::damage::Segment;
use crate::util::Point;

use super::{BoardState, CurveAction, Mode};

impl BoardState {
    /// Processes a pointer-down event in raw surface pixels.
    ///
    /// While calibrating, the click feeds the calibration session; the
    /// second good click commits the transform and switches to drawing
    /// mode. While drawing, the click starts a stroke with the current pen.
    pub fn on_pointer_down(&mut self, x: i32, y: i32) {
        let raw = Point::new(x, y);

        if self.mode == Mode::Calibrating {
            match self.calibration.record_click(raw) {
                Ok(Some(transform)) => {
                    self.transform = transform;
                    self.mode = Mode::Drawing;
                    log::info!(
                        "Calibration committed: x = {:.3}*raw + {:.2}, y = {:.3}*raw + {:.2}",
                        transform.x_slope,
                        transform.x_intercept,
                        transform.y_slope,
                        transform.y_intercept
                    );
                    self.redraw.mark_full();
                }
                Ok(None) => {
                    // Move the aiming cross to the next reference mark
                    self.redraw.mark_full();
                }
                Err(err) => {
                    log::warn!("{err}; waiting for another click");
                }
            }
            return;
        }

        let point = self.transform.map(raw);
        self.process(CurveAction::Start {
            point,
            color: self.tools.current_color,
            width: self.tools.current_width,
        });
    }

    /// Processes pointer motion. Ignored unless a capture is in progress.
    pub fn on_pointer_move(&mut self, x: i32, y: i32) {
        if !self.capturing {
            return;
        }
        let point = self.transform.map(Point::new(x, y));
        self.process(CurveAction::Extend { point });
    }

    /// Processes a pointer-up event. Ignored while calibrating.
    pub fn on_pointer_up(&mut self, x: i32, y: i32) {
        if self.mode == Mode::Calibrating {
            return;
        }
        let point = self.transform.map(Point::new(x, y));
        self.process(CurveAction::Finish { point });
    }

    /// Runs one curve action against the capture machine.
    ///
    /// Each call is atomic with respect to the visible model: the stroke
    /// and page mutations land together with their redraw hint.
    fn process(&mut self, action: CurveAction) {
        match action {
            CurveAction::Start {
                point,
                color,
                width,
            } => {
                if self.capturing && !self.drawing.is_empty() {
                    // A pen-up was lost somewhere; keep what we captured
                    log::warn!("Stroke start while capturing; filing the unfinished stroke");
                    self.flush_capture_into_page();
                    self.redraw.mark_full();
                }
                self.drawing.clear();
                self.drawing.color = color;
                self.drawing.width = width;
                self.drawing.push(point);
                self.capturing = true;
                // A lone unfinished point draws nothing yet, so there is
                // no damage to record.
            }
            CurveAction::Extend { point } => {
                if !self.capturing {
                    return;
                }
                let previous = self.drawing.last();
                if self.drawing.push(point) {
                    if let Some(previous) = previous {
                        self.redraw.mark_segment(Segment {
                            p0: previous,
                            p1: point,
                            color: self.drawing.color,
                            width: self.drawing.width,
                        });
                    }
                }
            }
            CurveAction::Finish { point } => {
                if self.capturing && !self.drawing.is_empty() {
                    self.drawing.push(point);
                    self.drawing.finalize();
                    self.flush_capture_into_page();
                    // Finalization can turn a single-point stroke from
                    // invisible into a cross mark; regenerate.
                    self.redraw.mark_full();
                }
                self.capturing = false;
            }
        }
    }
}
