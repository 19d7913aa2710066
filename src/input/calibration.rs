//! Two-point affine calibration from raw pointer to logical coordinates.
//!
//! The user clicks two on-screen reference marks; each axis then gets an
//! independent linear map `logical = intercept + raw * slope`. The
//! committed transform persists until the next successful calibration.

use crate::util::Point;
use thiserror::Error;

/// Number of reference clicks a calibration needs.
pub const NUM_CALIBRATION_POINTS: usize = 2;

/// Why a calibration click was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalibrationError {
    /// The second click lines up with the first click or the first
    /// reference mark on some axis, which would make a slope undefined
    /// (or garbage). The click is not counted; the user retries.
    #[error("calibration click at ({x}, {y}) would produce a degenerate mapping")]
    Degenerate { x: i32, y: i32 },
}

/// Committed affine mapping, one linear map per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationTransform {
    pub x_intercept: f64,
    pub x_slope: f64,
    pub y_intercept: f64,
    pub y_slope: f64,
}

impl Default for CalibrationTransform {
    /// Identity mapping: raw coordinates pass through unchanged.
    fn default() -> Self {
        Self {
            x_intercept: 0.0,
            x_slope: 1.0,
            y_intercept: 0.0,
            y_slope: 1.0,
        }
    }
}

impl CalibrationTransform {
    /// Maps a raw pointer position into logical coordinates.
    ///
    /// Rounds by adding 0.49 and truncating toward zero. Tool hit regions
    /// were tuned against this fixed-point rounding, so it stays as is
    /// rather than switching to round-to-even.
    pub fn map(&self, raw: Point) -> Point {
        Point::new(
            (self.x_intercept + raw.x as f64 * self.x_slope + 0.49) as i32,
            (self.y_intercept + raw.y as f64 * self.y_slope + 0.49) as i32,
        )
    }
}

/// Collects the reference clicks of one calibration pass and computes the
/// transform once both are in.
#[derive(Debug)]
pub struct CalibrationSession {
    references: [Point; NUM_CALIBRATION_POINTS],
    clicks: [Point; NUM_CALIBRATION_POINTS],
    count: usize,
}

impl CalibrationSession {
    pub fn new(reference_a: Point, reference_b: Point) -> Self {
        Self {
            references: [reference_a, reference_b],
            clicks: [Point::default(); NUM_CALIBRATION_POINTS],
            count: 0,
        }
    }

    /// Restarts the pass, discarding any recorded clicks.
    pub fn begin(&mut self) {
        self.count = 0;
    }

    pub fn clicks_recorded(&self) -> usize {
        self.count
    }

    /// The reference mark the user should click next; the renderer draws
    /// the aiming cross here.
    pub fn target(&self) -> Point {
        self.references[self.count.min(NUM_CALIBRATION_POINTS - 1)]
    }

    /// Records one raw click.
    ///
    /// Returns `Ok(None)` while more clicks are needed and
    /// `Ok(Some(transform))` when the final click commits the mapping. A
    /// degenerate final click is rejected without being counted, so the
    /// caller stays in calibration and the user simply clicks again.
    pub fn record_click(
        &mut self,
        raw: Point,
    ) -> Result<Option<CalibrationTransform>, CalibrationError> {
        if self.count >= NUM_CALIBRATION_POINTS {
            // A completed pass fed another click restarts from scratch.
            self.count = 0;
        }

        if self.count == NUM_CALIBRATION_POINTS - 1 {
            let first_click = self.clicks[0];
            let first_reference = self.references[0];
            if raw.x == first_click.x
                || raw.y == first_click.y
                || raw.x == first_reference.x
                || raw.y == first_reference.y
            {
                return Err(CalibrationError::Degenerate { x: raw.x, y: raw.y });
            }
        }

        self.clicks[self.count] = raw;
        self.count += 1;

        if self.count < NUM_CALIBRATION_POINTS {
            return Ok(None);
        }

        let last = NUM_CALIBRATION_POINTS - 1;
        let x_slope = (self.references[last].x - self.references[0].x) as f64
            / (self.clicks[last].x - self.clicks[0].x) as f64;
        let y_slope = (self.references[last].y - self.references[0].y) as f64
            / (self.clicks[last].y - self.clicks[0].y) as f64;
        let transform = CalibrationTransform {
            x_intercept: self.references[0].x as f64 - self.clicks[0].x as f64 * x_slope,
            x_slope,
            y_intercept: self.references[0].y as f64 - self.clicks[0].y as f64 * y_slope,
            y_slope,
        };
        Ok(Some(transform))
    }
}
