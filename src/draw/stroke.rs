//! Freehand stroke storage.

use crate::util::Point;

/// One pen-down-to-pen-up gesture: an ordered point sequence plus pen
/// metadata.
///
/// The point list is the authoritative geometry; rendering caches (the
/// offscreen buffer) are derived from it. Consecutive duplicate points are
/// never stored, and `finished` flips to true exactly once, when the pen
/// lifts.
#[derive(Debug, Clone, Default)]
pub struct Stroke {
    /// Palette index of the pen color (resolved modulo the palette size)
    pub color: usize,
    /// Pen width in pixels
    pub width: u32,
    points: Vec<Point>,
    finished: bool,
}

impl Stroke {
    pub fn new(color: usize, width: u32) -> Self {
        Self {
            color,
            width,
            points: Vec::new(),
            finished: false,
        }
    }

    /// Appends a point, silently dropping consecutive duplicates.
    ///
    /// Returns whether the point was actually stored, so callers can decide
    /// if an incremental segment needs drawing.
    pub fn push(&mut self, p: Point) -> bool {
        if self.points.last() == Some(&p) {
            return false;
        }
        self.points.push(p);
        true
    }

    /// Marks the stroke as complete. A single-point stroke only becomes
    /// visible (as a cross mark) once this has been called.
    pub fn finalize(&mut self) {
        self.finished = true;
    }

    /// Empties the stroke for reuse as the next in-progress gesture.
    pub fn clear(&mut self) {
        self.points.clear();
        self.finished = false;
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
