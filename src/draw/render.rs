//! Cairo draw calls for strokes and pages.
//!
//! The core decides what to draw and in what order; the Cairo context is
//! supplied by the platform glue (or by the offscreen buffer).

use super::color::{Color, stroke_color};
use super::page::Page;
use super::stroke::Stroke;
use crate::util::{Point, Vector};

/// Fills the whole surface with a solid color.
pub fn fill_background(ctx: &cairo::Context, color: Color) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    let _ = ctx.paint();
}

/// Renders all of a page's strokes in insertion order.
///
/// Later strokes draw over earlier ones, so overlaps resolve to the most
/// recent stroke (this is also what makes the eraser pen work).
pub fn render_page(ctx: &cairo::Context, page: &Page) {
    for stroke in &page.strokes {
        render_stroke(ctx, stroke);
    }
}

/// Renders a single stroke.
///
/// - zero points: nothing
/// - one point: a small cross mark, and only once the stroke is finished
///   (an in-progress single point stays invisible)
/// - two or more points: a connected polyline
pub fn render_stroke(ctx: &cairo::Context, stroke: &Stroke) {
    let points = stroke.points();
    if points.is_empty() {
        return;
    }

    let color = stroke_color(stroke.color);
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(stroke.width as f64);

    if points.len() == 1 {
        if stroke.is_finished() {
            render_cross_mark(ctx, points[0]);
        }
        return;
    }

    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    let first = points[0];
    ctx.move_to(first.x as f64, first.y as f64);
    for p in &points[1..] {
        ctx.line_to(p.x as f64, p.y as f64);
    }
    let _ = ctx.stroke();
}

/// Appends one segment of an in-progress stroke.
///
/// Degenerate segments are skipped so round caps cannot leave stray dots;
/// a zero-length gesture only becomes visible as a cross mark when the
/// stroke is finalized.
pub fn render_segment(ctx: &cairo::Context, p0: Point, p1: Point, color_index: usize, width: u32) {
    if p0 == p1 {
        return;
    }

    let color = stroke_color(color_index);
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(width as f64);
    ctx.set_line_cap(cairo::LineCap::Round);

    ctx.move_to(p0.x as f64, p0.y as f64);
    ctx.line_to(p1.x as f64, p1.y as f64);
    let _ = ctx.stroke();
}

/// Draws the aiming cross at the next calibration reference mark.
pub fn render_calibration_target(ctx: &cairo::Context, target: Point) {
    const ARM: i32 = 16;

    ctx.set_source_rgba(0.0, 0.0, 1.0, 1.0);
    ctx.set_line_width(3.0);
    ctx.set_line_cap(cairo::LineCap::Butt);

    draw_line(ctx, target - Vector::new(ARM, 0), target + Vector::new(ARM, 0));
    draw_line(ctx, target - Vector::new(0, ARM), target + Vector::new(0, ARM));
}

/// Two short perpendicular segments through the point; the deliberate
/// substitute for a zero-length path, which would otherwise draw nothing.
fn render_cross_mark(ctx: &cairo::Context, p: Point) {
    ctx.set_line_cap(cairo::LineCap::Butt);
    let vx = Vector::new(1, 0);
    let vy = Vector::new(0, 1);
    draw_line(ctx, p - vx, p + vx);
    draw_line(ctx, p - vy, p + vy);
}

fn draw_line(ctx: &cairo::Context, p0: Point, p1: Point) {
    ctx.move_to(p0.x as f64, p0.y as f64);
    ctx.line_to(p1.x as f64, p1.y as f64);
    let _ = ctx.stroke();
}
