//! Offscreen render cache for the active page.
//!
//! Keeps a persistently rendered image of the board so pointer motion only
//! appends one segment instead of replaying every stroke. The cache is
//! regenerated whenever the surface is resized or the page changes by any
//! means other than a simple append (clear, page switch, finalization).

use cairo::{Context, Format, ImageSurface};

use super::color::Color;
use super::damage::Segment;
use super::page::Page;
use super::render;
use super::stroke::Stroke;
use crate::util::Point;

/// Cached rendered image of the active page plus any in-progress stroke.
pub struct OffscreenBuffer {
    surface: ImageSurface,
    width: i32,
    height: i32,
    background: Color,
}

impl OffscreenBuffer {
    /// Allocates the cache at the given size and fills it with the
    /// background color.
    pub fn new(width: u32, height: u32, background: Color) -> Result<Self, cairo::Error> {
        let width = surface_extent(width);
        let height = surface_extent(height);
        let surface = ImageSurface::create(Format::ARgb32, width, height)?;
        let buffer = Self {
            surface,
            width,
            height,
            background,
        };
        buffer.clear()?;
        Ok(buffer)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Reallocates the cache when the surface size changed.
    ///
    /// Returns whether a reallocation happened; the caller must follow up
    /// with a repaint, since the fresh cache only holds background.
    pub fn ensure_size(&mut self, width: u32, height: u32) -> Result<bool, cairo::Error> {
        let width = surface_extent(width);
        let height = surface_extent(height);
        if width == self.width && height == self.height {
            return Ok(false);
        }
        self.surface = ImageSurface::create(Format::ARgb32, width, height)?;
        self.width = width;
        self.height = height;
        self.clear()?;
        Ok(true)
    }

    /// Resets the cache to plain background.
    pub fn clear(&self) -> Result<(), cairo::Error> {
        let ctx = Context::new(&self.surface)?;
        render::fill_background(&ctx, self.background);
        Ok(())
    }

    /// Regenerates the cache from the page model and the in-progress
    /// stroke, replacing whatever was rendered before.
    pub fn repaint(&self, page: &Page, live: Option<&Stroke>) -> Result<(), cairo::Error> {
        let ctx = Context::new(&self.surface)?;
        render::fill_background(&ctx, self.background);
        render::render_page(&ctx, page);
        if let Some(stroke) = live {
            render::render_stroke(&ctx, stroke);
        }
        Ok(())
    }

    /// Regenerates the cache as the calibration screen: blank background
    /// with the aiming cross at the next reference mark.
    pub fn repaint_calibration(&self, target: Point) -> Result<(), cairo::Error> {
        let ctx = Context::new(&self.surface)?;
        render::fill_background(&ctx, self.background);
        render::render_calibration_target(&ctx, target);
        Ok(())
    }

    /// Draws one new segment of the in-progress stroke into the cache.
    pub fn append_segment(&self, segment: Segment) -> Result<(), cairo::Error> {
        let ctx = Context::new(&self.surface)?;
        render::render_segment(&ctx, segment.p0, segment.p1, segment.color, segment.width);
        Ok(())
    }

    /// Paints the cache onto a target context (the visible surface).
    pub fn blit(&self, ctx: &Context) -> Result<(), cairo::Error> {
        ctx.set_source_surface(&self.surface, 0.0, 0.0)?;
        ctx.paint()
    }

    /// Writes the cache as a PNG image.
    pub fn write_png<W: std::io::Write>(&mut self, stream: &mut W) -> Result<(), cairo::IoError> {
        self.surface.flush();
        self.surface.write_to_png(stream)
    }
}

fn surface_extent(value: u32) -> i32 {
    value.clamp(1, i32::MAX as u32) as i32
}
