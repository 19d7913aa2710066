//! Paged freehand whiteboard core.
//!
//! Captures colored, variable-width freehand strokes on a fixed set of
//! pages, mapping raw pointer coordinates into logical drawing space
//! through a two-point calibration. Platform glue feeds pointer,
//! tool-selection, and resize events in; Cairo draw calls come out,
//! against either a live surface or the cached offscreen buffer.

pub mod config;
pub mod draw;
pub mod input;
pub mod replay;
pub mod util;

pub use config::Config;
