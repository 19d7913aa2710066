//! Input handling: calibration, tool state, and the stroke-capture machine.
//!
//! This module turns backend pointer and tool-selection events into model
//! mutations. Raw pointer coordinates pass through the committed
//! calibration transform before any other processing; the capture machine
//! then grows the in-progress stroke and files it on the active page.

pub mod calibration;
pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use calibration::{CalibrationSession, CalibrationTransform};
pub use events::ToolSelect;
pub use state::{BoardState, CurveAction, Mode};
pub use tool::ToolState;
