//! gantt-rs: headless Gantt timeline engine.
//!
//! This crate turns a named time-period configuration into a pixel grid
//! (unit columns, divider lines, scrollable width) with bidirectional
//! pixel/timestamp conversion, and runs the move/resize drag state machine
//! for the tasks scheduled on that grid. Rendering is left to the host.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod telemetry;

pub use api::{GanttEngine, GanttEngineConfig};
pub use error::{GanttError, GanttResult};
