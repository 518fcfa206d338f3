//! Cursor reading pipeline.
//!
//! Everything between a raw cursor position and a published snapshot lives
//! here: coordinate resolution, per-scale evaluation, snapshot assembly, and
//! the throttled publish gate.
//!
//! # Architecture
//!
//! ```text
//! position event ──► resolve ──► build_readings ──► hot ──► gate ──► published ──► subscribers
//!                    (coords)    (per-scale eval)          (stride + equality)
//! ```
//!
//! The whole pipeline is synchronous and completes within one event-loop
//! turn; only [`UpdateScheduler`] holds mutable state.

mod builder;
mod position;
mod readings;
mod scheduler;

pub use builder::build_readings;
pub use position::{resolve, ResolvedCoordinates};
pub use readings::{CursorReadings, ScaleReading};
pub use scheduler::{
    SchedulerConfig, UpdateScheduler, DEFAULT_CURSOR_WIDTH_PX, DEFAULT_PUBLISH_STRIDE,
};
