//! Slipstick - Virtual slide rule simulation core
//!
//! This library provides the position-to-value pipeline for an interactive
//! slide rule: resolving the physical cursor position into logical sampling
//! coordinates, evaluating every visible scale at those coordinates, and
//! publishing immutable reading snapshots under a throttled update
//! discipline that keeps redraw cost bounded during a drag.
//!
//! Rendering, gesture recognition, and UI wiring belong to the host
//! application. The host implements [`ScaleDataProvider`] over its live
//! instrument configuration and feeds raw cursor positions to an
//! [`UpdateScheduler`]; the scheduler hands back [`CursorReadings`]
//! snapshots whenever the publish gate admits one.

pub mod cursor;
pub mod instrument;
pub mod provider;
pub mod scale;

pub use cursor::{
    CursorReadings, ResolvedCoordinates, ScaleReading, SchedulerConfig, UpdateScheduler,
};
pub use instrument::{Instrument, InstrumentError};
pub use provider::{InstrumentProvider, ScaleDataProvider, ScaleGroups};
pub use scale::{Component, ScaleDefinition, ScaleLaw, Side};
