//! Scale definitions and evaluation.
//!
//! A scale is a labeled numeric function mapping a normalized coordinate in
//! `[0, 1]` to a real value. This module holds the mathematical laws behind
//! the classic scales, the immutable [`ScaleDefinition`] configuration type,
//! and the display formatting policy for readings.

mod definition;
mod format;
mod law;

pub use definition::{Component, ScaleDefinition, ScaleFormatter, Side};
pub use format::{default_format, format_value, NON_FINITE_SENTINEL};
pub use law::ScaleLaw;
