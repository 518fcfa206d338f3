//! Reading snapshots.
//!
//! A [`CursorReadings`] value is one immutable, fully-computed set of
//! readings for a single instant. A new cursor position produces a wholly
//! new snapshot, never an in-place edit; that is what makes the publish
//! gate's equality check sound.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::scale::{Component, ScaleDefinition, Side};

/// Raw-value equality that treats two undefined readings as equal.
///
/// A drag held past the domain clamp keeps producing NaN raw values; those
/// must compare equal so the gate never spuriously republishes.
fn raw_value_eq(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

/// One scale's reading at the current cursor position.
#[derive(Debug, Clone, Serialize)]
pub struct ScaleReading {
    /// Name of the scale the value was read from.
    pub scale_name: String,
    /// Formula label of the scale (e.g. "x²").
    pub formula: String,
    /// The numeric value under the hairline; non-finite when the sampling
    /// coordinate fell outside the scale's domain.
    pub raw_value: f64,
    /// Display rendering of `raw_value` per the definition's policy.
    pub display_value: String,
    /// Face the reading was taken from.
    pub side: Side,
    /// Component the reading was taken from.
    pub component: Component,
    /// The definition this reading was evaluated against.
    #[serde(skip)]
    pub definition: Arc<ScaleDefinition>,
}

impl ScaleReading {
    /// Publish-gate equivalence: scale name, raw value, and display value.
    pub fn same_value(&self, other: &ScaleReading) -> bool {
        self.scale_name == other.scale_name
            && raw_value_eq(self.raw_value, other.raw_value)
            && self.display_value == other.display_value
    }
}

impl PartialEq for ScaleReading {
    fn eq(&self, other: &Self) -> bool {
        self.same_value(other)
            && self.formula == other.formula
            && self.side == other.side
            && self.component == other.component
    }
}

/// Immutable snapshot of every visible scale's reading at one instant.
///
/// Reading lists preserve the provider's component-traversal order: top
/// stator, then slide, then bottom stator. A hidden side is an empty list.
#[derive(Debug, Clone, Serialize)]
pub struct CursorReadings {
    cursor_position: f64,
    timestamp: DateTime<Utc>,
    front_readings: Vec<ScaleReading>,
    back_readings: Vec<ScaleReading>,
}

impl CursorReadings {
    /// Assemble a snapshot, stamping it with the current time.
    pub fn new(
        cursor_position: f64,
        front_readings: Vec<ScaleReading>,
        back_readings: Vec<ScaleReading>,
    ) -> Self {
        Self {
            cursor_position,
            timestamp: Utc::now(),
            front_readings,
            back_readings,
        }
    }

    /// The empty sentinel consumers observe before the first publish.
    pub fn empty() -> Self {
        Self::new(0.0, Vec::new(), Vec::new())
    }

    /// Hairline coordinate the snapshot was taken at, clamped to `[0, 1]`
    /// (non-finite when the provider reported invalid geometry).
    pub fn cursor_position(&self) -> f64 {
        self.cursor_position
    }

    /// When the snapshot was assembled.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Front-side readings in traversal order; empty when the side is hidden.
    pub fn front_readings(&self) -> &[ScaleReading] {
        &self.front_readings
    }

    /// Back-side readings in traversal order; empty when the side is hidden.
    pub fn back_readings(&self) -> &[ScaleReading] {
        &self.back_readings
    }

    /// All readings, front then back, order preserved.
    pub fn all_readings(&self) -> impl Iterator<Item = &ScaleReading> {
        self.front_readings.iter().chain(self.back_readings.iter())
    }

    /// Readings taken from the given component, order preserved.
    pub fn readings_for(&self, component: Component) -> impl Iterator<Item = &ScaleReading> {
        self.all_readings().filter(move |r| r.component == component)
    }

    /// First reading matching the scale name on the given side.
    pub fn reading_for(&self, scale_name: &str, side: Side) -> Option<&ScaleReading> {
        let readings = match side {
            Side::Front => &self.front_readings,
            Side::Back => &self.back_readings,
        };
        readings.iter().find(|r| r.scale_name == scale_name)
    }

    /// Whether the snapshot holds no readings at all.
    pub fn is_empty(&self) -> bool {
        self.front_readings.is_empty() && self.back_readings.is_empty()
    }

    /// Total reading count across both sides.
    pub fn len(&self) -> usize {
        self.front_readings.len() + self.back_readings.len()
    }

    /// Publish-gate equivalence: same scale names, raw values, and display
    /// values across all readings. Ignores timestamp and cursor position.
    pub fn same_readings(&self, other: &CursorReadings) -> bool {
        fn lists_match(a: &[ScaleReading], b: &[ScaleReading]) -> bool {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.same_value(y))
        }
        lists_match(&self.front_readings, &other.front_readings)
            && lists_match(&self.back_readings, &other.back_readings)
    }
}

/// Value equality excluding the timestamp, so two consecutive builds at the
/// same position compare equal.
impl PartialEq for CursorReadings {
    fn eq(&self, other: &Self) -> bool {
        raw_value_eq(self.cursor_position, other.cursor_position)
            && self.front_readings == other.front_readings
            && self.back_readings == other.back_readings
    }
}
