//! Immutable scale configuration.
//!
//! A [`ScaleDefinition`] identifies one scale on the instrument: its name,
//! formula label, mathematical law, the side and component it is engraved
//! on, and an optional custom display formatter. Definitions are created at
//! configuration load, shared as `Arc<ScaleDefinition>`, and never mutated.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use super::law::ScaleLaw;

/// Which face of the instrument a scale is engraved on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Side {
    /// The face toward the user.
    Front,
    /// The reverse face.
    Back,
}

impl Side {
    /// Get a short description for display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Front => "front",
            Side::Back => "back",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which physical component of the instrument carries a scale.
///
/// The stators are fixed; the slide moves independently of the cursor.
/// A scale's component decides which sampling coordinate it is read at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Component {
    /// Fixed bar above the slide.
    StatorTop,
    /// The movable center bar.
    Slide,
    /// Fixed bar below the slide.
    StatorBottom,
}

impl Component {
    /// Get a short description for display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Component::StatorTop => "stator-top",
            Component::Slide => "slide",
            Component::StatorBottom => "stator-bottom",
        }
    }

    /// Whether scales on this component are read at the sliding coordinate.
    pub fn is_sliding(&self) -> bool {
        matches!(self, Component::Slide)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Custom display formatter attached to a scale definition.
///
/// Absence signals "use the default magnitude-based policy".
pub type ScaleFormatter = Arc<dyn Fn(f64) -> String + Send + Sync>;

/// Immutable definition of one scale on the instrument.
#[derive(Clone)]
pub struct ScaleDefinition {
    /// Scale name as engraved on the rule (e.g. "C", "CI", "K").
    pub name: String,
    /// Formula label describing the reading (e.g. "x", "x²", "1/x").
    pub formula: String,
    /// Mathematical law the scale follows.
    pub law: ScaleLaw,
    /// Face the scale is engraved on.
    pub side: Side,
    /// Component the scale is engraved on.
    pub component: Component,
    formatter: Option<ScaleFormatter>,
}

impl ScaleDefinition {
    /// Create a definition using the default formatting policy.
    pub fn new(
        name: impl Into<String>,
        formula: impl Into<String>,
        law: ScaleLaw,
        side: Side,
        component: Component,
    ) -> Self {
        Self {
            name: name.into(),
            formula: formula.into(),
            law,
            side,
            component,
            formatter: None,
        }
    }

    /// Attach a custom display formatter.
    pub fn with_formatter(mut self, formatter: ScaleFormatter) -> Self {
        self.formatter = Some(formatter);
        self
    }

    /// The custom formatter, if one was configured.
    pub fn formatter(&self) -> Option<&ScaleFormatter> {
        self.formatter.as_ref()
    }
}

impl fmt::Debug for ScaleDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScaleDefinition")
            .field("name", &self.name)
            .field("formula", &self.formula)
            .field("law", &self.law)
            .field("side", &self.side)
            .field("component", &self.component)
            .field("has_formatter", &self.formatter.is_some())
            .finish_non_exhaustive()
    }
}
