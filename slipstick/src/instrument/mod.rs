//! Instrument configuration.
//!
//! An [`Instrument`] is a named, validated collection of scale definitions
//! partitioned into per-side component groups. Instruments are assembled at
//! configuration load and never mutated afterwards; misconfiguration fails
//! fast here instead of surfacing during the hot path.
//!
//! Two classic layouts ship as presets: [`Instrument::mannheim`] and
//! [`Instrument::duplex`].

use std::sync::Arc;

use thiserror::Error;

use crate::provider::ScaleGroups;
use crate::scale::{Component, ScaleDefinition, ScaleFormatter, ScaleLaw, Side};

/// Errors raised while assembling an instrument.
#[derive(Debug, Error)]
pub enum InstrumentError {
    /// Two scales on the same side share a name; readings would be
    /// ambiguous.
    #[error("duplicate scale '{name}' on {side} side")]
    DuplicateScale {
        /// The offending scale name.
        name: String,
        /// The side carrying both scales.
        side: Side,
    },

    /// The instrument carries no scales at all.
    #[error("instrument '{0}' has no scales")]
    Empty(String),
}

/// A named, validated set of scales partitioned by side and component.
#[derive(Debug, Clone)]
pub struct Instrument {
    name: String,
    front: Option<ScaleGroups>,
    back: Option<ScaleGroups>,
}

impl Instrument {
    /// Assemble an instrument from a flat list of scale definitions.
    ///
    /// Definitions are partitioned by their declared side and component,
    /// preserving list order within each group. A side with no scales is
    /// absent (hidden).
    ///
    /// # Errors
    ///
    /// [`InstrumentError::DuplicateScale`] when two scales on one side share
    /// a name; [`InstrumentError::Empty`] when the list is empty.
    pub fn new(
        name: impl Into<String>,
        scales: Vec<ScaleDefinition>,
    ) -> Result<Self, InstrumentError> {
        let name = name.into();
        if scales.is_empty() {
            return Err(InstrumentError::Empty(name));
        }

        let mut front = ScaleGroups::default();
        let mut back = ScaleGroups::default();

        for definition in scales {
            let side = definition.side;
            let groups = match side {
                Side::Front => &mut front,
                Side::Back => &mut back,
            };
            if groups
                .in_traversal_order()
                .iter()
                .any(|(_, defs)| defs.iter().any(|d| d.name == definition.name))
            {
                return Err(InstrumentError::DuplicateScale {
                    name: definition.name,
                    side,
                });
            }
            let group = match definition.component {
                Component::StatorTop => &mut groups.stator_top,
                Component::Slide => &mut groups.slide,
                Component::StatorBottom => &mut groups.stator_bottom,
            };
            group.push(Arc::new(definition));
        }

        let front = (!front.is_empty()).then_some(front);
        let back = (!back.is_empty()).then_some(back);

        tracing::info!(
            instrument = %name,
            front_scales = front.as_ref().map_or(0, ScaleGroups::len),
            back_scales = back.as_ref().map_or(0, ScaleGroups::len),
            "Instrument configured"
        );

        Ok(Self { name, front, back })
    }

    /// The instrument's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Front-side groups, or `None` when the front carries no scales.
    pub fn front(&self) -> Option<&ScaleGroups> {
        self.front.as_ref()
    }

    /// Back-side groups, or `None` when the back carries no scales.
    pub fn back(&self) -> Option<&ScaleGroups> {
        self.back.as_ref()
    }

    /// Total scale count across both sides.
    pub fn scale_count(&self) -> usize {
        self.front.as_ref().map_or(0, ScaleGroups::len)
            + self.back.as_ref().map_or(0, ScaleGroups::len)
    }

    /// Every definition on the instrument, front side first, traversal order.
    pub fn definitions(&self) -> impl Iterator<Item = &Arc<ScaleDefinition>> {
        self.front
            .iter()
            .chain(self.back.iter())
            .flat_map(|groups| {
                groups
                    .in_traversal_order()
                    .into_iter()
                    .flat_map(|(_, defs)| defs)
            })
    }

    /// Classic single-sided Mannheim layout: A on the top stator, B/CI/C on
    /// the slide, D and L on the bottom stator.
    pub fn mannheim() -> Self {
        Self::new("Mannheim", mannheim_scales()).expect("preset layout is valid")
    }

    /// Two-sided duplex layout: the Mannheim front plus K on the top
    /// stator, with the trig scales S, T, and ST on the back.
    pub fn duplex() -> Self {
        let mut scales = vec![ScaleDefinition::new(
            "K",
            "x³",
            ScaleLaw::LogCubed,
            Side::Front,
            Component::StatorTop,
        )];
        scales.extend(mannheim_scales());
        scales.extend([
            ScaleDefinition::new("S", "sin θ", ScaleLaw::Sine, Side::Back, Component::StatorTop)
                .with_formatter(degree_formatter()),
            ScaleDefinition::new("T", "tan θ", ScaleLaw::Tangent, Side::Back, Component::Slide)
                .with_formatter(degree_formatter()),
            ScaleDefinition::new(
                "ST",
                "sin θ ≈ tan θ",
                ScaleLaw::SmallAngle,
                Side::Back,
                Component::Slide,
            )
            .with_formatter(degree_formatter()),
            ScaleDefinition::new("D", "x", ScaleLaw::Log, Side::Back, Component::StatorBottom),
        ]);
        Self::new("Duplex", scales).expect("preset layout is valid")
    }
}

/// The shared front layout of the preset instruments.
fn mannheim_scales() -> Vec<ScaleDefinition> {
    vec![
        ScaleDefinition::new("A", "x²", ScaleLaw::LogSquared, Side::Front, Component::StatorTop),
        ScaleDefinition::new("B", "x²", ScaleLaw::LogSquared, Side::Front, Component::Slide),
        ScaleDefinition::new("CI", "1/x", ScaleLaw::InvertedLog, Side::Front, Component::Slide),
        ScaleDefinition::new("C", "x", ScaleLaw::Log, Side::Front, Component::Slide),
        ScaleDefinition::new("D", "x", ScaleLaw::Log, Side::Front, Component::StatorBottom),
        ScaleDefinition::new("L", "log x", ScaleLaw::Linear, Side::Front, Component::StatorBottom),
    ]
}

/// Degree rendering for the trig scales.
fn degree_formatter() -> ScaleFormatter {
    Arc::new(|value: f64| format!("{value:.2}°"))
}
