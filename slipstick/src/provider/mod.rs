//! Scale data access abstraction.
//!
//! The pipeline never talks to a concrete view hierarchy or configuration
//! store; it queries a narrow [`ScaleDataProvider`] interface implemented by
//! whatever owns the live instrument. Mock implementations back the test
//! suite, and [`InstrumentProvider`] is the stock implementation over a
//! configured [`Instrument`](crate::instrument::Instrument).

mod instrument;

use std::sync::Arc;

use crate::scale::{Component, ScaleDefinition};

pub use instrument::InstrumentProvider;

/// Ordered scale groups for one side of the instrument.
///
/// Traversal order is fixed: top stator, then slide, then bottom stator.
/// Within a group, definitions keep their configured order.
#[derive(Debug, Clone, Default)]
pub struct ScaleGroups {
    /// Scales on the fixed bar above the slide.
    pub stator_top: Vec<Arc<ScaleDefinition>>,
    /// Scales on the movable center bar.
    pub slide: Vec<Arc<ScaleDefinition>>,
    /// Scales on the fixed bar below the slide.
    pub stator_bottom: Vec<Arc<ScaleDefinition>>,
}

impl ScaleGroups {
    /// Total number of scales across the three groups.
    pub fn len(&self) -> usize {
        self.stator_top.len() + self.slide.len() + self.stator_bottom.len()
    }

    /// Whether the side carries no scales at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The groups in reading-traversal order, tagged with their component.
    pub fn in_traversal_order(&self) -> [(Component, &[Arc<ScaleDefinition>]); 3] {
        [
            (Component::StatorTop, self.stator_top.as_slice()),
            (Component::Slide, self.slide.as_slice()),
            (Component::StatorBottom, self.stator_bottom.as_slice()),
        ]
    }
}

/// Read-only access to the instrument's visible scales and live geometry.
///
/// Implemented by the host application (or [`InstrumentProvider`]). Calls
/// must be side-effect-free and may be issued multiple times per update
/// cycle; answers must be internally consistent within one cycle, though
/// they may change between cycles (e.g. a different instrument swapped in)
/// without any invalidation handshake.
pub trait ScaleDataProvider: Send + Sync {
    /// The front side's scale groups, or `None` when that side is hidden.
    fn front_scale_groups(&self) -> Option<ScaleGroups>;

    /// The back side's scale groups, or `None` when that side is hidden.
    fn back_scale_groups(&self) -> Option<ScaleGroups>;

    /// Current slide displacement in pixels, signed.
    fn slide_offset(&self) -> f64;

    /// Total scale width in pixels; expected positive.
    fn scale_width(&self) -> f64;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::{ScaleLaw, Side};

    fn def(name: &str, component: Component) -> Arc<ScaleDefinition> {
        Arc::new(ScaleDefinition::new(
            name,
            "x",
            ScaleLaw::Log,
            Side::Front,
            component,
        ))
    }

    #[test]
    fn test_traversal_order_is_top_slide_bottom() {
        let groups = ScaleGroups {
            stator_top: vec![def("A", Component::StatorTop)],
            slide: vec![def("B", Component::Slide), def("C", Component::Slide)],
            stator_bottom: vec![def("D", Component::StatorBottom)],
        };

        let names: Vec<_> = groups
            .in_traversal_order()
            .into_iter()
            .flat_map(|(_, defs)| defs.iter().map(|d| d.name.clone()).collect::<Vec<_>>())
            .collect();
        assert_eq!(names, ["A", "B", "C", "D"]);
        assert_eq!(groups.len(), 4);
    }

    #[test]
    fn test_empty_groups() {
        let groups = ScaleGroups::default();
        assert!(groups.is_empty());
        assert_eq!(groups.len(), 0);
    }
}
