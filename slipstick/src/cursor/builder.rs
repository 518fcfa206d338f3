//! Snapshot assembly.
//!
//! One call to [`build_readings`] is one update cycle's worth of work: fetch
//! the provider's geometry, resolve the sampling coordinates, evaluate every
//! visible scale in traversal order, and wrap the results in an immutable
//! [`CursorReadings`] snapshot. The transform is pure over the provider's
//! current state and total: a scale whose evaluation has no defined value
//! still yields a reading (displayed as "—") rather than aborting the
//! snapshot.

use std::sync::Arc;

use crate::provider::{ScaleDataProvider, ScaleGroups};
use crate::scale::{format_value, Component, ScaleDefinition, Side};

use super::position::{resolve, ResolvedCoordinates};
use super::readings::{CursorReadings, ScaleReading};

/// Build one snapshot of all visible readings at the given cursor position.
///
/// # Arguments
///
/// * `raw_left_px` - Cursor left edge, pixels from the scale's left end
/// * `cursor_width_px` - Rendered cursor width in pixels
/// * `provider` - Source of scale groups and live geometry
pub fn build_readings(
    raw_left_px: f64,
    cursor_width_px: f64,
    provider: &dyn ScaleDataProvider,
) -> CursorReadings {
    let scale_width_px = provider.scale_width();
    let slide_offset_px = provider.slide_offset();
    let coords = resolve(raw_left_px, cursor_width_px, scale_width_px, slide_offset_px);

    let front = provider
        .front_scale_groups()
        .map(|groups| read_side(&groups, Side::Front, &coords))
        .unwrap_or_default();
    let back = provider
        .back_scale_groups()
        .map(|groups| read_side(&groups, Side::Back, &coords))
        .unwrap_or_default();

    CursorReadings::new(coords.fixed.clamp(0.0, 1.0), front, back)
}

/// Evaluate every scale on one side, preserving traversal order.
fn read_side(groups: &ScaleGroups, side: Side, coords: &ResolvedCoordinates) -> Vec<ScaleReading> {
    let mut readings = Vec::with_capacity(groups.len());
    for (component, definitions) in groups.in_traversal_order() {
        for definition in definitions {
            readings.push(read_scale(definition, side, component, coords));
        }
    }
    readings
}

/// Evaluate one scale at the coordinate its component dictates.
fn read_scale(
    definition: &Arc<ScaleDefinition>,
    side: Side,
    component: Component,
    coords: &ResolvedCoordinates,
) -> ScaleReading {
    let coordinate = if component.is_sliding() {
        coords.sliding
    } else {
        coords.fixed
    };
    let raw_value = definition.law.value_at(coordinate);
    let display_value = format_value(raw_value, definition);

    ScaleReading {
        scale_name: definition.name.clone(),
        formula: definition.formula.clone(),
        raw_value,
        display_value,
        side,
        component,
        definition: Arc::clone(definition),
    }
}

#[cfg(test)]
mod tests {
    use parking_lot::Mutex;

    use super::*;
    use crate::scale::ScaleLaw;

    struct TestProvider {
        front: Option<ScaleGroups>,
        back: Option<ScaleGroups>,
        geometry: Mutex<(f64, f64)>, // (scale_width_px, slide_offset_px)
    }

    impl TestProvider {
        fn front_only(front: ScaleGroups, scale_width_px: f64) -> Self {
            Self {
                front: Some(front),
                back: None,
                geometry: Mutex::new((scale_width_px, 0.0)),
            }
        }

        fn set_slide_offset(&self, px: f64) {
            self.geometry.lock().1 = px;
        }
    }

    impl ScaleDataProvider for TestProvider {
        fn front_scale_groups(&self) -> Option<ScaleGroups> {
            self.front.clone()
        }

        fn back_scale_groups(&self) -> Option<ScaleGroups> {
            self.back.clone()
        }

        fn slide_offset(&self) -> f64 {
            self.geometry.lock().1
        }

        fn scale_width(&self) -> f64 {
            self.geometry.lock().0
        }
    }

    fn def(name: &str, law: ScaleLaw, component: Component) -> Arc<ScaleDefinition> {
        Arc::new(ScaleDefinition::new(name, "x", law, Side::Front, component))
    }

    fn identity_front() -> ScaleGroups {
        ScaleGroups {
            stator_top: Vec::new(),
            slide: Vec::new(),
            stator_bottom: vec![def("C", ScaleLaw::Linear, Component::StatorBottom)],
        }
    }

    #[test]
    fn test_basic_read_on_identity_scale() {
        let provider = TestProvider::front_only(identity_front(), 1000.0);
        let snapshot = build_readings(400.0, 100.0, &provider);

        let reading = snapshot.reading_for("C", Side::Front).expect("C is visible");
        assert!((reading.raw_value - 0.45).abs() < 1e-12);
        assert_eq!(reading.display_value, "0.450");
        assert!((snapshot.cursor_position() - 0.45).abs() < 1e-12);
    }

    #[test]
    fn test_hidden_side_yields_empty_list() {
        let provider = TestProvider::front_only(identity_front(), 1000.0);
        let snapshot = build_readings(400.0, 100.0, &provider);

        assert!(snapshot.back_readings().is_empty());
        assert_eq!(snapshot.all_readings().count(), 1);
    }

    #[test]
    fn test_slide_scale_reads_sliding_coordinate() {
        let front = ScaleGroups {
            stator_top: Vec::new(),
            slide: vec![def("B", ScaleLaw::Linear, Component::Slide)],
            stator_bottom: vec![def("D", ScaleLaw::Linear, Component::StatorBottom)],
        };
        let provider = TestProvider::front_only(front, 1000.0);
        provider.set_slide_offset(250.0);

        let snapshot = build_readings(400.0, 100.0, &provider);

        let fixed = snapshot.reading_for("D", Side::Front).unwrap();
        let sliding = snapshot.reading_for("B", Side::Front).unwrap();
        assert!((fixed.raw_value - 0.45).abs() < 1e-12);
        assert!((sliding.raw_value - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_negative_sliding_coordinate_is_clamped_before_evaluation() {
        let front = ScaleGroups {
            stator_top: Vec::new(),
            slide: vec![def("B", ScaleLaw::Linear, Component::Slide)],
            stator_bottom: Vec::new(),
        };
        let provider = TestProvider::front_only(front, 1000.0);
        provider.set_slide_offset(650.0);

        // Sliding coordinate would be 0.45 - 0.65 = -0.2; clamped to 0.0
        let snapshot = build_readings(400.0, 100.0, &provider);
        let reading = snapshot.reading_for("B", Side::Front).unwrap();
        assert_eq!(reading.raw_value, 0.0);
        assert_eq!(reading.display_value, "0.00e0");
    }

    #[test]
    fn test_out_of_domain_fixed_coordinate_reads_sentinel() {
        let provider = TestProvider::front_only(identity_front(), 1000.0);
        // Hairline at 1.25, past the right edge of the scale
        let snapshot = build_readings(1200.0, 100.0, &provider);

        let reading = snapshot.reading_for("C", Side::Front).unwrap();
        assert!(reading.raw_value.is_nan());
        assert_eq!(reading.display_value, "—");
        // One undefined scale never aborts the snapshot
        assert_eq!(snapshot.len(), 1);
    }

    #[test]
    fn test_invalid_geometry_reads_sentinel_everywhere() {
        let provider = TestProvider::front_only(identity_front(), 0.0);
        let snapshot = build_readings(400.0, 100.0, &provider);

        for reading in snapshot.all_readings() {
            assert!(reading.raw_value.is_nan());
            assert_eq!(reading.display_value, "—");
        }
    }

    #[test]
    fn test_consecutive_builds_compare_equal_but_are_distinct() {
        let provider = TestProvider::front_only(identity_front(), 1000.0);
        let a = build_readings(400.0, 100.0, &provider);
        let b = build_readings(400.0, 100.0, &provider);

        assert_eq!(a, b);
        // Distinct instances: mutating nothing, but the readings are
        // separately allocated values
        assert!(!std::ptr::eq(&a, &b));
    }

    #[test]
    fn test_traversal_order_in_snapshot() {
        let front = ScaleGroups {
            stator_top: vec![def("A", ScaleLaw::LogSquared, Component::StatorTop)],
            slide: vec![
                def("B", ScaleLaw::LogSquared, Component::Slide),
                def("C", ScaleLaw::Log, Component::Slide),
            ],
            stator_bottom: vec![def("D", ScaleLaw::Log, Component::StatorBottom)],
        };
        let provider = TestProvider::front_only(front, 1000.0);
        let snapshot = build_readings(400.0, 100.0, &provider);

        let names: Vec<_> = snapshot
            .front_readings()
            .iter()
            .map(|r| r.scale_name.as_str())
            .collect();
        assert_eq!(names, ["A", "B", "C", "D"]);
    }
}
