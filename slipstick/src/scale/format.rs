//! Display formatting for scale readings.
//!
//! Readings are shown at a precision that tracks their magnitude: a value
//! near 2 deserves three decimals, a value near 900 deserves one. The ladder
//! here is total over all finite doubles and locale-independent, so the same
//! raw value always renders the same string.

use super::definition::ScaleDefinition;

/// Sentinel shown for readings with no defined value.
pub const NON_FINITE_SENTINEL: &str = "—";

/// Tolerance for treating a value as a whole number.
const INTEGER_EPSILON: f64 = 1e-9;

/// Format a raw reading for display according to the owning definition.
///
/// Non-finite values render as [`NON_FINITE_SENTINEL`]. A custom formatter
/// on the definition is delegated to exclusively, with no post-processing;
/// otherwise the default magnitude ladder applies.
pub fn format_value(value: f64, definition: &ScaleDefinition) -> String {
    if !value.is_finite() {
        return NON_FINITE_SENTINEL.to_string();
    }
    if let Some(custom) = definition.formatter() {
        return custom(value);
    }
    default_format(value)
}

/// Default magnitude-based formatting policy.
///
/// Evaluated in precedence order:
///
/// 1. magnitude below 0.001 → scientific, two fractional digits ("1.23e-4")
/// 2. within 1e-9 of an integer → integer string
/// 3. magnitude below 1 → three decimals
/// 4. magnitude below 100 → two decimals
/// 5. magnitude below 1000 → one decimal
/// 6. otherwise → rounded whole number
pub fn default_format(value: f64) -> String {
    if !value.is_finite() {
        return NON_FINITE_SENTINEL.to_string();
    }
    let magnitude = value.abs();
    if magnitude < 0.001 {
        return format!("{:.2e}", value);
    }
    if (value - value.round()).abs() < INTEGER_EPSILON {
        return format!("{:.0}", value.round());
    }
    if magnitude < 1.0 {
        format_rounded(value, 3)
    } else if magnitude < 100.0 {
        format_rounded(value, 2)
    } else if magnitude < 1000.0 {
        format_rounded(value, 1)
    } else {
        // f64::round ties away from zero
        format!("{:.0}", value.round())
    }
}

/// Round half away from zero to `decimals` places, then render fixed-width.
fn format_rounded(value: f64, decimals: usize) -> String {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    format!("{:.*}", decimals, rounded)
}
