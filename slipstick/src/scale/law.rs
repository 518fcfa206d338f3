//! Mathematical laws of the scales.
//!
//! Each law is a pure, O(1) mapping between a normalized coordinate in
//! `[0, 1]` and a real value, together with its inverse. Out-of-domain
//! input yields `NaN` rather than a panic; the boundary check here is what
//! lets the position resolver leave the fixed coordinate unclamped.

/// Mathematical law of a scale: how a normalized coordinate maps to a value.
///
/// The variants correspond to the classic slide rule scales:
///
/// | Law           | Scale | `value_at(x)`                |
/// |---------------|-------|------------------------------|
/// | `Linear`      | L     | `x`                          |
/// | `Log`         | C, D  | `10^x`                       |
/// | `LogSquared`  | A, B  | `10^(2x)`                    |
/// | `LogCubed`    | K     | `10^(3x)`                    |
/// | `InvertedLog` | CI    | `10^(1-x)`                   |
/// | `Sine`        | S     | `asin(10^(x-1))` in degrees  |
/// | `Tangent`     | T     | `atan(10^(x-1))` in degrees  |
/// | `SmallAngle`  | ST    | `asin(10^(x-2))` in degrees  |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleLaw {
    /// Identity mapping; the L (mantissa) scale.
    Linear,
    /// Single-decade logarithmic; the C and D scales.
    Log,
    /// Two-decade logarithmic; the A and B scales.
    LogSquared,
    /// Three-decade logarithmic; the K scale.
    LogCubed,
    /// Reciprocal of the C scale; the CI scale.
    InvertedLog,
    /// Angles whose sine spans one decade; the S scale.
    Sine,
    /// Angles whose tangent spans one decade; the T scale.
    Tangent,
    /// Small angles where sine and tangent coincide; the ST scale.
    SmallAngle,
}

impl ScaleLaw {
    /// Evaluate the scale at a normalized coordinate.
    ///
    /// Returns `NaN` when `coordinate` falls outside `[0, 1]` (including
    /// `NaN` input); scales are undefined beyond their physical length and
    /// never extrapolate.
    pub fn value_at(&self, coordinate: f64) -> f64 {
        if !(0.0..=1.0).contains(&coordinate) {
            return f64::NAN;
        }
        match self {
            ScaleLaw::Linear => coordinate,
            ScaleLaw::Log => 10f64.powf(coordinate),
            ScaleLaw::LogSquared => 10f64.powf(2.0 * coordinate),
            ScaleLaw::LogCubed => 10f64.powf(3.0 * coordinate),
            ScaleLaw::InvertedLog => 10f64.powf(1.0 - coordinate),
            ScaleLaw::Sine => 10f64.powf(coordinate - 1.0).asin().to_degrees(),
            ScaleLaw::Tangent => 10f64.powf(coordinate - 1.0).atan().to_degrees(),
            ScaleLaw::SmallAngle => 10f64.powf(coordinate - 2.0).asin().to_degrees(),
        }
    }

    /// Invert the scale: find the coordinate that reads `value`.
    ///
    /// Inverse of [`value_at`](Self::value_at) wherever the law is monotonic
    /// and defined. Returns `NaN` when `value` lies outside the scale's
    /// range (the resulting coordinate would fall outside `[0, 1]`).
    pub fn coordinate_of(&self, value: f64) -> f64 {
        let coordinate = match self {
            ScaleLaw::Linear => value,
            ScaleLaw::Log => value.log10(),
            ScaleLaw::LogSquared => value.log10() / 2.0,
            ScaleLaw::LogCubed => value.log10() / 3.0,
            ScaleLaw::InvertedLog => 1.0 - value.log10(),
            ScaleLaw::Sine => 1.0 + value.to_radians().sin().log10(),
            ScaleLaw::Tangent => 1.0 + value.to_radians().tan().log10(),
            ScaleLaw::SmallAngle => 2.0 + value.to_radians().sin().log10(),
        };
        if (0.0..=1.0).contains(&coordinate) {
            coordinate
        } else {
            f64::NAN
        }
    }
}
