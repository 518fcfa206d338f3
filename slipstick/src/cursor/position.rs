//! Cursor position resolution.
//!
//! Converts the raw cursor left-edge coordinate into the two logical
//! sampling coordinates the pipeline needs. The cursor's reference line
//! (the hairline) sits at its visual center, not its left edge, so the
//! resolver shifts by half the cursor width before normalizing.
//!
//! The fixed and sliding coordinates are independent degrees of freedom: a
//! slide drag must change only the sliding scales' readings while the
//! cursor stays put, and vice versa. Clamping policy lives in exactly one
//! place, the sliding branch; the fixed coordinate passes through unclamped
//! and out-of-range samples are absorbed by the scale laws' own boundary
//! check.

/// The two sampling coordinates produced from one cursor position.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedCoordinates {
    /// Hairline coordinate for stator scales, unclamped.
    pub fixed: f64,
    /// Hairline coordinate shifted by the slide offset, clamped to `[0, 1]`.
    pub sliding: f64,
}

/// Resolve a raw cursor position into sampling coordinates.
///
/// # Arguments
///
/// * `raw_left_px` - Cursor left edge, pixels from the scale's left end
/// * `cursor_width_px` - Rendered cursor width in pixels
/// * `scale_width_px` - Total scale width in pixels; must be positive
/// * `slide_offset_px` - Signed slide displacement in pixels
///
/// A zero, negative, or non-finite scale width has no valid coordinate and
/// yields `NaN` for both fields rather than a division blow-up.
pub fn resolve(
    raw_left_px: f64,
    cursor_width_px: f64,
    scale_width_px: f64,
    slide_offset_px: f64,
) -> ResolvedCoordinates {
    if !scale_width_px.is_finite() || scale_width_px <= 0.0 {
        return ResolvedCoordinates {
            fixed: f64::NAN,
            sliding: f64::NAN,
        };
    }

    let hairline = (raw_left_px + cursor_width_px / 2.0) / scale_width_px;
    // Scales are undefined outside [0, 1]; clamp preserves NaN
    let sliding = (hairline - slide_offset_px / scale_width_px).clamp(0.0, 1.0);

    ResolvedCoordinates {
        fixed: hairline,
        sliding,
    }
}
