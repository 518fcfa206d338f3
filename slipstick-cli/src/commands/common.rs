//! Shared argument types for CLI commands.

use clap::ValueEnum;
use slipstick::Instrument;

use crate::error::CliError;

/// Instrument layout presets selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Layout {
    /// Single-sided Mannheim layout (A, B, CI, C, D, L).
    Mannheim,
    /// Two-sided duplex layout with trig scales on the back.
    Duplex,
}

impl Layout {
    /// Build the preset instrument for this layout.
    pub fn instrument(&self) -> Instrument {
        match self {
            Layout::Mannheim => Instrument::mannheim(),
            Layout::Duplex => Instrument::duplex(),
        }
    }
}

/// Validate a hairline position argument.
pub fn validate_position(position: f64) -> Result<f64, CliError> {
    if !(0.0..=1.0).contains(&position) {
        return Err(CliError::InvalidArgument(format!(
            "position {} is outside [0, 1]",
            position
        )));
    }
    Ok(position)
}

/// Validate a scale width argument.
pub fn validate_width(scale_width_px: f64) -> Result<f64, CliError> {
    if !scale_width_px.is_finite() || scale_width_px <= 0.0 {
        return Err(CliError::InvalidArgument(format!(
            "scale width {} must be positive",
            scale_width_px
        )));
    }
    Ok(scale_width_px)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_builds_matching_instrument() {
        assert_eq!(Layout::Mannheim.instrument().name(), "Mannheim");
        assert_eq!(Layout::Duplex.instrument().name(), "Duplex");
    }

    #[test]
    fn test_validate_position_bounds() {
        assert!(validate_position(0.0).is_ok());
        assert!(validate_position(1.0).is_ok());
        assert!(validate_position(1.5).is_err());
        assert!(validate_position(-0.1).is_err());
    }

    #[test]
    fn test_validate_width_rejects_degenerate_values() {
        assert!(validate_width(1080.0).is_ok());
        assert!(validate_width(0.0).is_err());
        assert!(validate_width(f64::NAN).is_err());
    }
}
