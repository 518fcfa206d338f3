//! CLI error type.

use std::fmt;

use slipstick::InstrumentError;

/// Errors surfaced to the terminal user.
#[derive(Debug)]
pub enum CliError {
    /// Instrument configuration was rejected.
    Instrument(InstrumentError),
    /// An argument was out of range or inconsistent.
    InvalidArgument(String),
    /// Snapshot export failed.
    Serialize(serde_json::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Instrument(err) => write!(f, "invalid instrument: {}", err),
            CliError::InvalidArgument(msg) => write!(f, "{}", msg),
            CliError::Serialize(err) => write!(f, "failed to serialize readings: {}", err),
        }
    }
}

impl std::error::Error for CliError {}

impl From<InstrumentError> for CliError {
    fn from(err: InstrumentError) -> Self {
        CliError::Instrument(err)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Serialize(err)
    }
}
