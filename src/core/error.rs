//! Error types for simulation operations.

use thiserror::Error;

/// Errors surfaced by the simulation API.
///
/// Degenerate physics (coincident centers, an empty shape list) is not an
/// error; those cases are handled silently by the step.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    /// Viewport dimensions must be finite and positive.
    #[error("invalid viewport bounds {width}x{height}")]
    InvalidBounds { width: f32, height: f32 },
    /// A shape descriptor could not be turned into a body.
    #[error("invalid shape #{index}: {reason}")]
    InvalidShape { index: usize, reason: &'static str },
    /// No body is registered under this id.
    #[error("unknown body id {0}")]
    UnknownBody(u32),
    /// Page flow only moves forward (landing -> gallery -> closing).
    #[error("cannot switch page from {from} to {to}")]
    InvalidTransition { from: &'static str, to: &'static str },
    /// Configuration failed to parse or validate.
    #[error("config error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for SimError {
    fn from(e: serde_json::Error) -> Self {
        SimError::Config(e.to_string())
    }
}
