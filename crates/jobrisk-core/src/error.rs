//! Error types for JobRisk

use thiserror::Error;

use crate::encoder::EncoderDomain;

/// Main error type for JobRisk operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum JobRiskError {
    /// A label was not part of the encoder's known set
    #[error("Unknown {domain} label: {label:?}")]
    UnknownLabel { domain: EncoderDomain, label: String },

    /// A numeric input fell outside its inclusive domain
    #[error("{field} must be within [{min}, {max}], got {value}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },

    /// The risk model failed to produce a usable prediction
    #[error("Model failure: {0}")]
    ModelFailure(String),

    /// An artifact (encoder, model) violates its structural invariants
    #[error("Invalid artifact: {0}")]
    InvalidArtifact(String),

    /// Invalid operation for the current scoring state
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

impl JobRiskError {
    /// Returns true if the error was caused by the request itself
    /// rather than by the model or the loaded artifacts.
    pub fn is_request_error(&self) -> bool {
        matches!(self, Self::UnknownLabel { .. } | Self::OutOfRange { .. })
    }
}

/// Result type alias for JobRisk operations
pub type Result<T> = std::result::Result<T, JobRiskError>;
