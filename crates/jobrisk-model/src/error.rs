//! Artifact loading errors.

use std::path::PathBuf;

use thiserror::Error;

/// Error raised while loading a model or encoder artifact.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("artifact not found: {}", path.display())]
    Missing { path: PathBuf },

    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid artifact: {0}")]
    Invalid(String),
}

impl From<jobrisk_core::JobRiskError> for ArtifactError {
    fn from(err: jobrisk_core::JobRiskError) -> Self {
        ArtifactError::Invalid(err.to_string())
    }
}

impl ArtifactError {
    /// Returns true if the artifact file does not exist.
    pub fn is_missing(&self) -> bool {
        matches!(self, ArtifactError::Missing { .. })
    }
}
