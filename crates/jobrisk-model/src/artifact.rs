//! Artifact file formats and loading.

use std::path::{Path, PathBuf};

use jobrisk_core::{
    EncoderDomain, Encoders, FeatureVector, JobRiskError, LabelEncoder, RiskModel,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ArtifactError;
use crate::linear::LinearModel;
use crate::tree::TreeEnsemble;

/// A serialized regressor, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    Linear(LinearModel),
    TreeEnsemble(TreeEnsemble),
}

impl ModelArtifact {
    /// Loads and validates a model artifact.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let model: ModelArtifact = read_json(path.as_ref())?;
        model.validate()?;
        Ok(model)
    }

    /// Parses and validates a model artifact from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self, ArtifactError> {
        let model: ModelArtifact = serde_json::from_str(s)?;
        model.validate()?;
        Ok(model)
    }

    pub fn validate(&self) -> Result<(), ArtifactError> {
        match self {
            ModelArtifact::Linear(m) => m.validate(),
            ModelArtifact::TreeEnsemble(m) => m.validate(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ModelArtifact::Linear(_) => "linear",
            ModelArtifact::TreeEnsemble(_) => "tree_ensemble",
        }
    }
}

impl RiskModel for ModelArtifact {
    fn predict(&self, features: &FeatureVector) -> jobrisk_core::Result<f64> {
        let raw = match self {
            ModelArtifact::Linear(m) => m.predict(features),
            ModelArtifact::TreeEnsemble(m) => m.predict(features),
        };
        if raw.is_finite() {
            Ok(raw)
        } else {
            Err(JobRiskError::ModelFailure(format!(
                "{} model produced non-finite output {}",
                self.kind(),
                raw
            )))
        }
    }

    fn describe(&self) -> String {
        match self {
            ModelArtifact::Linear(_) => "linear regressor".to_string(),
            ModelArtifact::TreeEnsemble(m) => {
                format!("tree ensemble ({} trees, {:?})", m.trees.len(), m.aggregation)
            }
        }
    }
}

/// A serialized label encoder: code = position in `classes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncoderArtifact {
    pub classes: Vec<String>,
}

impl EncoderArtifact {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        read_json(path.as_ref())
    }

    pub fn into_encoder(self, domain: EncoderDomain) -> Result<LabelEncoder, ArtifactError> {
        Ok(LabelEncoder::new(domain, self.classes)?)
    }
}

/// Locations of the three training artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub model: PathBuf,
    pub job_encoder: PathBuf,
    pub education_encoder: PathBuf,
}

impl ArtifactPaths {
    pub fn new(
        model: impl Into<PathBuf>,
        job_encoder: impl Into<PathBuf>,
        education_encoder: impl Into<PathBuf>,
    ) -> Self {
        Self {
            model: model.into(),
            job_encoder: job_encoder.into(),
            education_encoder: education_encoder.into(),
        }
    }
}

/// The model together with its encoders.
#[derive(Debug, Clone)]
pub struct LoadedArtifacts {
    pub model: ModelArtifact,
    pub encoders: Encoders,
}

impl LoadedArtifacts {
    /// Loads all three artifacts; any failure is fatal for the caller.
    pub fn load(paths: &ArtifactPaths) -> Result<Self, ArtifactError> {
        let model = ModelArtifact::load(&paths.model)?;
        let job = EncoderArtifact::load(&paths.job_encoder)?.into_encoder(EncoderDomain::JobTitle)?;
        let education = EncoderArtifact::load(&paths.education_encoder)?
            .into_encoder(EncoderDomain::EducationLevel)?;

        info!(
            event = "artifacts_loaded",
            model = %model.describe(),
            job_labels = job.len() as u64,
            education_labels = education.len() as u64,
        );

        Ok(Self {
            model,
            encoders: Encoders::new(job, education)?,
        })
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    if !path.exists() {
        return Err(ArtifactError::Missing {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&contents)?)
}
