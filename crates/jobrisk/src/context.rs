//! Process-wide application context built once at startup.

use jobrisk_config::{AppConfig, ConfigError};
use jobrisk_dashboard::{DashboardState, ScatterSampler};
use jobrisk_model::{ArtifactError, ArtifactPaths, LoadedArtifacts, ModelArtifact};
use jobrisk_scoring::RiskScorer;
use thiserror::Error;
use tracing::info;

/// Errors that prevent the application from serving any request.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("model artifacts not found ({0}); run the training step first")]
    MissingArtifacts(#[source] ArtifactError),

    #[error("model artifacts are unusable: {0}")]
    Artifacts(#[source] ArtifactError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<ArtifactError> for StartupError {
    fn from(err: ArtifactError) -> Self {
        if err.is_missing() {
            StartupError::MissingArtifacts(err)
        } else {
            StartupError::Artifacts(err)
        }
    }
}

/// Immutable state shared by every request.
///
/// Holds the scorer (model plus encoders), the dashboard dataset and the
/// configuration. Nothing in it changes after [`AppContext::load`].
pub struct AppContext {
    config: AppConfig,
    scorer: RiskScorer<ModelArtifact>,
    dashboard: DashboardState,
}

impl AppContext {
    /// Loads artifacts and dataset as described by `config`.
    ///
    /// # Errors
    ///
    /// Fails if the configuration is invalid or any artifact is missing or
    /// malformed. A missing dataset is not an error; the dashboard is
    /// reported unavailable instead.
    pub fn load(config: AppConfig) -> Result<Self, StartupError> {
        config.validate()?;

        let paths = ArtifactPaths::new(
            &config.artifacts.model,
            &config.artifacts.job_encoder,
            &config.artifacts.education_encoder,
        );
        let artifacts = LoadedArtifacts::load(&paths)?;
        let dashboard = DashboardState::load(&config.dataset.path);

        Ok(Self::new(config, artifacts, dashboard))
    }

    /// Assembles a context from already loaded parts.
    pub fn new(config: AppConfig, artifacts: LoadedArtifacts, dashboard: DashboardState) -> Self {
        info!(
            event = "context_ready",
            dashboard = dashboard.is_available(),
        );
        Self {
            scorer: RiskScorer::new(artifacts.model, artifacts.encoders),
            config,
            dashboard,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn scorer(&self) -> &RiskScorer<ModelArtifact> {
        &self.scorer
    }

    pub fn dashboard(&self) -> &DashboardState {
        &self.dashboard
    }

    /// Scatter sampling settings from the dataset configuration.
    pub fn sampler(&self) -> ScatterSampler {
        ScatterSampler::new(
            self.config.dataset.scatter_sample_size,
            self.config.dataset.random_seed,
        )
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use jobrisk_scoring::ScoringRequest;
    use jobrisk_test::dataset::SAMPLE_CSV;

    use super::*;

    const MODEL: &str = r#"{
        "kind": "linear",
        "intercept": 40.0,
        "coefficients": [0.0, 0.0, 0.0, -2.0, 10.0, 5.0]
    }"#;

    fn write_artifacts(dir: &std::path::Path) {
        fs::write(dir.join("real_ai_model_lvl2.json"), MODEL).unwrap();
        fs::write(
            dir.join("le_job.json"),
            r#"{ "classes": ["Accountant", "Data Scientist"] }"#,
        )
        .unwrap();
        fs::write(
            dir.join("le_edu.json"),
            r#"{ "classes": ["Bachelor's", "Master's"] }"#,
        )
        .unwrap();
    }

    #[test]
    fn test_load_full_context() {
        let dir = tempfile::tempdir().unwrap();
        write_artifacts(dir.path());
        fs::write(dir.path().join("jobs.csv"), SAMPLE_CSV).unwrap();

        let config = AppConfig::new()
            .with_artifact_dir(dir.path())
            .with_dataset(dir.path().join("jobs.csv"));
        let ctx = AppContext::load(config).unwrap();

        assert!(ctx.dashboard().is_available());
        let result = ctx
            .scorer()
            .score(&ScoringRequest::new("Data Scientist", "Bachelor's", 0.5, 5))
            .unwrap();
        assert_eq!(result.risk.value(), 30.0);
        assert_eq!(ctx.sampler().limit, 500);
    }

    #[test]
    fn test_missing_dataset_degrades() {
        let dir = tempfile::tempdir().unwrap();
        write_artifacts(dir.path());

        let config = AppConfig::new()
            .with_artifact_dir(dir.path())
            .with_dataset(dir.path().join("absent.csv"));
        let ctx = AppContext::load(config).unwrap();

        assert!(!ctx.dashboard().is_available());
        assert!(ctx
            .scorer()
            .score(&ScoringRequest::new("Accountant", "Master's", 1.0, 40))
            .is_ok());
    }

    #[test]
    fn test_missing_artifacts_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::new().with_artifact_dir(dir.path());

        let err = AppContext::load(config).err().unwrap();
        assert!(matches!(err, StartupError::MissingArtifacts(_)));
        assert!(err.to_string().contains("run the training step first"));
    }

    #[test]
    fn test_malformed_artifact_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write_artifacts(dir.path());
        fs::write(dir.path().join("real_ai_model_lvl2.json"), "{ not json").unwrap();

        let config = AppConfig::new().with_artifact_dir(dir.path());
        assert!(matches!(
            AppContext::load(config),
            Err(StartupError::Artifacts(_))
        ));
    }

    #[test]
    fn test_invalid_config_is_fatal() {
        let mut config = AppConfig::new();
        config.dataset.scatter_sample_size = 0;
        assert!(matches!(
            AppContext::load(config),
            Err(StartupError::Config(_))
        ));
    }
}
