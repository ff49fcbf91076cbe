//! Configuration system for JobRisk.
//!
//! Load application configuration from TOML or YAML files to control
//! artifact locations, the dashboard dataset, the web server and form
//! defaults without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use jobrisk_config::AppConfig;
//!
//! let config = AppConfig::from_toml_str(r#"
//!     [artifacts]
//!     model = "models/real_ai_model_lvl2.json"
//!
//!     [dataset]
//!     scatter_sample_size = 250
//!     random_seed = 7
//!
//!     [server]
//!     port = 9000
//! "#).unwrap();
//!
//! assert_eq!(config.server.port, 9000);
//! assert_eq!(config.dataset.scatter_sample_size, 250);
//! assert_eq!(config.artifacts.job_encoder.to_str(), Some("le_job.json"));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use jobrisk_config::AppConfig;
//!
//! let config = AppConfig::load("jobrisk.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main application configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    /// Locations of the training artifacts.
    #[serde(default)]
    pub artifacts: ArtifactConfig,

    /// Historical dataset for the dashboard.
    #[serde(default)]
    pub dataset: DatasetConfig,

    /// Web server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Initial values of the scoring form.
    #[serde(default)]
    pub form: FormConfig,
}

impl AppConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, picking the format by extension.
    ///
    /// `.yaml` and `.yml` are parsed as YAML, anything else as TOML.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, fails to parse or is invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path)?,
            _ => Self::from_toml_file(path)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Places all three artifacts under `dir` with their default names.
    pub fn with_artifact_dir(mut self, dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        self.artifacts = ArtifactConfig {
            model: dir.join(DEFAULT_MODEL_PATH),
            job_encoder: dir.join(DEFAULT_JOB_ENCODER_PATH),
            education_encoder: dir.join(DEFAULT_EDUCATION_ENCODER_PATH),
        };
        self
    }

    /// Sets the dataset path.
    pub fn with_dataset(mut self, path: impl Into<PathBuf>) -> Self {
        self.dataset.path = path.into();
        self
    }

    /// Sets the scatter sampling seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.dataset.random_seed = Some(seed);
        self
    }

    /// Sets the server port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.server.port = port;
        self
    }

    /// Checks values the types alone cannot enforce.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dataset.scatter_sample_size == 0 {
            return Err(ConfigError::Invalid(
                "dataset.scatter_sample_size must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.form.ai_exposure) {
            return Err(ConfigError::Invalid(format!(
                "form.ai_exposure must be within [0, 1], got {}",
                self.form.ai_exposure
            )));
        }
        if self.form.years_experience > 40 {
            return Err(ConfigError::Invalid(format!(
                "form.years_experience must be within [0, 40], got {}",
                self.form.years_experience
            )));
        }
        Ok(())
    }
}

/// Default model path.
pub const DEFAULT_MODEL_PATH: &str = "real_ai_model_lvl2.json";

/// Default job-title encoder path.
pub const DEFAULT_JOB_ENCODER_PATH: &str = "le_job.json";

/// Default education-level encoder path.
pub const DEFAULT_EDUCATION_ENCODER_PATH: &str = "le_edu.json";

/// Default dataset path.
pub const DEFAULT_DATASET_PATH: &str = "AI_Impact_on_Jobs_2030.csv";

/// Artifact locations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ArtifactConfig {
    /// Regressor artifact.
    pub model: PathBuf,

    /// Job-title encoder artifact.
    pub job_encoder: PathBuf,

    /// Education-level encoder artifact.
    pub education_encoder: PathBuf,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            model: PathBuf::from(DEFAULT_MODEL_PATH),
            job_encoder: PathBuf::from(DEFAULT_JOB_ENCODER_PATH),
            education_encoder: PathBuf::from(DEFAULT_EDUCATION_ENCODER_PATH),
        }
    }
}

/// Dashboard dataset configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct DatasetConfig {
    /// CSV file with the historical records.
    pub path: PathBuf,

    /// Maximum points drawn in the scatter plot.
    pub scatter_sample_size: usize,

    /// Seed for reproducible scatter samples.
    pub random_seed: Option<u64>,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DATASET_PATH),
            scatter_sample_size: 500,
            random_seed: None,
        }
    }
}

/// Web server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ServerConfig {
    /// Bind address.
    pub host: IpAddr,

    /// Bind port.
    pub port: u16,

    /// Directory served for non-API paths.
    pub static_dir: PathBuf,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            static_dir: PathBuf::from("static"),
        }
    }
}

/// Initial values of the scoring form.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct FormConfig {
    /// Job title preselected when it is a known label.
    pub preferred_job: String,

    /// Initial AI exposure slider value.
    pub ai_exposure: f64,

    /// Initial years of experience.
    pub years_experience: u32,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            preferred_job: "Data Scientist".to_string(),
            ai_exposure: 0.5,
            years_experience: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_parsing() {
        let toml = r#"
            [artifacts]
            model = "out/model.json"
            job_encoder = "out/le_job.json"
            education_encoder = "out/le_edu.json"

            [dataset]
            path = "data/jobs.csv"
            random_seed = 42

            [server]
            host = "127.0.0.1"
            port = 3000

            [form]
            preferred_job = "Nurse"
        "#;

        let config = AppConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.artifacts.model, PathBuf::from("out/model.json"));
        assert_eq!(config.dataset.random_seed, Some(42));
        assert_eq!(config.dataset.scatter_sample_size, 500);
        assert_eq!(config.server.socket_addr().to_string(), "127.0.0.1:3000");
        assert_eq!(config.form.preferred_job, "Nurse");
        assert_eq!(config.form.years_experience, 5);
    }

    #[test]
    fn test_yaml_parsing() {
        let yaml = r#"
            dataset:
              path: data/jobs.csv
              scatter_sample_size: 100
            form:
              ai_exposure: 0.25
        "#;

        let config = AppConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.dataset.scatter_sample_size, 100);
        assert_eq!(config.form.ai_exposure, 0.25);
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.artifacts.model, PathBuf::from("real_ai_model_lvl2.json"));
        assert_eq!(config.dataset.path, PathBuf::from("AI_Impact_on_Jobs_2030.csv"));
        assert_eq!(config.form.preferred_job, "Data Scientist");
        assert_eq!(config.form.ai_exposure, 0.5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = AppConfig::new()
            .with_artifact_dir("models")
            .with_dataset("data/jobs.csv")
            .with_random_seed(123)
            .with_port(9090);

        assert_eq!(config.artifacts.job_encoder, Path::new("models").join("le_job.json"));
        assert_eq!(config.dataset.random_seed, Some(123));
        assert_eq!(config.server.port, 9090);
    }

    #[test]
    fn test_validate_rejects_bad_form_defaults() {
        let mut config = AppConfig::default();
        config.form.ai_exposure = 1.5;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = AppConfig::default();
        config.form.years_experience = 41;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.dataset.scatter_sample_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_by_extension() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path();

        let yaml = dir.join("app.yaml");
        std::fs::write(&yaml, "server:\n  port: 7000\n").unwrap();
        assert_eq!(AppConfig::load(&yaml).unwrap().server.port, 7000);

        let toml = dir.join("app.toml");
        std::fs::write(&toml, "[server]\nport = 7001\n").unwrap();
        assert_eq!(AppConfig::load(&toml).unwrap().server.port, 7001);

        assert!(matches!(
            AppConfig::load(dir.join("missing.toml")),
            Err(ConfigError::Io(_))
        ));
    }
}
