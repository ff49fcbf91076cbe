//! JobRisk - Automation Risk Scoring in Rust
//!
//! Load the training artifacts once, then score form submissions and run
//! the upskilling simulator against them.
//!
//! # Example
//!
//! ```rust
//! use jobrisk::prelude::*;
//!
//! let risk = RiskScore::clamped(142.0);
//! assert_eq!(risk.value(), 100.0);
//! assert_eq!(risk.bucket(), RiskBucket::High);
//! ```

// Core types
pub use jobrisk_core::{
    Advice, EncoderDomain, Encoders, FeatureVector, JobRiskError, LabelEncoder, RiskBucket,
    RiskModel, RiskScore, SkillAxis, FEATURE_COUNT, FEATURE_NAMES,
};

// Artifacts
pub use jobrisk_model::{
    ArtifactError, ArtifactPaths, LinearModel, LoadedArtifacts, ModelArtifact, TreeEnsemble,
};

// Scoring service
pub use jobrisk_scoring::{
    Direction, RiskScorer, ScoringPhase, ScoringRequest, ScoringResult, ScoringSession,
    SkillSimulation, AI_EXPOSURE_MAX, AI_EXPOSURE_MIN, EXPERIENCE_MAX, EXPERIENCE_MIN,
};

// Dashboard
pub use jobrisk_dashboard::{
    DashboardState, Dataset, EducationRiskChart, ExposureScatterChart, HistoricalRecord,
    ScatterSampler,
};

// Configuration
pub use jobrisk_config::{AppConfig, ConfigError};

mod context;
pub use context::{AppContext, StartupError};

#[cfg(feature = "console")]
pub use jobrisk_console as console;

pub mod prelude {
    pub use super::{Advice, RiskBucket, RiskModel, RiskScore, SkillAxis};
    pub use super::{AppConfig, AppContext};
    pub use super::{RiskScorer, ScoringRequest, ScoringResult, SkillSimulation};
}
