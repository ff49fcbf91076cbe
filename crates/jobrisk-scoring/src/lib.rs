//! Automation-risk scoring for JobRisk.
//!
//! This crate turns a form submission into a clamped risk score and runs
//! the upskilling simulator:
//! - Request validation and encoding (`RiskScorer::assemble`)
//! - Baseline scoring with clamping to `[0, 100]`
//! - Two independent single-flag counterfactuals (tech, soft skills)
//!
//! # Example
//!
//! ```
//! use jobrisk_core::{EncoderDomain, Encoders, FeatureVector, LabelEncoder, RiskModel};
//! use jobrisk_scoring::{RiskScorer, ScoringRequest};
//!
//! struct Flat;
//!
//! impl RiskModel for Flat {
//!     fn predict(&self, v: &FeatureVector) -> jobrisk_core::Result<f64> {
//!         Ok(if v.tech_skills { 40.0 } else { 55.0 })
//!     }
//! }
//!
//! let encoders = Encoders::new(
//!     LabelEncoder::new(EncoderDomain::JobTitle, ["Data Scientist"]).unwrap(),
//!     LabelEncoder::new(EncoderDomain::EducationLevel, ["Bachelor's"]).unwrap(),
//! ).unwrap();
//!
//! let scorer = RiskScorer::new(Flat, encoders);
//! let result = scorer
//!     .score(&ScoringRequest::new("Data Scientist", "Bachelor's", 0.5, 5))
//!     .unwrap();
//!
//! assert_eq!(result.risk.value(), 55.0);
//! assert_eq!(result.tech.delta(), Some(15.0));
//! ```

pub mod outcome;
pub mod request;
pub mod scorer;
pub mod session;


pub use outcome::{Direction, ScoringResult, SkillSimulation, ALREADY_PRESENT_LABEL};
pub use request::{
    ScoringRequest, AI_EXPOSURE_MAX, AI_EXPOSURE_MIN, EXPERIENCE_MAX, EXPERIENCE_MIN,
};
pub use scorer::RiskScorer;
pub use session::{ScoringPhase, ScoringSession};
