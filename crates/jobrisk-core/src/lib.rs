//! JobRisk Core - Core types and traits for automation-risk scoring
//!
//! This crate provides the fundamental abstractions for JobRisk:
//! - Label encoders mapping categorical labels to model codes
//! - The fixed-order feature vector consumed by the risk model
//! - Risk score, risk bucket and advice types
//! - The `RiskModel` trait implemented by every predictor

pub mod encoder;
pub mod error;
pub mod features;
pub mod model;
pub mod risk;

#[cfg(test)]
mod encoder_tests;

pub use encoder::{EncoderDomain, Encoders, LabelEncoder};
pub use error::{JobRiskError, Result};
pub use features::{FeatureVector, SkillAxis, FEATURE_COUNT, FEATURE_NAMES};
pub use model::RiskModel;
pub use risk::{Advice, RiskBucket, RiskScore};
