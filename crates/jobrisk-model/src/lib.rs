//! Model and encoder artifacts for JobRisk.
//!
//! The training step exports three JSON files: the regressor and one label
//! encoder per categorical feature. This crate loads and validates them and
//! implements [`RiskModel`](jobrisk_core::RiskModel) for the regressor.
//!
//! - [`LinearModel`]: intercept plus one coefficient per feature
//! - [`TreeEnsemble`]: random forest or gradient-boosted trees
//!
//! # Example
//!
//! ```
//! use jobrisk_core::{FeatureVector, RiskModel};
//! use jobrisk_model::ModelArtifact;
//!
//! let model = ModelArtifact::from_json_str(r#"{
//!     "kind": "linear",
//!     "intercept": 40.0,
//!     "coefficients": [0.0, 0.0, 0.0, -2.0, 10.0, 5.0]
//! }"#).unwrap();
//!
//! let v = FeatureVector::new(0, 0, 0.5, 5, false, false);
//! assert_eq!(model.predict(&v).unwrap(), 30.0);
//! ```

mod artifact;
mod error;
pub mod linear;
pub mod tree;

#[cfg(test)]
mod tests;

pub use artifact::{ArtifactPaths, EncoderArtifact, LoadedArtifacts, ModelArtifact};
pub use error::ArtifactError;
pub use linear::LinearModel;
pub use tree::{Aggregation, RegressionTree, TreeEnsemble, TreeNode};
