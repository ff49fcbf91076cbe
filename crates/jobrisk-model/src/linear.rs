//! Linear regressor.

use jobrisk_core::{FeatureVector, FEATURE_COUNT};
use serde::{Deserialize, Serialize};

use crate::error::ArtifactError;

/// `intercept + sum(coefficients[i] * row[i])`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    #[serde(default)]
    pub intercept: f64,
    pub coefficients: [f64; FEATURE_COUNT],
}

impl LinearModel {
    pub fn new(intercept: f64, coefficients: [f64; FEATURE_COUNT]) -> Self {
        Self {
            intercept,
            coefficients,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ArtifactError> {
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(ArtifactError::Invalid(
                "linear model has non-finite parameters".to_string(),
            ));
        }
        Ok(())
    }

    pub fn predict_row(&self, row: &[f64; FEATURE_COUNT]) -> f64 {
        self.coefficients
            .iter()
            .zip(row)
            .fold(self.intercept, |acc, (c, x)| acc + c * x)
    }

    pub fn predict(&self, features: &FeatureVector) -> f64 {
        self.predict_row(&features.to_row())
    }
}
