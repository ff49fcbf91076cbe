//! The risk model contract.

use std::sync::Arc;

use crate::error::Result;
use crate::features::FeatureVector;

/// A regression predictor over the fixed-order feature vector.
///
/// Implementations are read-only after construction and shared between
/// requests, hence `Send + Sync`. The returned value is the raw score;
/// clamping is the caller's job.
pub trait RiskModel: Send + Sync {
    /// Predicts the raw automation risk for one feature vector.
    fn predict(&self, features: &FeatureVector) -> Result<f64>;

    /// Short human-readable description, used in logs.
    fn describe(&self) -> String {
        std::any::type_name::<Self>().to_string()
    }
}

impl<M: RiskModel + ?Sized> RiskModel for &M {
    fn predict(&self, features: &FeatureVector) -> Result<f64> {
        (**self).predict(features)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<M: RiskModel + ?Sized> RiskModel for Arc<M> {
    fn predict(&self, features: &FeatureVector) -> Result<f64> {
        (**self).predict(features)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<M: RiskModel + ?Sized> RiskModel for Box<M> {
    fn predict(&self, features: &FeatureVector) -> Result<f64> {
        (**self).predict(features)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
