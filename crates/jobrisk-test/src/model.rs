//! Stub risk models.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use jobrisk_core::{FeatureVector, JobRiskError, Result, RiskModel};

/// A model backed by a plain closure.
pub struct FnModel<F>(pub F);

impl<F> RiskModel for FnModel<F>
where
    F: Fn(&FeatureVector) -> f64 + Send + Sync,
{
    fn predict(&self, features: &FeatureVector) -> Result<f64> {
        Ok((self.0)(features))
    }

    fn describe(&self) -> String {
        "closure model".to_string()
    }
}

/// `40 + 10 * tech + 5 * soft - 2 * experience`.
pub fn formula_model() -> FnModel<fn(&FeatureVector) -> f64> {
    fn formula(v: &FeatureVector) -> f64 {
        let row = v.to_row();
        40.0 + 10.0 * row[4] + 5.0 * row[5] - 2.0 * row[3]
    }
    FnModel(formula as fn(&FeatureVector) -> f64)
}

/// Always returns the same raw value.
#[derive(Debug, Clone, Copy)]
pub struct ConstantModel(pub f64);

impl RiskModel for ConstantModel {
    fn predict(&self, _features: &FeatureVector) -> Result<f64> {
        Ok(self.0)
    }
}

/// Always fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingModel;

impl RiskModel for FailingModel {
    fn predict(&self, _features: &FeatureVector) -> Result<f64> {
        Err(JobRiskError::ModelFailure("stub model failure".to_string()))
    }
}

/// Wraps a model and records every vector it was asked to score.
pub struct CountingModel<M> {
    inner: M,
    calls: AtomicUsize,
    seen: Mutex<Vec<FeatureVector>>,
}

impl<M: RiskModel> CountingModel<M> {
    pub fn new(inner: M) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Vectors passed to `predict`, in call order.
    pub fn seen(&self) -> Vec<FeatureVector> {
        self.seen.lock().expect("lock poisoned").clone()
    }
}

impl<M: RiskModel> RiskModel for CountingModel<M> {
    fn predict(&self, features: &FeatureVector) -> Result<f64> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().expect("lock poisoned").push(*features);
        self.inner.predict(features)
    }
}
