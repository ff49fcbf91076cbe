//! Step-by-step scoring of one request.
//!
//! ```text
//! Idle -> VectorAssembled -> Scored -> ClampedResult
//!      -> CounterfactualScored(tech)?  -> CounterfactualScored(soft)? -> Done
//! ```
//!
//! The two counterfactual steps may run in either order. Each starts from
//! the submitted vector, never from the other's perturbation. The first
//! three phases pass inside [`RiskScorer::begin`](crate::RiskScorer::begin),
//! so a session is first observable at `ClampedResult`.

use std::fmt;

use jobrisk_core::{FeatureVector, JobRiskError, Result, RiskModel, RiskScore, SkillAxis};
use tracing::{debug, trace, warn};

use crate::outcome::{ScoringResult, SkillSimulation};

/// Where a request is in the scoring procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringPhase {
    Idle,
    VectorAssembled,
    Scored,
    ClampedResult,
    CounterfactualScored(SkillAxis),
    Done,
}

impl fmt::Display for ScoringPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringPhase::Idle => write!(f, "idle"),
            ScoringPhase::VectorAssembled => write!(f, "vector_assembled"),
            ScoringPhase::Scored => write!(f, "scored"),
            ScoringPhase::ClampedResult => write!(f, "clamped_result"),
            ScoringPhase::CounterfactualScored(axis) => write!(f, "counterfactual_scored[{}]", axis),
            ScoringPhase::Done => write!(f, "done"),
        }
    }
}

/// A request that has a clamped baseline and may run counterfactuals.
pub struct ScoringSession<'m, M: ?Sized> {
    model: &'m M,
    features: FeatureVector,
    raw_risk: f64,
    risk: RiskScore,
    tech: Option<SkillSimulation>,
    soft: Option<SkillSimulation>,
    phase: ScoringPhase,
}

impl<'m, M: RiskModel + ?Sized> ScoringSession<'m, M> {
    /// Scores `features` and clamps the baseline.
    pub(crate) fn start(model: &'m M, features: FeatureVector) -> Result<Self> {
        trace!(event = "phase", phase = %ScoringPhase::VectorAssembled);

        let raw_risk = predict(model, &features)?;
        trace!(event = "phase", phase = %ScoringPhase::Scored, raw = raw_risk);

        let risk = clamp(raw_risk);
        trace!(event = "phase", phase = %ScoringPhase::ClampedResult, risk = risk.value());

        Ok(Self {
            model,
            features,
            raw_risk,
            risk,
            tech: None,
            soft: None,
            phase: ScoringPhase::ClampedResult,
        })
    }

    /// `ClampedResult` until a counterfactual is actually scored; an
    /// already present skill leaves the phase unchanged.
    pub fn phase(&self) -> ScoringPhase {
        self.phase
    }

    pub fn features(&self) -> &FeatureVector {
        &self.features
    }

    /// The clamped baseline risk.
    pub fn risk(&self) -> RiskScore {
        self.risk
    }

    pub fn raw_risk(&self) -> f64 {
        self.raw_risk
    }

    /// Runs the counterfactual for `axis`, at most once per axis.
    ///
    /// A skill that is already present short-circuits without calling the
    /// model.
    pub fn simulate(&mut self, axis: SkillAxis) -> Result<SkillSimulation> {
        if let Some(done) = *self.slot(axis) {
            return Ok(done);
        }

        if self.features.has_skill(axis) {
            debug!(event = "simulate", axis = axis.name(), already_present = true);
            *self.slot(axis) = Some(SkillSimulation::AlreadyPresent);
            return Ok(SkillSimulation::AlreadyPresent);
        }

        let counterfactual = self.features.with_skill(axis, true);
        let new_risk = clamp(predict(self.model, &counterfactual)?);
        let delta = self.risk.value() - new_risk.value();
        debug!(
            event = "simulate",
            axis = axis.name(),
            already_present = false,
            new_risk = new_risk.value(),
            delta = delta,
        );
        let outcome = SkillSimulation::Simulated { new_risk, delta };

        *self.slot(axis) = Some(outcome);
        self.phase = ScoringPhase::CounterfactualScored(axis);
        trace!(event = "phase", phase = %self.phase);
        Ok(outcome)
    }

    /// Runs any axis not yet simulated and returns the full result.
    pub fn finish(mut self) -> Result<ScoringResult> {
        for axis in SkillAxis::ALL {
            self.simulate(axis)?;
        }

        let (Some(tech), Some(soft)) = (self.tech, self.soft) else {
            return Err(JobRiskError::InvalidState(
                "both skill axes must be simulated before finishing".to_string(),
            ));
        };

        self.phase = ScoringPhase::Done;
        trace!(event = "phase", phase = %self.phase);

        Ok(ScoringResult {
            features: self.features,
            raw_risk: self.raw_risk,
            risk: self.risk,
            clamped: RiskScore::needs_clamp(self.raw_risk),
            bucket: self.risk.bucket(),
            advice: self.risk.advice(),
            tech,
            soft,
        })
    }

    fn slot(&mut self, axis: SkillAxis) -> &mut Option<SkillSimulation> {
        match axis {
            SkillAxis::Tech => &mut self.tech,
            SkillAxis::Soft => &mut self.soft,
        }
    }
}

fn predict<M: RiskModel + ?Sized>(model: &M, features: &FeatureVector) -> Result<f64> {
    let raw = model.predict(features)?;
    if !raw.is_finite() {
        return Err(JobRiskError::ModelFailure(format!(
            "model returned non-finite score {}",
            raw
        )));
    }
    Ok(raw)
}

fn clamp(raw: f64) -> RiskScore {
    let risk = RiskScore::clamped(raw);
    if RiskScore::needs_clamp(raw) {
        warn!(event = "clamped", raw = raw, clamped = risk.value());
    }
    risk
}
