//! The risk scoring service.

use std::sync::Arc;

use jobrisk_core::{EncoderDomain, Encoders, FeatureVector, Result, RiskModel};
use tracing::info;

use crate::outcome::ScoringResult;
use crate::request::ScoringRequest;
use crate::session::ScoringSession;

/// Scores requests against one shared model and its encoders.
///
/// Stateless per call: every request builds a fresh feature vector and
/// nothing is retained between requests.
pub struct RiskScorer<M> {
    model: M,
    encoders: Arc<Encoders>,
}

impl<M: RiskModel> RiskScorer<M> {
    pub fn new(model: M, encoders: impl Into<Arc<Encoders>>) -> Self {
        Self {
            model,
            encoders: encoders.into(),
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn encoders(&self) -> &Encoders {
        &self.encoders
    }

    /// Validates the request and encodes it into a feature vector.
    ///
    /// # Errors
    ///
    /// `OutOfRange` for numeric inputs outside their inclusive bounds,
    /// `UnknownLabel` for labels outside the encoder sets.
    pub fn assemble(&self, request: &ScoringRequest) -> Result<FeatureVector> {
        request.validate()?;
        let job_code = self
            .encoders
            .encode(EncoderDomain::JobTitle, &request.job_title)?;
        let education_code = self
            .encoders
            .encode(EncoderDomain::EducationLevel, &request.education_level)?;

        Ok(FeatureVector::new(
            job_code,
            education_code,
            request.ai_exposure,
            request.years_experience,
            request.has_tech_skills,
            request.has_soft_skills,
        ))
    }

    /// Assembles and scores the request, stopping at the clamped baseline.
    pub fn begin(&self, request: &ScoringRequest) -> Result<ScoringSession<'_, M>> {
        let features = self.assemble(request)?;
        ScoringSession::start(&self.model, features)
    }

    /// Scores the request and runs both upskilling simulations.
    pub fn score(&self, request: &ScoringRequest) -> Result<ScoringResult> {
        let result = self.begin(request)?.finish()?;
        info!(
            event = "score",
            job = %request.job_title,
            risk = result.risk.value(),
            bucket = result.bucket.label(),
            clamped = result.clamped,
        );
        Ok(result)
    }
}
