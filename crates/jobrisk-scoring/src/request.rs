//! Scoring requests as submitted by the form.

use jobrisk_core::{JobRiskError, Result};
use serde::{Deserialize, Serialize};

/// Inclusive bounds of the AI exposure index.
pub const AI_EXPOSURE_MIN: f64 = 0.0;
pub const AI_EXPOSURE_MAX: f64 = 1.0;

/// Inclusive bounds of years of experience.
pub const EXPERIENCE_MIN: u32 = 0;
pub const EXPERIENCE_MAX: u32 = 40;

/// One atomic form submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringRequest {
    pub job_title: String,
    pub education_level: String,
    pub ai_exposure: f64,
    pub years_experience: u32,
    #[serde(default)]
    pub has_tech_skills: bool,
    #[serde(default)]
    pub has_soft_skills: bool,
}

impl ScoringRequest {
    pub fn new(
        job_title: impl Into<String>,
        education_level: impl Into<String>,
        ai_exposure: f64,
        years_experience: u32,
    ) -> Self {
        Self {
            job_title: job_title.into(),
            education_level: education_level.into(),
            ai_exposure,
            years_experience,
            has_tech_skills: false,
            has_soft_skills: false,
        }
    }

    pub fn with_tech_skills(mut self, value: bool) -> Self {
        self.has_tech_skills = value;
        self
    }

    pub fn with_soft_skills(mut self, value: bool) -> Self {
        self.has_soft_skills = value;
        self
    }

    /// Checks the numeric inputs against their inclusive domains.
    pub fn validate(&self) -> Result<()> {
        if !(AI_EXPOSURE_MIN..=AI_EXPOSURE_MAX).contains(&self.ai_exposure) {
            return Err(JobRiskError::OutOfRange {
                field: "ai_exposure",
                min: AI_EXPOSURE_MIN,
                max: AI_EXPOSURE_MAX,
                value: self.ai_exposure,
            });
        }
        if !(EXPERIENCE_MIN..=EXPERIENCE_MAX).contains(&self.years_experience) {
            return Err(JobRiskError::OutOfRange {
                field: "years_experience",
                min: f64::from(EXPERIENCE_MIN),
                max: f64::from(EXPERIENCE_MAX),
                value: f64::from(self.years_experience),
            });
        }
        Ok(())
    }
}
