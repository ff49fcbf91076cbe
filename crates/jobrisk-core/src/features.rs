//! The fixed-order feature vector consumed by risk models.

use std::fmt;

/// Number of model input columns.
pub const FEATURE_COUNT: usize = 6;

/// Column names in model input order.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "Job_Title_Encoded",
    "Education_Level_Encoded",
    "AI_Exposure_Index",
    "Years_Experience",
    "Tech_Skills",
    "Soft_Skills",
];

/// One of the two binary skill flags the upskilling simulator can toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SkillAxis {
    /// Tech / coding / data skills.
    Tech,
    /// Management / communication skills.
    Soft,
}

impl SkillAxis {
    pub const ALL: [SkillAxis; 2] = [SkillAxis::Tech, SkillAxis::Soft];

    pub fn name(&self) -> &'static str {
        match self {
            SkillAxis::Tech => "tech",
            SkillAxis::Soft => "soft",
        }
    }
}

impl fmt::Display for SkillAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Model input: `[job, education, ai_exposure, experience, tech, soft]`.
///
/// Values are stored exactly as submitted; a counterfactual is a copy with
/// one skill flag overridden, never an in-place mutation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FeatureVector {
    pub job_code: u32,
    pub education_code: u32,
    pub ai_exposure: f64,
    pub years_experience: u32,
    pub tech_skills: bool,
    pub soft_skills: bool,
}

impl FeatureVector {
    pub fn new(
        job_code: u32,
        education_code: u32,
        ai_exposure: f64,
        years_experience: u32,
        tech_skills: bool,
        soft_skills: bool,
    ) -> Self {
        Self {
            job_code,
            education_code,
            ai_exposure,
            years_experience,
            tech_skills,
            soft_skills,
        }
    }

    /// Returns the flag value for `axis`.
    pub fn has_skill(&self, axis: SkillAxis) -> bool {
        match axis {
            SkillAxis::Tech => self.tech_skills,
            SkillAxis::Soft => self.soft_skills,
        }
    }

    /// Returns a copy with the flag for `axis` set to `value`.
    pub fn with_skill(&self, axis: SkillAxis, value: bool) -> Self {
        let mut copy = *self;
        match axis {
            SkillAxis::Tech => copy.tech_skills = value,
            SkillAxis::Soft => copy.soft_skills = value,
        }
        copy
    }

    /// The numeric model row, in [`FEATURE_NAMES`] order.
    pub fn to_row(&self) -> [f64; FEATURE_COUNT] {
        [
            f64::from(self.job_code),
            f64::from(self.education_code),
            self.ai_exposure,
            f64::from(self.years_experience),
            flag(self.tech_skills),
            flag(self.soft_skills),
        ]
    }
}

fn flag(value: bool) -> f64 {
    if value {
        1.0
    } else {
        0.0
    }
}
