//! JSON views rendered by the front-end.

use jobrisk::{
    AppContext, Direction, EncoderDomain, RiskBucket, ScoringResult, SkillAxis, AI_EXPOSURE_MAX,
    AI_EXPOSURE_MIN, EXPERIENCE_MAX, EXPERIENCE_MIN,
};
use serde::Serialize;

/// Everything the form needs to render its controls.
#[derive(Debug, Serialize)]
pub struct FormOptions {
    pub job_titles: Vec<String>,
    pub education_levels: Vec<String>,
    pub default_job_index: usize,
    pub ai_exposure: SliderRange,
    pub years_experience: StepperRange,
    pub dashboard_available: bool,
}

#[derive(Debug, Serialize)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

#[derive(Debug, Serialize)]
pub struct StepperRange {
    pub min: u32,
    pub max: u32,
    pub default: u32,
}

impl FormOptions {
    pub fn from_context(ctx: &AppContext) -> Self {
        let encoders = ctx.scorer().encoders();
        let form = &ctx.config().form;
        Self {
            job_titles: encoders.labels(EncoderDomain::JobTitle).to_vec(),
            education_levels: encoders.labels(EncoderDomain::EducationLevel).to_vec(),
            default_job_index: encoders.job.default_index(&form.preferred_job),
            ai_exposure: SliderRange {
                min: AI_EXPOSURE_MIN,
                max: AI_EXPOSURE_MAX,
                step: 0.01,
                default: form.ai_exposure,
            },
            years_experience: StepperRange {
                min: EXPERIENCE_MIN,
                max: EXPERIENCE_MAX,
                default: form.years_experience,
            },
            dashboard_available: ctx.dashboard().is_available(),
        }
    }
}

/// Result of one submission: metric, bucket, advice and simulator panels.
#[derive(Debug, Serialize)]
pub struct ScoreView {
    pub risk: f64,
    pub risk_label: String,
    pub bucket: RiskBucket,
    pub bucket_label: &'static str,
    pub advice: &'static str,
    pub clamped: bool,
    pub simulator: Vec<SimulatorPanel>,
}

/// One "what if I learned this skill" panel.
#[derive(Debug, Serialize)]
pub struct SimulatorPanel {
    pub axis: SkillAxis,
    pub title: &'static str,
    pub risk_label: String,
    pub delta_label: String,
    pub already_present: bool,
    pub direction: Option<Direction>,
}

impl From<&ScoringResult> for ScoreView {
    fn from(result: &ScoringResult) -> Self {
        let simulator = SkillAxis::ALL
            .into_iter()
            .map(|axis| {
                let simulation = result.simulation(axis);
                SimulatorPanel {
                    axis,
                    title: panel_title(axis),
                    risk_label: result.simulated_risk(axis).to_string(),
                    delta_label: simulation.delta_label(),
                    already_present: simulation.is_already_present(),
                    direction: simulation.direction(),
                }
            })
            .collect();

        Self {
            risk: result.risk.value(),
            risk_label: result.risk.to_string(),
            bucket: result.bucket,
            bucket_label: result.bucket.label(),
            advice: result.advice.message(),
            clamped: result.clamped,
            simulator,
        }
    }
}

fn panel_title(axis: SkillAxis) -> &'static str {
    match axis {
        SkillAxis::Tech => "If you learn Tech / Coding / Data",
        SkillAxis::Soft => "If you learn Management / Communication",
    }
}

/// Error body returned by every failing endpoint.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}
