//! Chart data served to the analytics view.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::dataset::{Dataset, EducationRisk, ExposurePoint};

/// Maximum points drawn in the exposure scatter plot.
pub const DEFAULT_SCATTER_SAMPLE: usize = 500;

/// Bar chart: mean automation probability per education level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EducationRiskChart {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub bars: Vec<EducationRisk>,
}

impl EducationRiskChart {
    pub fn build(dataset: &Dataset) -> Self {
        Self {
            title: "Average Automation Risk by Education Level",
            x_label: "Education_Level",
            y_label: "Automation_Probability_2030",
            bars: dataset.education_risk(),
        }
    }
}

/// Scatter plot: AI exposure vs automation probability.
///
/// Points are coloured by risk category and sized by salary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExposureScatterChart {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub categories: Vec<String>,
    pub total: usize,
    pub points: Vec<ExposurePoint>,
}

impl ExposureScatterChart {
    pub fn build(dataset: &Dataset, sampler: &ScatterSampler) -> Self {
        let mut rng = sampler.rng();
        Self {
            title: "Correlation: AI Exposure vs Automation Probability",
            x_label: "AI_Exposure_Index",
            y_label: "Automation_Probability_2030",
            categories: dataset.risk_categories(),
            total: dataset.len(),
            points: dataset.exposure_sample(sampler.limit, &mut rng),
        }
    }
}

/// Sampling settings for the scatter plot.
///
/// With a seed every request draws the same sample; without one each
/// request draws a fresh sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScatterSampler {
    pub limit: usize,
    pub seed: Option<u64>,
}

impl ScatterSampler {
    pub fn new(limit: usize, seed: Option<u64>) -> Self {
        Self { limit, seed }
    }

    fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        }
    }
}

impl Default for ScatterSampler {
    fn default() -> Self {
        Self::new(DEFAULT_SCATTER_SAMPLE, None)
    }
}
