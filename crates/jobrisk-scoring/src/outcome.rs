//! Scoring results.

use jobrisk_core::{Advice, FeatureVector, RiskBucket, RiskScore, SkillAxis};
use serde::Serialize;

/// Marker shown instead of a delta when the skill is already present.
pub const ALREADY_PRESENT_LABEL: &str = "Already present";

/// Outcome of one upskilling axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SkillSimulation {
    /// The flag was already set; the model was not consulted again.
    AlreadyPresent,
    /// Re-scored with the flag set.
    Simulated {
        new_risk: RiskScore,
        /// `baseline - new_risk`; positive when the skill lowers the risk.
        delta: f64,
    },
}

/// Which way a simulated skill moved the risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Reduced,
    Increased,
    Unchanged,
}

impl SkillSimulation {
    pub fn is_already_present(&self) -> bool {
        matches!(self, SkillSimulation::AlreadyPresent)
    }

    pub fn delta(&self) -> Option<f64> {
        match self {
            SkillSimulation::AlreadyPresent => None,
            SkillSimulation::Simulated { delta, .. } => Some(*delta),
        }
    }

    /// Risk to display beside this axis: the simulated risk, or `baseline`.
    pub fn displayed_risk(&self, baseline: RiskScore) -> RiskScore {
        match self {
            SkillSimulation::AlreadyPresent => baseline,
            SkillSimulation::Simulated { new_risk, .. } => *new_risk,
        }
    }

    /// `None` for an already present skill.
    pub fn direction(&self) -> Option<Direction> {
        let delta = self.delta()?;
        Some(if delta > 0.0 {
            Direction::Reduced
        } else if delta < 0.0 {
            Direction::Increased
        } else {
            Direction::Unchanged
        })
    }

    /// Reductions render as `-{delta}%`; a negative delta keeps its own sign.
    /// A change that rounds to zero renders as `0.0%`.
    pub fn delta_label(&self) -> String {
        match self {
            SkillSimulation::AlreadyPresent => ALREADY_PRESENT_LABEL.to_string(),
            SkillSimulation::Simulated { delta, .. } if delta.abs() < 0.05 => "0.0%".to_string(),
            SkillSimulation::Simulated { delta, .. } if *delta < 0.0 => format!("{:.1}%", delta),
            SkillSimulation::Simulated { delta, .. } => format!("-{:.1}%", delta),
        }
    }
}

/// Everything the presentation layer needs from one scoring request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringResult {
    pub features: FeatureVector,
    /// Unclamped model output for the submitted vector.
    pub raw_risk: f64,
    pub risk: RiskScore,
    /// True if `raw_risk` was outside `[0, 100]`.
    pub clamped: bool,
    pub bucket: RiskBucket,
    pub advice: Advice,
    pub tech: SkillSimulation,
    pub soft: SkillSimulation,
}

impl ScoringResult {
    pub fn simulation(&self, axis: SkillAxis) -> &SkillSimulation {
        match axis {
            SkillAxis::Tech => &self.tech,
            SkillAxis::Soft => &self.soft,
        }
    }

    /// Risk shown in the simulator panel for `axis`.
    pub fn simulated_risk(&self, axis: SkillAxis) -> RiskScore {
        self.simulation(axis).displayed_risk(self.risk)
    }
}
