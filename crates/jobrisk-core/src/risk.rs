//! Risk score, qualitative bucket and advice.

use std::fmt;

/// Lower bound of a displayed risk percentage.
pub const MIN_RISK: f64 = 0.0;

/// Upper bound of a displayed risk percentage.
pub const MAX_RISK: f64 = 100.0;

/// Threshold above which a risk is `High`.
pub const HIGH_THRESHOLD: f64 = 70.0;

/// Threshold above which a risk is at least `Medium`.
pub const MEDIUM_THRESHOLD: f64 = 30.0;

/// Threshold above which the advice is to upskill immediately.
pub const UPSKILL_THRESHOLD: f64 = 50.0;

/// Automation risk as a percentage in `[0, 100]`.
///
/// Models may return anything; a `RiskScore` only exists clamped.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RiskScore(f64);

impl RiskScore {
    /// Clamps a raw model output to `[0, 100]`.
    ///
    /// The caller is responsible for rejecting non-finite outputs first.
    pub fn clamped(raw: f64) -> Self {
        RiskScore(raw.clamp(MIN_RISK, MAX_RISK))
    }

    /// Returns true if `raw` lies outside `[0, 100]`.
    pub fn needs_clamp(raw: f64) -> bool {
        !(MIN_RISK..=MAX_RISK).contains(&raw)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn bucket(&self) -> RiskBucket {
        RiskBucket::of(self.0)
    }

    pub fn advice(&self) -> Advice {
        Advice::of(self.0)
    }
}

impl fmt::Display for RiskScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}

/// Qualitative risk label, derived for display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RiskBucket {
    Low,
    Medium,
    High,
}

impl RiskBucket {
    /// `> 70` is High, `(30, 70]` is Medium, `<= 30` is Low.
    pub fn of(risk: f64) -> Self {
        if risk > HIGH_THRESHOLD {
            RiskBucket::High
        } else if risk > MEDIUM_THRESHOLD {
            RiskBucket::Medium
        } else {
            RiskBucket::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskBucket::Low => "Low Risk",
            RiskBucket::Medium => "Medium Risk",
            RiskBucket::High => "High Risk",
        }
    }
}

impl fmt::Display for RiskBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Recommendation shown next to the risk metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Advice {
    /// Risk above 50%.
    UpskillNow,
    /// Risk at or below 50%.
    KeepCurrent,
}

impl Advice {
    pub fn of(risk: f64) -> Self {
        if risk > UPSKILL_THRESHOLD {
            Advice::UpskillNow
        } else {
            Advice::KeepCurrent
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Advice::UpskillNow => "Start developing new skills right away.",
            Advice::KeepCurrent => {
                "Maintain your standard and keep up with new technology regularly."
            }
        }
    }
}

impl fmt::Display for Advice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
