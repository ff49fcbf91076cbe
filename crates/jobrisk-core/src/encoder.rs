//! Categorical label encoders.
//!
//! A [`LabelEncoder`] is the ordered bijection between a finite set of
//! labels and the codes `0..n` the risk model was trained on. Encoders are
//! fixed at training time and never change at inference time.

use std::collections::HashMap;
use std::fmt;

use crate::error::{JobRiskError, Result};

/// Which categorical feature an encoder belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EncoderDomain {
    JobTitle,
    EducationLevel,
}

impl fmt::Display for EncoderDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncoderDomain::JobTitle => write!(f, "job title"),
            EncoderDomain::EducationLevel => write!(f, "education level"),
        }
    }
}

/// Ordered bijection between string labels and consecutive codes.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelEncoder {
    domain: EncoderDomain,
    labels: Vec<String>,
    codes: HashMap<String, u32>,
}

impl LabelEncoder {
    /// Creates an encoder whose codes are the positions of `labels`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArtifact` if the set is empty or contains duplicates.
    pub fn new<I, L>(domain: EncoderDomain, labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            return Err(JobRiskError::InvalidArtifact(format!(
                "{} encoder has no labels",
                domain
            )));
        }

        let mut codes = HashMap::with_capacity(labels.len());
        for (code, label) in labels.iter().enumerate() {
            if codes.insert(label.clone(), code as u32).is_some() {
                return Err(JobRiskError::InvalidArtifact(format!(
                    "{} encoder lists {:?} more than once",
                    domain, label
                )));
            }
        }

        Ok(Self {
            domain,
            labels,
            codes,
        })
    }

    /// Builds an encoder from raw observations: distinct labels, sorted.
    ///
    /// This matches the code space produced by the training step.
    pub fn fit<I, L>(domain: EncoderDomain, observations: I) -> Result<Self>
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        let mut labels: Vec<String> = observations.into_iter().map(Into::into).collect();
        labels.sort();
        labels.dedup();
        Self::new(domain, labels)
    }

    /// Returns the domain this encoder covers.
    pub fn domain(&self) -> EncoderDomain {
        self.domain
    }

    /// Maps a label to its code.
    ///
    /// # Errors
    ///
    /// Returns `UnknownLabel` if the label is not part of the known set.
    pub fn encode(&self, label: &str) -> Result<u32> {
        self.codes
            .get(label)
            .copied()
            .ok_or_else(|| JobRiskError::UnknownLabel {
                domain: self.domain,
                label: label.to_string(),
            })
    }

    /// Maps a code back to its label.
    pub fn decode(&self, code: u32) -> Option<&str> {
        self.labels.get(code as usize).map(String::as_str)
    }

    /// Known labels in code order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Position of `preferred` in the label set, or 0 when absent.
    pub fn default_index(&self, preferred: &str) -> usize {
        self.codes
            .get(preferred)
            .map(|&code| code as usize)
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// The two encoders the risk model was trained with.
#[derive(Debug, Clone, PartialEq)]
pub struct Encoders {
    pub job: LabelEncoder,
    pub education: LabelEncoder,
}

impl Encoders {
    /// Bundles the job-title and education-level encoders.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArtifact` if an encoder is bound to the wrong domain.
    pub fn new(job: LabelEncoder, education: LabelEncoder) -> Result<Self> {
        if job.domain() != EncoderDomain::JobTitle {
            return Err(JobRiskError::InvalidArtifact(format!(
                "expected a job title encoder, got a {} encoder",
                job.domain()
            )));
        }
        if education.domain() != EncoderDomain::EducationLevel {
            return Err(JobRiskError::InvalidArtifact(format!(
                "expected an education level encoder, got a {} encoder",
                education.domain()
            )));
        }
        Ok(Self { job, education })
    }

    pub fn get(&self, domain: EncoderDomain) -> &LabelEncoder {
        match domain {
            EncoderDomain::JobTitle => &self.job,
            EncoderDomain::EducationLevel => &self.education,
        }
    }

    /// Encodes `label` with the encoder for `domain`.
    pub fn encode(&self, domain: EncoderDomain, label: &str) -> Result<u32> {
        self.get(domain).encode(label)
    }

    /// Known labels for `domain`, in code order.
    pub fn labels(&self, domain: EncoderDomain) -> &[String] {
        self.get(domain).labels()
    }
}
