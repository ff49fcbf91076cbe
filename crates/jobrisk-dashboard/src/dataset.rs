//! The static historical dataset.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised while loading the dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset has no rows")]
    Empty,
}

/// One row of the historical dataset. Columns not listed here are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalRecord {
    #[serde(rename = "Job_Title")]
    pub job_title: String,
    #[serde(rename = "Education_Level")]
    pub education_level: String,
    #[serde(rename = "AI_Exposure_Index")]
    pub ai_exposure: f64,
    #[serde(rename = "Automation_Probability_2030")]
    pub automation_probability: f64,
    #[serde(rename = "Risk_Category")]
    pub risk_category: String,
    #[serde(rename = "Average_Salary")]
    pub average_salary: f64,
}

/// Mean automation probability of one education level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EducationRisk {
    pub education_level: String,
    pub mean_automation: f64,
    pub count: usize,
}

/// One scatter point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExposurePoint {
    pub ai_exposure: f64,
    pub automation_probability: f64,
    pub risk_category: String,
    pub average_salary: f64,
    pub job_title: String,
}

impl From<&HistoricalRecord> for ExposurePoint {
    fn from(r: &HistoricalRecord) -> Self {
        Self {
            ai_exposure: r.ai_exposure,
            automation_probability: r.automation_probability,
            risk_category: r.risk_category.clone(),
            average_salary: r.average_salary,
            job_title: r.job_title.clone(),
        }
    }
}

/// Read-only collection of historical records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<HistoricalRecord>,
}

impl Dataset {
    pub fn from_records(records: Vec<HistoricalRecord>) -> Self {
        Self { records }
    }

    /// Loads the dataset from a CSV file with a header row.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file)
    }

    /// Parses CSV with a header row from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let records = csv_reader
            .deserialize::<HistoricalRecord>()
            .collect::<Result<Vec<_>, _>>()?;
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[HistoricalRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Mean automation probability per education level, sorted by level.
    ///
    /// Rows with a non-finite probability are left out of the mean.
    pub fn education_risk(&self) -> Vec<EducationRisk> {
        let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
        for r in &self.records {
            if !r.automation_probability.is_finite() {
                continue;
            }
            let entry = groups.entry(r.education_level.as_str()).or_insert((0.0, 0));
            entry.0 += r.automation_probability;
            entry.1 += 1;
        }

        groups
            .into_iter()
            .map(|(level, (sum, count))| EducationRisk {
                education_level: level.to_string(),
                mean_automation: sum / count as f64,
                count,
            })
            .collect()
    }

    /// Up to `limit` points sampled without replacement.
    pub fn exposure_sample<R: Rng + ?Sized>(&self, limit: usize, rng: &mut R) -> Vec<ExposurePoint> {
        let amount = limit.min(self.records.len());
        rand::seq::index::sample(rng, self.records.len(), amount)
            .into_iter()
            .map(|i| ExposurePoint::from(&self.records[i]))
            .collect()
    }

    /// Distinct risk categories, sorted.
    pub fn risk_categories(&self) -> Vec<String> {
        let mut categories: Vec<String> =
            self.records.iter().map(|r| r.risk_category.clone()).collect();
        categories.sort();
        categories.dedup();
        categories
    }
}
