//! Historical dataset and chart data for the JobRisk dashboard.
//!
//! The dataset is loaded once at startup and shared read-only. Chart
//! builders turn it into plain serializable data; rendering happens in the
//! browser.

pub mod charts;
pub mod dataset;
pub mod state;

#[cfg(test)]
mod tests;

pub use charts::{EducationRiskChart, ExposureScatterChart, ScatterSampler, DEFAULT_SCATTER_SAMPLE};
pub use dataset::{Dataset, DatasetError, EducationRisk, ExposurePoint, HistoricalRecord};
pub use state::DashboardState;
