//! Dashboard availability.

use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use crate::dataset::Dataset;

/// The dataset, or the reason the dashboard is disabled.
///
/// A missing dataset only disables the analytics view; scoring is not
/// affected.
#[derive(Debug, Clone)]
pub enum DashboardState {
    Available(Arc<Dataset>),
    Unavailable { reason: String },
}

impl DashboardState {
    /// Loads the dataset once; failures degrade to `Unavailable`.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Dataset::load(path) {
            Ok(dataset) => {
                info!(
                    event = "dataset_loaded",
                    path = %path.display(),
                    records = dataset.len() as u64,
                );
                DashboardState::Available(Arc::new(dataset))
            }
            Err(err) => {
                warn!(
                    event = "dataset_unavailable",
                    path = %path.display(),
                    reason = %err,
                );
                DashboardState::Unavailable {
                    reason: err.to_string(),
                }
            }
        }
    }

    pub fn dataset(&self) -> Option<&Arc<Dataset>> {
        match self {
            DashboardState::Available(dataset) => Some(dataset),
            DashboardState::Unavailable { .. } => None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.dataset().is_some()
    }
}
