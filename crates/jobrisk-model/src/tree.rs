//! Decision tree ensembles.
//!
//! Trees are stored as flat node arrays in the layout exported by the
//! training step: node 0 is the root, split nodes point forward to their
//! children, and a row goes left when `row[feature] <= threshold`.
//!
//! - [`Aggregation::Mean`] - random forest (average of tree outputs)
//! - [`Aggregation::Sum`] - gradient boosting (sum of tree outputs)

use jobrisk_core::{FeatureVector, FEATURE_COUNT};
use serde::{Deserialize, Serialize};

use crate::error::ArtifactError;

/// A single tree node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

/// One regression tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionTree {
    pub nodes: Vec<TreeNode>,
}

impl RegressionTree {
    pub fn new(nodes: Vec<TreeNode>) -> Self {
        Self { nodes }
    }

    /// A tree with a single leaf.
    pub fn leaf(value: f64) -> Self {
        Self::new(vec![TreeNode::Leaf { value }])
    }

    // Children must point strictly forward, so traversal always terminates.
    fn validate(&self, tree_index: usize) -> Result<(), ArtifactError> {
        if self.nodes.is_empty() {
            return Err(ArtifactError::Invalid(format!("tree {} has no nodes", tree_index)));
        }

        for (i, node) in self.nodes.iter().enumerate() {
            match *node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if feature >= FEATURE_COUNT {
                        return Err(ArtifactError::Invalid(format!(
                            "tree {} node {} splits on feature {} (only {} features)",
                            tree_index, i, feature, FEATURE_COUNT
                        )));
                    }
                    if threshold.is_nan() {
                        return Err(ArtifactError::Invalid(format!(
                            "tree {} node {} has a NaN threshold",
                            tree_index, i
                        )));
                    }
                    for child in [left, right] {
                        if child <= i || child >= self.nodes.len() {
                            return Err(ArtifactError::Invalid(format!(
                                "tree {} node {} has invalid child {}",
                                tree_index, i, child
                            )));
                        }
                    }
                }
                TreeNode::Leaf { value } => {
                    if !value.is_finite() {
                        return Err(ArtifactError::Invalid(format!(
                            "tree {} node {} has a non-finite leaf",
                            tree_index, i
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    pub fn predict_row(&self, row: &[f64; FEATURE_COUNT]) -> f64 {
        let mut index = 0;
        loop {
            match self.nodes[index] {
                TreeNode::Leaf { value } => return value,
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    index = if row[feature] <= threshold { left } else { right };
                }
            }
        }
    }
}

/// How tree outputs are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregation {
    #[default]
    Mean,
    Sum,
}

/// `base_score + aggregate(tree outputs)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeEnsemble {
    #[serde(default)]
    pub aggregation: Aggregation,
    #[serde(default)]
    pub base_score: f64,
    pub trees: Vec<RegressionTree>,
}

impl TreeEnsemble {
    pub fn new(aggregation: Aggregation, base_score: f64, trees: Vec<RegressionTree>) -> Self {
        Self {
            aggregation,
            base_score,
            trees,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ArtifactError> {
        if self.trees.is_empty() {
            return Err(ArtifactError::Invalid("tree ensemble has no trees".to_string()));
        }
        if !self.base_score.is_finite() {
            return Err(ArtifactError::Invalid(
                "tree ensemble has a non-finite base score".to_string(),
            ));
        }
        for (i, tree) in self.trees.iter().enumerate() {
            tree.validate(i)?;
        }
        Ok(())
    }

    pub fn predict_row(&self, row: &[f64; FEATURE_COUNT]) -> f64 {
        let total: f64 = self.trees.iter().map(|t| t.predict_row(row)).sum();
        let combined = match self.aggregation {
            Aggregation::Mean => total / self.trees.len() as f64,
            Aggregation::Sum => total,
        };
        self.base_score + combined
    }

    pub fn predict(&self, features: &FeatureVector) -> f64 {
        self.predict_row(&features.to_row())
    }
}
