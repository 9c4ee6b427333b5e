//! Decision-forest classifier evaluated over scaled feature vectors.
//!
//! Trees are stored flattened: each node is either a split (feature index,
//! threshold, child indices) or a leaf carrying a class label. Evaluation
//! descends from node 0, going left when `x[feature] <= threshold`; the
//! ensemble output is the majority vote across trees, ties broken toward
//! the lower label.

use std::collections::BTreeMap;

use medirisk_common::{MediriskError, Result};
use serde::{Deserialize, Serialize};

/// Capability of scoring a scaled feature vector into an integer class label.
pub trait Classify: Send + Sync {
    /// Number of features the classifier was fitted on.
    fn n_features(&self) -> usize;

    /// Score one vector. Pure: identical input always yields the same label.
    fn predict(&self, features: &[f64]) -> i64;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        label: i64,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

impl DecisionTree {
    /// Walk the tree from the root. Only called on checked trees, where
    /// every split points at valid forward indices, so descent terminates.
    fn decide(&self, features: &[f64]) -> i64 {
        let mut index = 0;
        loop {
            match &self.nodes[index] {
                TreeNode::Leaf { label } => return *label,
                TreeNode::Split { feature, threshold, left, right } => {
                    index = if features[*feature] <= *threshold { *left } else { *right };
                }
            }
        }
    }
}

/// A pre-fitted tree ensemble, deserialized once at startup and shared
/// read-only across requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionForest {
    pub n_features: usize,
    pub trees: Vec<DecisionTree>,
}

impl DecisionForest {
    pub fn new(n_features: usize, trees: Vec<DecisionTree>) -> Result<Self> {
        let forest = DecisionForest { n_features, trees };
        forest.check()?;
        Ok(forest)
    }

    /// Structural validation of a deserialized forest. Child references must
    /// point forward and stay in range, feature indices must fit the trained
    /// schema, thresholds must be finite.
    pub fn check(&self) -> Result<()> {
        if self.n_features == 0 {
            return Err(MediriskError::ArtifactLoad(
                "classifier has no fitted features".to_string(),
            ));
        }
        if self.trees.is_empty() {
            return Err(MediriskError::ArtifactLoad(
                "classifier has no trees".to_string(),
            ));
        }
        for (t, tree) in self.trees.iter().enumerate() {
            if tree.nodes.is_empty() {
                return Err(MediriskError::ArtifactLoad(format!("tree {t} is empty")));
            }
            for (i, node) in tree.nodes.iter().enumerate() {
                if let TreeNode::Split { feature, threshold, left, right } = node {
                    if *feature >= self.n_features {
                        return Err(MediriskError::ArtifactLoad(format!(
                            "tree {t} node {i} splits on feature {feature}, \
                             but the classifier was fitted on {} features",
                            self.n_features
                        )));
                    }
                    if !threshold.is_finite() {
                        return Err(MediriskError::ArtifactLoad(format!(
                            "tree {t} node {i} has non-finite threshold"
                        )));
                    }
                    for child in [*left, *right] {
                        if child <= i || child >= tree.nodes.len() {
                            return Err(MediriskError::ArtifactLoad(format!(
                                "tree {t} node {i} references invalid child {child}"
                            )));
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

impl Classify for DecisionForest {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict(&self, features: &[f64]) -> i64 {
        let mut votes: BTreeMap<i64, usize> = BTreeMap::new();
        for tree in &self.trees {
            *votes.entry(tree.decide(features)).or_insert(0) += 1;
        }
        // BTreeMap iterates labels in ascending order; strict `>` keeps the
        // lower label on ties.
        let mut best_label = 0;
        let mut best_count = 0;
        for (label, count) in votes {
            if count > best_count {
                best_label = label;
                best_count = count;
            }
        }
        best_label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stump(feature: usize, threshold: f64, low: i64, high: i64) -> DecisionTree {
        DecisionTree {
            nodes: vec![
                TreeNode::Split { feature, threshold, left: 1, right: 2 },
                TreeNode::Leaf { label: low },
                TreeNode::Leaf { label: high },
            ],
        }
    }

    #[test]
    fn test_single_tree_descent() {
        let forest = DecisionForest::new(2, vec![stump(1, 0.5, 0, 1)]).unwrap();
        assert_eq!(forest.predict(&[9.0, 0.5]), 0); // boundary goes left
        assert_eq!(forest.predict(&[9.0, 0.6]), 1);
    }

    #[test]
    fn test_majority_vote() {
        let forest = DecisionForest::new(
            1,
            vec![stump(0, 0.0, 0, 1), stump(0, 0.0, 0, 1), stump(0, 10.0, 0, 1)],
        )
        .unwrap();
        // x = 5.0: first two trees vote 1, third votes 0.
        assert_eq!(forest.predict(&[5.0]), 1);
    }

    #[test]
    fn test_tie_breaks_toward_lower_label() {
        let forest =
            DecisionForest::new(1, vec![stump(0, 0.0, 0, 1), stump(0, 10.0, 0, 1)]).unwrap();
        // x = 5.0: one vote each for 0 and 1.
        assert_eq!(forest.predict(&[5.0]), 0);
    }

    #[test]
    fn test_empty_forest_rejected() {
        let err = DecisionForest::new(3, vec![]).unwrap_err();
        assert!(matches!(err, MediriskError::ArtifactLoad(_)));
    }

    #[test]
    fn test_out_of_range_feature_rejected() {
        let err = DecisionForest::new(1, vec![stump(4, 0.0, 0, 1)]).unwrap_err();
        assert!(matches!(err, MediriskError::ArtifactLoad(_)));
    }

    #[test]
    fn test_backward_child_reference_rejected() {
        let tree = DecisionTree {
            nodes: vec![
                TreeNode::Split { feature: 0, threshold: 0.0, left: 0, right: 1 },
                TreeNode::Leaf { label: 1 },
            ],
        };
        let err = DecisionForest::new(1, vec![tree]).unwrap_err();
        assert!(matches!(err, MediriskError::ArtifactLoad(_)));
    }
}
