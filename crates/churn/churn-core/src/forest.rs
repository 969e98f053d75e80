//! Decision-tree ensemble classifier.

use churn_api::{ForestArtifact, TreeArtifact};
use churn_spi::{Classifier, FeatureRow, ModelError, Result};

use crate::features::resolve_features;

const LEAF: i64 = -1;

#[derive(Debug, Clone)]
enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        churn: f64,
    },
}

#[derive(Debug, Clone)]
struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    /// Validate a flat tree. Child indices must point forward, which rules out cycles.
    fn from_artifact(tree: &TreeArtifact, indices: &[usize], tree_idx: usize) -> Result<Self> {
        let n = tree.children_left.len();
        let invalid = |reason: String| {
            ModelError::InvalidArtifact(format!("tree {}: {}", tree_idx, reason))
        };

        if n == 0 {
            return Err(invalid("no nodes".to_string()));
        }
        if tree.children_right.len() != n
            || tree.feature.len() != n
            || tree.threshold.len() != n
            || tree.value.len() != n
        {
            return Err(invalid("node arrays differ in length".to_string()));
        }

        let mut nodes = Vec::with_capacity(n);
        for i in 0..n {
            let left = tree.children_left[i];
            let right = tree.children_right[i];

            if left == LEAF {
                if right != LEAF {
                    return Err(invalid(format!("node {} has only a right child", i)));
                }
                let [stay, churn] = tree.value[i];
                let total = stay + churn;
                if !(stay >= 0.0 && churn >= 0.0 && total > 0.0 && total.is_finite()) {
                    return Err(invalid(format!("node {} has invalid class weights", i)));
                }
                nodes.push(Node::Leaf {
                    churn: churn / total,
                });
                continue;
            }

            let in_range = |c: i64| c > i as i64 && (c as usize) < n;
            if !in_range(left) || !in_range(right) {
                return Err(invalid(format!("node {} has out-of-range children", i)));
            }
            let feature = usize::try_from(tree.feature[i])
                .ok()
                .and_then(|f| indices.get(f).copied())
                .ok_or_else(|| invalid(format!("node {} splits on unknown feature", i)))?;
            let threshold = tree.threshold[i];
            if threshold.is_nan() {
                return Err(invalid(format!("node {} has NaN threshold", i)));
            }

            nodes.push(Node::Split {
                feature,
                threshold,
                left: left as usize,
                right: right as usize,
            });
        }

        Ok(Self { nodes })
    }

    fn churn_probability(&self, row: &FeatureRow) -> Result<f64> {
        let mut index = 0;
        loop {
            match &self.nodes[index] {
                Node::Leaf { churn } => return Ok(*churn),
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    let x = row.at(*feature).ok_or_else(|| {
                        ModelError::Inference(format!("feature index {} out of range", feature))
                    })?;
                    index = if x <= *threshold { *left } else { *right };
                }
            }
        }
    }
}

/// Averaging ensemble of decision trees (random-forest style).
#[derive(Debug, Clone)]
pub struct ForestModel {
    trees: Vec<Tree>,
}

impl ForestModel {
    pub fn from_artifact(artifact: &ForestArtifact) -> Result<Self> {
        let indices = resolve_features(&artifact.feature_names)?;
        if artifact.trees.is_empty() {
            return Err(ModelError::InvalidArtifact(
                "forest has no trees".to_string(),
            ));
        }
        let trees = artifact
            .trees
            .iter()
            .enumerate()
            .map(|(i, tree)| Tree::from_artifact(tree, &indices, i))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { trees })
    }

    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }
}

impl Classifier for ForestModel {
    fn name(&self) -> &str {
        "forest"
    }

    fn predict_proba(&self, row: &FeatureRow) -> Result<[f64; 2]> {
        let mut total = 0.0;
        for tree in &self.trees {
            total += tree.churn_probability(row)?;
        }
        let churn = total / self.trees.len() as f64;
        Ok([1.0 - churn, churn])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use churn_spi::FEATURE_COUNT;

    fn age_stump(threshold: f64) -> TreeArtifact {
        TreeArtifact {
            children_left: vec![1, -1, -1],
            children_right: vec![2, -1, -1],
            feature: vec![0, -2, -2],
            threshold: vec![threshold, -2.0, -2.0],
            value: vec![[10.0, 10.0], [9.0, 1.0], [1.0, 3.0]],
        }
    }

    fn forest(trees: Vec<TreeArtifact>) -> ForestArtifact {
        ForestArtifact {
            version: None,
            feature_names: vec!["Age".to_string()],
            trees,
        }
    }

    fn row(age: f64) -> FeatureRow {
        let mut values = [0.0; FEATURE_COUNT];
        values[1] = age;
        FeatureRow::new(values)
    }

    #[test]
    fn test_single_tree_leaves() {
        let model = ForestModel::from_artifact(&forest(vec![age_stump(45.0)])).unwrap();
        let [_, young] = model.predict_proba(&row(30.0)).unwrap();
        let [_, old] = model.predict_proba(&row(60.0)).unwrap();
        assert!((young - 0.1).abs() < 1e-12);
        assert!((old - 0.75).abs() < 1e-12);
        assert_eq!(model.predict(&row(60.0)).unwrap(), 1);
    }

    #[test]
    fn test_threshold_goes_left() {
        let model = ForestModel::from_artifact(&forest(vec![age_stump(45.0)])).unwrap();
        let [_, churn] = model.predict_proba(&row(45.0)).unwrap();
        assert!((churn - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_ensemble_averages() {
        let model =
            ForestModel::from_artifact(&forest(vec![age_stump(45.0), age_stump(55.0)])).unwrap();
        assert_eq!(model.n_trees(), 2);
        let [stay, churn] = model.predict_proba(&row(50.0)).unwrap();
        assert!((churn - (0.75 + 0.1) / 2.0).abs() < 1e-12);
        assert!((stay + churn - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_backward_child_rejected() {
        let mut tree = age_stump(45.0);
        tree.children_left[0] = 0;
        assert!(matches!(
            ForestModel::from_artifact(&forest(vec![tree])),
            Err(ModelError::InvalidArtifact(_))
        ));
    }

    #[test]
    fn test_unknown_split_feature_rejected() {
        let mut tree = age_stump(45.0);
        tree.feature[0] = 3;
        assert!(ForestModel::from_artifact(&forest(vec![tree])).is_err());
    }

    #[test]
    fn test_empty_leaf_weights_rejected() {
        let mut tree = age_stump(45.0);
        tree.value[1] = [0.0, 0.0];
        assert!(ForestModel::from_artifact(&forest(vec![tree])).is_err());
    }

    #[test]
    fn test_ragged_arrays_rejected() {
        let mut tree = age_stump(45.0);
        tree.threshold.pop();
        assert!(ForestModel::from_artifact(&forest(vec![tree])).is_err());
    }

    #[test]
    fn test_empty_forest_rejected() {
        assert!(ForestModel::from_artifact(&forest(vec![])).is_err());
    }
}
