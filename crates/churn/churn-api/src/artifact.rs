//! Serialized model artifact schema.
//!
//! Artifacts are JSON documents exported from the training pipeline. The
//! `kind` tag selects the model family.

use serde::{Deserialize, Serialize};

/// A pre-trained classifier as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ModelArtifact {
    Logistic(LogisticArtifact),
    Forest(ForestArtifact),
}

impl ModelArtifact {
    pub fn from_json(json: &str) -> churn_spi::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn feature_names(&self) -> &[String] {
        match self {
            ModelArtifact::Logistic(a) => &a.feature_names,
            ModelArtifact::Forest(a) => &a.feature_names,
        }
    }

    pub fn version(&self) -> Option<&str> {
        match self {
            ModelArtifact::Logistic(a) => a.version.as_deref(),
            ModelArtifact::Forest(a) => a.version.as_deref(),
        }
    }
}

/// Standardization applied before the linear term: `(x - mean) / scale`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalerArtifact {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

/// Logistic regression, optionally preceded by a standard scaler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticArtifact {
    #[serde(default)]
    pub version: Option<String>,
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    #[serde(default)]
    pub scaler: Option<ScalerArtifact>,
}

/// One decision tree in flat array form.
///
/// Node `i` is a leaf when `children_left[i] == -1`; otherwise samples with
/// `x[feature[i]] <= threshold[i]` go to `children_left[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeArtifact {
    pub children_left: Vec<i64>,
    pub children_right: Vec<i64>,
    pub feature: Vec<i64>,
    pub threshold: Vec<f64>,
    /// Per-node class weights `[stay, churn]`.
    pub value: Vec<[f64; 2]>,
}

/// Averaging ensemble of decision trees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForestArtifact {
    #[serde(default)]
    pub version: Option<String>,
    pub feature_names: Vec<String>,
    pub trees: Vec<TreeArtifact>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_logistic() {
        let json = r#"{
            "kind": "logistic",
            "version": "2024-06-01",
            "feature_names": ["Age", "Balance"],
            "coefficients": [0.05, 0.00001],
            "intercept": -3.0
        }"#;
        let artifact = ModelArtifact::from_json(json).unwrap();
        assert_eq!(artifact.version(), Some("2024-06-01"));
        assert_eq!(artifact.feature_names(), ["Age", "Balance"]);
        match artifact {
            ModelArtifact::Logistic(logistic) => {
                assert!(logistic.scaler.is_none());
                assert_eq!(logistic.coefficients.len(), 2);
            }
            other => panic!("unexpected artifact: {other:?}"),
        }
    }

    #[test]
    fn test_parse_forest() {
        let json = r#"{
            "kind": "forest",
            "feature_names": ["Age"],
            "trees": [{
                "children_left": [1, -1, -1],
                "children_right": [2, -1, -1],
                "feature": [0, -2, -2],
                "threshold": [45.0, -2.0, -2.0],
                "value": [[10.0, 10.0], [9.0, 1.0], [1.0, 9.0]]
            }]
        }"#;
        let artifact = ModelArtifact::from_json(json).unwrap();
        assert!(artifact.version().is_none());
        assert!(matches!(artifact, ModelArtifact::Forest(ref f) if f.trees.len() == 1));
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let json = r#"{"kind": "svm", "feature_names": []}"#;
        assert!(ModelArtifact::from_json(json).is_err());
    }
}
