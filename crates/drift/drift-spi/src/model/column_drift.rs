//! Per-column drift verdict types.

use serde::{Deserialize, Serialize};

/// Kind of column compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureType {
    Numerical,
    Categorical,
}

impl std::fmt::Display for FeatureType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            FeatureType::Numerical => "numerical",
            FeatureType::Categorical => "categorical",
        })
    }
}

/// Raw output of a two-sample test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TestOutcome {
    pub statistic: f64,
    pub p_value: f64,
}

impl TestOutcome {
    pub fn new(statistic: f64, p_value: f64) -> Self {
        Self { statistic, p_value }
    }
}

/// Drift verdict for a single column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDrift {
    /// `p_value < threshold`.
    pub drift_detected: bool,
    pub p_value: f64,
    pub statistic: f64,
    #[serde(rename = "type")]
    pub feature_type: FeatureType,
}

impl ColumnDrift {
    /// Apply the significance threshold to a test outcome.
    pub fn from_outcome(outcome: TestOutcome, threshold: f64, feature_type: FeatureType) -> Self {
        Self {
            drift_detected: outcome.p_value < threshold,
            p_value: outcome.p_value,
            statistic: outcome.statistic,
            feature_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_outcome_below_threshold() {
        let drift = ColumnDrift::from_outcome(TestOutcome::new(0.4, 0.001), 0.05, FeatureType::Numerical);
        assert!(drift.drift_detected);
    }

    #[test]
    fn test_from_outcome_at_threshold_is_not_drift() {
        let drift = ColumnDrift::from_outcome(TestOutcome::new(0.1, 0.05), 0.05, FeatureType::Numerical);
        assert!(!drift.drift_detected);
    }

    #[test]
    fn test_serialize_type_field() {
        let drift = ColumnDrift::from_outcome(TestOutcome::new(0.0, 1.0), 0.05, FeatureType::Numerical);
        let json = serde_json::to_value(&drift).unwrap();
        assert_eq!(json["type"], "numerical");
        assert_eq!(json["drift_detected"], false);
        assert_eq!(json["p_value"], 1.0);
        assert_eq!(json["statistic"], 0.0);
    }

    #[test]
    fn test_categorical_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&FeatureType::Categorical).unwrap(),
            "\"categorical\""
        );
    }

    #[test]
    fn test_feature_type_display_pads() {
        assert_eq!(format!("{:<10}|", FeatureType::Numerical), "numerical |");
    }
}
