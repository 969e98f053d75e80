//! Prediction result types.

use serde::{Deserialize, Serialize};

/// Outcome of a single churn prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Predicted label, 1 means the customer is expected to churn.
    pub churn_prediction: u8,
    /// Probability of the churn class.
    pub churn_probability: f64,
}

impl PredictionResult {
    pub fn new(churn_prediction: u8, churn_probability: f64) -> Self {
        Self {
            churn_prediction,
            churn_probability,
        }
    }

    /// Whether the customer is predicted to churn.
    pub fn will_churn(&self) -> bool {
        self.churn_prediction == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_field_names() {
        let json = serde_json::to_value(PredictionResult::new(1, 0.73)).unwrap();
        assert_eq!(json["churn_prediction"], 1);
        assert!((json["churn_probability"].as_f64().unwrap() - 0.73).abs() < 1e-12);
    }

    #[test]
    fn test_will_churn() {
        assert!(PredictionResult::new(1, 0.9).will_churn());
        assert!(!PredictionResult::new(0, 0.1).will_churn());
    }
}
