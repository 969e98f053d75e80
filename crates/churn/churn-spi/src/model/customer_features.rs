//! Customer feature payload accepted by the prediction endpoint.

use serde::{Deserialize, Serialize};

use super::feature_row::FeatureRow;
use crate::error::{ModelError, Result};

/// One bank customer, as sent by the caller.
///
/// Field names on the wire match the training dataset columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerFeatures {
    #[serde(rename = "CreditScore")]
    pub credit_score: i32,
    #[serde(rename = "Age")]
    pub age: i32,
    #[serde(rename = "Tenure")]
    pub tenure: i32,
    #[serde(rename = "Balance")]
    pub balance: f64,
    #[serde(rename = "NumOfProducts")]
    pub num_of_products: i32,
    #[serde(rename = "HasCrCard")]
    pub has_cr_card: i32,
    #[serde(rename = "IsActiveMember")]
    pub is_active_member: i32,
    #[serde(rename = "EstimatedSalary")]
    pub estimated_salary: f64,
    #[serde(rename = "Geography_Germany")]
    pub geography_germany: i32,
    #[serde(rename = "Geography_Spain")]
    pub geography_spain: i32,
    #[serde(rename = "Gender_Male")]
    pub gender_male: i32,
}

impl CustomerFeatures {
    /// Check that the 0/1 indicator fields hold 0 or 1.
    pub fn validate(&self) -> Result<()> {
        let indicators = [
            ("HasCrCard", self.has_cr_card),
            ("IsActiveMember", self.is_active_member),
            ("Geography_Germany", self.geography_germany),
            ("Geography_Spain", self.geography_spain),
            ("Gender_Male", self.gender_male),
        ];
        for (field, value) in indicators {
            if value != 0 && value != 1 {
                return Err(ModelError::InvalidInput {
                    field: field.to_string(),
                    reason: format!("must be 0 or 1, got {}", value),
                });
            }
        }
        Ok(())
    }

    /// Convert to a model input row in canonical column order.
    pub fn to_row(&self) -> FeatureRow {
        FeatureRow::new([
            f64::from(self.credit_score),
            f64::from(self.age),
            f64::from(self.tenure),
            self.balance,
            f64::from(self.num_of_products),
            f64::from(self.has_cr_card),
            f64::from(self.is_active_member),
            self.estimated_salary,
            f64::from(self.geography_germany),
            f64::from(self.geography_spain),
            f64::from(self.gender_male),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FEATURE_NAMES;

    fn sample() -> CustomerFeatures {
        CustomerFeatures {
            credit_score: 619,
            age: 42,
            tenure: 2,
            balance: 0.0,
            num_of_products: 1,
            has_cr_card: 1,
            is_active_member: 1,
            estimated_salary: 101348.88,
            geography_germany: 0,
            geography_spain: 0,
            gender_male: 0,
        }
    }

    #[test]
    fn test_deserialize_wire_names() {
        let json = r#"{
            "CreditScore": 608, "Age": 41, "Tenure": 1, "Balance": 83807.86,
            "NumOfProducts": 1, "HasCrCard": 0, "IsActiveMember": 1,
            "EstimatedSalary": 112542.58, "Geography_Germany": 0,
            "Geography_Spain": 1, "Gender_Male": 0
        }"#;
        let features: CustomerFeatures = serde_json::from_str(json).unwrap();
        assert_eq!(features.credit_score, 608);
        assert_eq!(features.geography_spain, 1);
        assert!((features.balance - 83807.86).abs() < 1e-9);
    }

    #[test]
    fn test_missing_field_rejected() {
        let json = r#"{"CreditScore": 608, "Age": 41}"#;
        assert!(serde_json::from_str::<CustomerFeatures>(json).is_err());
    }

    #[test]
    fn test_float_for_integer_field_rejected() {
        let mut value = serde_json::to_value(sample()).unwrap();
        value["Age"] = serde_json::json!(41.5);
        assert!(serde_json::from_value::<CustomerFeatures>(value).is_err());
    }

    #[test]
    fn test_json_roundtrip_preserves_types() {
        let original = sample();
        let json = serde_json::to_string(&original).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["CreditScore"].is_i64());
        assert!(value["Balance"].is_f64());
        assert!(value["EstimatedSalary"].is_f64());

        let parsed: CustomerFeatures = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_serialized_keys_match_feature_names() {
        let value = serde_json::to_value(sample()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), FEATURE_NAMES.len());
        for name in FEATURE_NAMES {
            assert!(object.contains_key(name), "missing key {}", name);
        }
    }

    #[test]
    fn test_validate_accepts_indicators() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_indicator() {
        let mut features = sample();
        features.gender_male = 2;
        let error = features.validate().unwrap_err();
        match error {
            ModelError::InvalidInput { field, .. } => assert_eq!(field, "Gender_Male"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_to_row_order() {
        let row = sample().to_row();
        assert_eq!(row.get("CreditScore"), Some(619.0));
        assert_eq!(row.get("Age"), Some(42.0));
        assert_eq!(row.get("EstimatedSalary"), Some(101348.88));
        assert_eq!(row.values()[0], 619.0);
        assert_eq!(row.values()[10], 0.0);
    }
}
