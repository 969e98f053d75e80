//! Data models for churn inference.
//!
//! This module contains the request, response and health types shared by
//! every layer of the inference stack.

mod customer_features;
mod feature_row;
mod health;
mod prediction_result;

pub use customer_features::CustomerFeatures;
pub use feature_row::{FeatureRow, FEATURE_COUNT, FEATURE_NAMES};
pub use health::{HealthReport, HealthStatus};
pub use prediction_result::PredictionResult;
