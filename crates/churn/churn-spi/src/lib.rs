//! Churn Model Service Provider Interface
//!
//! Defines the classifier contract and the data types exchanged with it.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::Classifier;
pub use error::{ModelError, Result};
pub use model::{
    CustomerFeatures, FeatureRow, HealthReport, HealthStatus, PredictionResult, FEATURE_COUNT,
    FEATURE_NAMES,
};
