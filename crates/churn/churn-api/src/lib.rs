//! Churn Model API
//!
//! Configuration types and the on-disk artifact schema for churn classifiers.

mod artifact;
mod config;

// Re-export SPI types
pub use churn_spi::{
    Classifier, CustomerFeatures, FeatureRow, HealthReport, HealthStatus, ModelError,
    PredictionResult, Result, FEATURE_COUNT, FEATURE_NAMES,
};

pub use artifact::{ForestArtifact, LogisticArtifact, ModelArtifact, ScalerArtifact, TreeArtifact};
pub use config::{ModelConfig, DEFAULT_MODEL_PATH, MODEL_PATH_ENV};
