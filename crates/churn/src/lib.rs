//! # churn
//!
//! Churn inference module: customer payloads, pre-trained classifiers loaded
//! from JSON artifacts, and the inference service used by the HTTP server.

pub use churn_facade::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{Classifier, CustomerFeatures, InferenceService, PredictionResult};
    pub use crate::{ModelConfig, ModelError, Result};
}
