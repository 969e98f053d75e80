//! Inference service owning the optional model handle.

use std::sync::Arc;

use churn_api::ModelConfig;
use churn_spi::{
    Classifier, CustomerFeatures, HealthReport, ModelError, PredictionResult, Result,
};

use crate::loader::load_model;

/// Holds the classifier loaded at startup, if any.
///
/// Cloning is cheap; every clone shares the same read-only model.
#[derive(Clone, Default)]
pub struct InferenceService {
    model: Option<Arc<dyn Classifier>>,
}

impl InferenceService {
    pub fn new(model: Option<Arc<dyn Classifier>>) -> Self {
        Self { model }
    }

    pub fn with_model(model: Arc<dyn Classifier>) -> Self {
        Self { model: Some(model) }
    }

    /// A service with no model; every prediction is refused.
    pub fn unavailable() -> Self {
        Self { model: None }
    }

    /// Load the configured artifact once.
    ///
    /// Any failure leaves the service in degraded mode instead of aborting.
    pub fn load(config: &ModelConfig) -> Self {
        match load_model(config.path()) {
            Ok(model) => Self::with_model(model),
            Err(ModelError::ArtifactNotFound(path)) => {
                tracing::error!(path = %path, "Model artifact not found, serving without a model");
                Self::unavailable()
            }
            Err(e) => {
                tracing::error!(
                    path = %config.path().display(),
                    error = %e,
                    "Failed to load model, serving without a model"
                );
                Self::unavailable()
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        self.model.is_some()
    }

    pub fn health(&self) -> HealthReport {
        HealthReport::from_model_loaded(self.is_ready())
    }

    /// Score one customer.
    pub fn predict(&self, features: &CustomerFeatures) -> Result<PredictionResult> {
        let model = self.model.as_ref().ok_or(ModelError::Unavailable)?;

        // Rejected payloads are logged too.
        tracing::info!(target: "churn::predict", request = ?features, "Prediction request received");
        features.validate()?;

        let row = features.to_row();
        let label = model.predict(&row)?;
        let [_, churn] = model.predict_proba(&row)?;

        if label > 1 {
            return Err(ModelError::Inference(format!("label {} is not binary", label)));
        }
        if !(0.0..=1.0).contains(&churn) {
            return Err(ModelError::Inference(format!(
                "probability {} outside [0, 1]",
                churn
            )));
        }

        let result = PredictionResult::new(label, churn);
        tracing::info!(target: "churn::predict", result = ?result, "Prediction result");
        Ok(result)
    }
}

impl std::fmt::Debug for InferenceService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InferenceService")
            .field("model", &self.model.as_ref().map(|m| m.name()))
            .finish()
    }
}
