//! Shared application state.

use churn::{InferenceService, ModelConfig};

/// State handed to every handler. The model is loaded once and only read.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub inference: InferenceService,
}

impl AppState {
    pub fn new(inference: InferenceService) -> Self {
        Self { inference }
    }

    /// Load the model; on failure the state is degraded, not an error.
    pub fn load(config: &ModelConfig) -> Self {
        Self::new(InferenceService::load(config))
    }
}
