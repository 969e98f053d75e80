//! Churn model error types.

use thiserror::Error;

/// Errors raised while loading a model or serving a prediction.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Model not available")]
    Unavailable,

    #[error("Inference failed: {0}")]
    Inference(String),

    #[error("Invalid input '{field}': {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Model artifact not found: {0}")]
    ArtifactNotFound(String),

    #[error("Failed to read model artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid model artifact: {0}")]
    InvalidArtifact(String),

    #[error("Unknown feature: {0}")]
    UnknownFeature(String),
}

/// Result type for churn model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
