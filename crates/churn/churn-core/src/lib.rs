//! Churn Model Core
//!
//! Classifier implementations, artifact loading and the inference service.

mod features;
mod forest;
mod loader;
mod logistic;
mod service;

pub use forest::ForestModel;
pub use loader::{load_model, model_from_artifact};
pub use logistic::LogisticModel;
pub use service::InferenceService;
