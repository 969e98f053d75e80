//! Churn Inference Facade
//!
//! Unified re-exports for the churn inference module.
//!
//! This facade provides a single entry point to all churn inference functionality:
//! - `Classifier` trait, payload and error types from SPI
//! - Model configuration and artifact schema from API
//! - Classifier implementations and `InferenceService` from Core

// Re-export everything from SPI
pub use churn_spi::*;

// Re-export everything from API
pub use churn_api::*;

// Re-export everything from Core
pub use churn_core::*;
