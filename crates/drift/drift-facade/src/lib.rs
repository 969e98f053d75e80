//! Drift Detection Facade
//!
//! Unified re-exports for the drift detection module.
//!
//! This facade provides a single entry point to all drift detection functionality:
//! - `DistributionTest` trait, `DriftReport` and errors from SPI
//! - `DriftConfig` and its builder from API
//! - Statistical tests, `Table` and `DriftDetector` from Core

// Re-export everything from SPI
pub use drift_spi::*;

// Re-export everything from API
pub use drift_api::*;

// Re-export everything from Core
pub use drift_core::*;
