//! Drift Detection Service Provider Interface
//!
//! Defines traits and types for comparing a reference and a production
//! distribution column by column.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::DistributionTest;
pub use error::{DriftError, Result};
pub use model::{ColumnDrift, DriftReport, FeatureType, TestOutcome};
