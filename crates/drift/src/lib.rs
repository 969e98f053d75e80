//! # drift
//!
//! Drift detection module: compares a reference dataset with production data
//! column by column and flags statistically significant distribution changes.

pub use drift_facade::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{detect_drift, detect_drift_or_empty, DriftConfig, DriftDetector, Table};
    pub use crate::{ColumnDrift, DriftError, DriftReport, FeatureType, Result};
}
