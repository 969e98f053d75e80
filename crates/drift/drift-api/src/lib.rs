//! Drift Detection API
//!
//! Configuration types and builders for drift detection.

mod config;

// Re-export SPI types
pub use drift_spi::{ColumnDrift, DriftError, DriftReport, FeatureType, Result, TestOutcome};

pub use config::{
    DriftConfig, DriftConfigBuilder, DEFAULT_NUMERICAL_COLUMNS, DEFAULT_THRESHOLD,
    ONE_HOT_COLUMNS,
};
