//! Data models for drift detection.
//!
//! This module contains the per-column verdicts and the report built from them.

mod column_drift;
mod drift_report;

pub use column_drift::{ColumnDrift, FeatureType, TestOutcome};
pub use drift_report::DriftReport;
