//! Drift detector implementation.

use std::path::Path;

use drift_api::DriftConfig;
use drift_spi::{ColumnDrift, DistributionTest, DriftReport, Result};

use crate::chi_square::ChiSquare;
use crate::ks::KolmogorovSmirnov;
use crate::table::Table;

/// Compares a reference table with a production table column by column.
#[derive(Debug, Clone, Default)]
pub struct DriftDetector {
    config: DriftConfig,
}

impl DriftDetector {
    /// Create a detector, validating the configuration.
    pub fn new(config: DriftConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DriftConfig {
        &self.config
    }

    /// Compare two in-memory tables.
    ///
    /// The first failing column aborts the comparison; no partial report is
    /// returned.
    pub fn compare(&self, reference: &Table, production: &Table) -> Result<DriftReport> {
        let mut report = DriftReport::new();
        let numerical = KolmogorovSmirnov::new();
        let categorical = ChiSquare::new();

        for column in &self.config.numerical_columns {
            let drift = self.compare_column(&numerical, column, reference, production)?;
            report.insert(column.clone(), drift);
        }
        for column in &self.config.categorical_columns {
            let drift = self.compare_column(&categorical, column, reference, production)?;
            report.insert(column.clone(), drift);
        }

        tracing::debug!(
            columns = report.len(),
            drifted = ?report.drifted_columns(),
            "Drift comparison finished"
        );
        Ok(report)
    }

    fn compare_column(
        &self,
        test: &dyn DistributionTest,
        column: &str,
        reference: &Table,
        production: &Table,
    ) -> Result<ColumnDrift> {
        let outcome = test.compare(reference.column(column)?, production.column(column)?)?;
        tracing::debug!(
            column,
            test = test.name(),
            statistic = outcome.statistic,
            p_value = outcome.p_value,
            "Column compared"
        );
        Ok(ColumnDrift::from_outcome(
            outcome,
            self.config.threshold,
            test.feature_type(),
        ))
    }

    /// Read both CSV files and compare them.
    pub fn compare_files(&self, reference: &Path, production: &Path) -> Result<DriftReport> {
        let columns: Vec<&str> = self.config.columns().collect();
        let reference = Table::from_csv_path("reference", reference, &columns)?;
        let production = Table::from_csv_path("production", production, &columns)?;
        self.compare(&reference, &production)
    }
}

/// Compare the default numeric columns of two CSV files.
///
/// Failures are logged and returned to the caller.
pub fn detect_drift(reference: &Path, production: &Path, threshold: f64) -> Result<DriftReport> {
    let result = DriftDetector::new(DriftConfig::with_threshold(threshold))
        .and_then(|detector| detector.compare_files(reference, production));
    if let Err(e) = &result {
        tracing::error!(
            reference = %reference.display(),
            production = %production.display(),
            error = %e,
            "Drift detection failed"
        );
    }
    result
}

/// Like [`detect_drift`], but collapses any failure into an empty report.
///
/// An empty report cannot be told apart from "no columns compared"; prefer
/// [`detect_drift`] when the caller needs to know why nothing came back.
pub fn detect_drift_or_empty(reference: &Path, production: &Path, threshold: f64) -> DriftReport {
    detect_drift(reference, production, threshold).unwrap_or_default()
}
