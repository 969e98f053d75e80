//! Drift detection error types.

use thiserror::Error;

/// Reasons a drift comparison could not be evaluated.
#[derive(Debug, Error)]
pub enum DriftError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing column '{column}' in {table} data")]
    MissingColumn { column: String, table: String },

    #[error("Invalid value '{value}' in column '{column}' at row {row}")]
    InvalidValue {
        column: String,
        row: usize,
        value: String,
    },

    #[error("Column '{0}' has no values")]
    EmptyColumn(String),

    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },
}

/// Result type for drift detection operations.
pub type Result<T> = std::result::Result<T, DriftError>;
