//! Drift detection configuration types.

use drift_spi::{DriftError, Result};
use serde::{Deserialize, Serialize};

/// Default significance level.
pub const DEFAULT_THRESHOLD: f64 = 0.05;

/// Numeric columns compared with the Kolmogorov-Smirnov test by default.
pub const DEFAULT_NUMERICAL_COLUMNS: [&str; 4] = ["CreditScore", "Age", "Balance", "EstimatedSalary"];

/// One-hot columns of the serving schema. Not compared unless opted in.
pub const ONE_HOT_COLUMNS: [&str; 3] = ["Geography_Germany", "Geography_Spain", "Gender_Male"];

/// Which columns to compare and how strict to be.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriftConfig {
    /// Significance level; a column drifts when `p_value < threshold`.
    pub threshold: f64,
    /// Columns compared with the Kolmogorov-Smirnov test.
    pub numerical_columns: Vec<String>,
    /// Columns compared with the chi-square test of homogeneity.
    #[serde(default)]
    pub categorical_columns: Vec<String>,
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            numerical_columns: DEFAULT_NUMERICAL_COLUMNS.iter().map(|c| c.to_string()).collect(),
            categorical_columns: Vec::new(),
        }
    }
}

impl DriftConfig {
    /// Default columns with a custom threshold.
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }

    pub fn builder() -> DriftConfigBuilder {
        DriftConfigBuilder::new()
    }

    /// Every column the comparison needs, numeric first.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.numerical_columns
            .iter()
            .chain(&self.categorical_columns)
            .map(String::as_str)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.threshold > 0.0 && self.threshold < 1.0) {
            return Err(DriftError::InvalidParameter {
                name: "threshold".to_string(),
                reason: format!("must be in (0, 1), got {}", self.threshold),
            });
        }
        if self.numerical_columns.is_empty() && self.categorical_columns.is_empty() {
            return Err(DriftError::InvalidParameter {
                name: "columns".to_string(),
                reason: "at least one column is required".to_string(),
            });
        }
        let mut seen = std::collections::HashSet::new();
        for column in self.columns() {
            if !seen.insert(column) {
                return Err(DriftError::InvalidParameter {
                    name: "columns".to_string(),
                    reason: format!("column '{}' listed twice", column),
                });
            }
        }
        Ok(())
    }
}

/// Builder for DriftConfig.
#[derive(Debug, Default)]
pub struct DriftConfigBuilder {
    threshold: Option<f64>,
    numerical_columns: Option<Vec<String>>,
    categorical_columns: Vec<String>,
}

impl DriftConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// Replace the default numeric columns.
    pub fn numerical_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.numerical_columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    /// Add a categorical column.
    pub fn categorical_column(mut self, column: impl Into<String>) -> Self {
        self.categorical_columns.push(column.into());
        self
    }

    /// Add the one-hot geography and gender columns.
    pub fn with_one_hot_columns(mut self) -> Self {
        self.categorical_columns
            .extend(ONE_HOT_COLUMNS.iter().map(|c| c.to_string()));
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<DriftConfig> {
        let defaults = DriftConfig::default();
        let config = DriftConfig {
            threshold: self.threshold.unwrap_or(defaults.threshold),
            numerical_columns: self.numerical_columns.unwrap_or(defaults.numerical_columns),
            categorical_columns: self.categorical_columns,
        };
        config.validate()?;
        Ok(config)
    }
}
