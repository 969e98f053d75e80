//! Drift report type.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::column_drift::ColumnDrift;

/// Column name to drift verdict.
///
/// Serializes as a plain JSON object keyed by column name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DriftReport {
    columns: BTreeMap<String, ColumnDrift>,
}

impl DriftReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: impl Into<String>, drift: ColumnDrift) {
        self.columns.insert(column.into(), drift);
    }

    pub fn get(&self, column: &str) -> Option<&ColumnDrift> {
        self.columns.get(column)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColumnDrift)> {
        self.columns.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Names of columns whose drift flag is set.
    pub fn drifted_columns(&self) -> Vec<&str> {
        self.iter()
            .filter(|(_, d)| d.drift_detected)
            .map(|(name, _)| name)
            .collect()
    }

    /// Whether any column drifted.
    pub fn has_drift(&self) -> bool {
        self.columns.values().any(|d| d.drift_detected)
    }
}
