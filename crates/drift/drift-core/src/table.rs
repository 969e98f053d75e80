//! Column-oriented numeric tables read from CSV.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use drift_spi::{DriftError, Result};

/// Named numeric columns extracted from a tabular file.
///
/// Only the requested columns are parsed; other columns (free text,
/// identifiers) are ignored.
#[derive(Debug, Clone, Default)]
pub struct Table {
    label: String,
    columns: HashMap<String, Vec<f64>>,
}

impl Table {
    /// Build an in-memory table.
    pub fn from_columns<I, S>(label: &str, columns: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<f64>)>,
        S: Into<String>,
    {
        Self {
            label: label.to_string(),
            columns: columns.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Read the named columns from a CSV file with a header row.
    pub fn from_csv_path(label: &str, path: &Path, columns: &[&str]) -> Result<Self> {
        let file = File::open(path).map_err(|source| DriftError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_csv_reader(label, BufReader::new(file), columns)
    }

    /// Read the named columns from any CSV source with a header row.
    pub fn from_csv_reader<R: Read>(label: &str, reader: R, columns: &[&str]) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let headers = reader.headers()?.clone();

        let indices = columns
            .iter()
            .map(|&column| {
                headers
                    .iter()
                    .position(|h| h == column)
                    .map(|idx| (column, idx))
                    .ok_or_else(|| DriftError::MissingColumn {
                        column: column.to_string(),
                        table: label.to_string(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut data: Vec<Vec<f64>> = vec![Vec::new(); indices.len()];
        for (row, record) in reader.records().enumerate() {
            let record = record?;
            for (slot, &(column, idx)) in indices.iter().enumerate() {
                let raw = record.get(idx).unwrap_or("");
                let value = raw
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| DriftError::InvalidValue {
                        column: column.to_string(),
                        row: row + 1,
                        value: raw.to_string(),
                    })?;
                data[slot].push(value);
            }
        }

        Ok(Self {
            label: label.to_string(),
            columns: indices
                .into_iter()
                .map(|(column, _)| column.to_string())
                .zip(data)
                .collect(),
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Values of a column; missing or empty columns are errors.
    pub fn column(&self, name: &str) -> Result<&[f64]> {
        let values = self
            .columns
            .get(name)
            .ok_or_else(|| DriftError::MissingColumn {
                column: name.to_string(),
                table: self.label.clone(),
            })?;
        if values.is_empty() {
            return Err(DriftError::EmptyColumn(name.to_string()));
        }
        Ok(values)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }
}
