//! Single-row model input.

/// Number of model input columns.
pub const FEATURE_COUNT: usize = 11;

/// Canonical column order of a [`FeatureRow`].
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "CreditScore",
    "Age",
    "Tenure",
    "Balance",
    "NumOfProducts",
    "HasCrCard",
    "IsActiveMember",
    "EstimatedSalary",
    "Geography_Germany",
    "Geography_Spain",
    "Gender_Male",
];

/// Feature values for one customer, in [`FEATURE_NAMES`] order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureRow {
    values: [f64; FEATURE_COUNT],
}

impl FeatureRow {
    pub fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.values
    }

    /// Value at a canonical column index.
    pub fn at(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Value of a named column.
    pub fn get(&self, name: &str) -> Option<f64> {
        Self::index_of(name).map(|i| self.values[i])
    }

    /// Canonical index of a column name.
    pub fn index_of(name: &str) -> Option<usize> {
        FEATURE_NAMES.iter().position(|&n| n == name)
    }
}
