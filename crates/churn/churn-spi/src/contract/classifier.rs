//! Classifier trait definition.

use crate::error::Result;
use crate::model::FeatureRow;

/// Binary churn classifier.
///
/// Implementations are loaded once and shared read-only between requests,
/// so every method takes `&self`.
pub trait Classifier: Send + Sync {
    /// Short identifier of the model family (e.g. "logistic").
    fn name(&self) -> &str;

    /// Class probabilities `[p(stay), p(churn)]` for a single row.
    fn predict_proba(&self, row: &FeatureRow) -> Result<[f64; 2]>;

    /// Predicted class label for a single row.
    ///
    /// Defaults to a 0.5 cutoff on the churn probability.
    fn predict(&self, row: &FeatureRow) -> Result<u8> {
        let [_, churn] = self.predict_proba(row)?;
        Ok(u8::from(churn > 0.5))
    }
}
