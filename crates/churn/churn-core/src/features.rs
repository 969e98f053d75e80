//! Mapping from artifact column names to row indices.

use churn_spi::{FeatureRow, ModelError, Result};

/// Resolve artifact feature names to canonical row indices.
pub(crate) fn resolve_features(names: &[String]) -> Result<Vec<usize>> {
    if names.is_empty() {
        return Err(ModelError::InvalidArtifact(
            "feature_names must not be empty".to_string(),
        ));
    }
    names
        .iter()
        .map(|name| {
            FeatureRow::index_of(name).ok_or_else(|| ModelError::UnknownFeature(name.clone()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_names() {
        let names = vec!["Age".to_string(), "CreditScore".to_string()];
        assert_eq!(resolve_features(&names).unwrap(), vec![1, 0]);
    }

    #[test]
    fn test_resolve_unknown_name() {
        let names = vec!["Age".to_string(), "Surname".to_string()];
        assert!(matches!(
            resolve_features(&names),
            Err(ModelError::UnknownFeature(name)) if name == "Surname"
        ));
    }

    #[test]
    fn test_resolve_empty() {
        assert!(matches!(resolve_features(&[]), Err(ModelError::InvalidArtifact(_))));
    }
}
