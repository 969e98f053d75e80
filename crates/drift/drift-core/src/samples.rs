//! Input checks shared by the two-sample tests.

use drift_spi::{DriftError, Result};

/// Both samples must be non-empty and hold only finite values.
pub(crate) fn check_samples(reference: &[f64], production: &[f64]) -> Result<()> {
    if reference.is_empty() || production.is_empty() {
        return Err(DriftError::InvalidParameter {
            name: "sample".to_string(),
            reason: "both samples must be non-empty".to_string(),
        });
    }
    for (label, sample) in [("reference", reference), ("production", production)] {
        if let Some((index, value)) = sample.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(DriftError::InvalidParameter {
                name: "sample".to_string(),
                reason: format!("{} value {} at index {} is not finite", label, value, index),
            });
        }
    }
    Ok(())
}
