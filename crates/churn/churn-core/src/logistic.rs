//! Logistic regression classifier.

use churn_api::{LogisticArtifact, ScalerArtifact};
use churn_spi::{Classifier, FeatureRow, ModelError, Result};

use crate::features::resolve_features;

/// Logistic regression over a subset of the customer features.
///
/// `p(churn) = sigmoid(intercept + sum(coef_k * z_k))` where `z_k` is the
/// (optionally standardized) value of the k-th artifact feature.
#[derive(Debug, Clone)]
pub struct LogisticModel {
    indices: Vec<usize>,
    coefficients: Vec<f64>,
    intercept: f64,
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl LogisticModel {
    /// Build from a parsed artifact, validating shapes and feature names.
    pub fn from_artifact(artifact: &LogisticArtifact) -> Result<Self> {
        let indices = resolve_features(&artifact.feature_names)?;
        let n = indices.len();

        if artifact.coefficients.len() != n {
            return Err(ModelError::InvalidArtifact(format!(
                "expected {} coefficients, got {}",
                n,
                artifact.coefficients.len()
            )));
        }
        if !artifact.intercept.is_finite() || artifact.coefficients.iter().any(|c| !c.is_finite())
        {
            return Err(ModelError::InvalidArtifact(
                "coefficients must be finite".to_string(),
            ));
        }

        let (mean, scale) = match &artifact.scaler {
            Some(scaler) => Self::scaler_params(scaler, n)?,
            None => (vec![0.0; n], vec![1.0; n]),
        };

        Ok(Self {
            indices,
            coefficients: artifact.coefficients.clone(),
            intercept: artifact.intercept,
            mean,
            scale,
        })
    }

    fn scaler_params(scaler: &ScalerArtifact, n: usize) -> Result<(Vec<f64>, Vec<f64>)> {
        if scaler.mean.len() != n || scaler.scale.len() != n {
            return Err(ModelError::InvalidArtifact(format!(
                "scaler expects {} values, got mean={} scale={}",
                n,
                scaler.mean.len(),
                scaler.scale.len()
            )));
        }
        if scaler.mean.iter().chain(&scaler.scale).any(|v| !v.is_finite()) {
            return Err(ModelError::InvalidArtifact(
                "scaler values must be finite".to_string(),
            ));
        }
        // Constant training columns are stored with scale 0; treat them as unscaled.
        let scale = scaler
            .scale
            .iter()
            .map(|&s| if s == 0.0 { 1.0 } else { s })
            .collect();
        Ok((scaler.mean.clone(), scale))
    }

    /// Raw linear score before the sigmoid.
    pub fn decision_function(&self, row: &FeatureRow) -> Result<f64> {
        let mut z = self.intercept;
        for (k, &index) in self.indices.iter().enumerate() {
            let x = row.at(index).ok_or_else(|| {
                ModelError::Inference(format!("feature index {} out of range", index))
            })?;
            z += self.coefficients[k] * (x - self.mean[k]) / self.scale[k];
        }
        if !z.is_finite() {
            return Err(ModelError::Inference("non-finite decision value".to_string()));
        }
        Ok(z)
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

impl Classifier for LogisticModel {
    fn name(&self) -> &str {
        "logistic"
    }

    fn predict_proba(&self, row: &FeatureRow) -> Result<[f64; 2]> {
        let churn = sigmoid(self.decision_function(row)?);
        Ok([1.0 - churn, churn])
    }
}
