//! Model artifact loading.

use std::path::Path;
use std::sync::Arc;

use churn_api::ModelArtifact;
use churn_spi::{Classifier, ModelError, Result};

use crate::forest::ForestModel;
use crate::logistic::LogisticModel;

/// Build a classifier from a parsed artifact.
pub fn model_from_artifact(artifact: &ModelArtifact) -> Result<Arc<dyn Classifier>> {
    let model: Arc<dyn Classifier> = match artifact {
        ModelArtifact::Logistic(a) => Arc::new(LogisticModel::from_artifact(a)?),
        ModelArtifact::Forest(a) => Arc::new(ForestModel::from_artifact(a)?),
    };
    Ok(model)
}

/// Read, parse and validate a model artifact from disk.
pub fn load_model(path: &Path) -> Result<Arc<dyn Classifier>> {
    if !path.exists() {
        return Err(ModelError::ArtifactNotFound(path.display().to_string()));
    }
    let json = std::fs::read_to_string(path)?;
    let artifact = ModelArtifact::from_json(&json)?;
    let model = model_from_artifact(&artifact)?;

    tracing::info!(
        path = %path.display(),
        kind = model.name(),
        version = artifact.version().unwrap_or("unversioned"),
        features = artifact.feature_names().len(),
        "Model loaded"
    );
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const LOGISTIC: &str = r#"{
        "kind": "logistic",
        "feature_names": ["Age"],
        "coefficients": [0.1],
        "intercept": -4.0
    }"#;

    #[test]
    fn test_load_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_model(&dir.path().join("model.json"));
        assert!(matches!(result, Err(ModelError::ArtifactNotFound(_))));
    }

    #[test]
    fn test_load_logistic() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(LOGISTIC.as_bytes()).unwrap();
        let model = load_model(file.path()).unwrap();
        assert_eq!(model.name(), "logistic");
    }

    #[test]
    fn test_load_corrupt_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"\x00\x01 not json").unwrap();
        assert!(matches!(load_model(file.path()), Err(ModelError::Parse(_))));
    }

    #[test]
    fn test_load_unknown_feature() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(LOGISTIC.replace("Age", "Surname").as_bytes()).unwrap();
        assert!(matches!(
            load_model(file.path()),
            Err(ModelError::UnknownFeature(name)) if name == "Surname"
        ));
    }
}
