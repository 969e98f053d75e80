//! Model loading configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default location of the model artifact, relative to the working directory.
pub const DEFAULT_MODEL_PATH: &str = "model/model.json";

/// Environment variable overriding [`DEFAULT_MODEL_PATH`].
pub const MODEL_PATH_ENV: &str = "MODEL_PATH";

/// Where to load the classifier from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub path: PathBuf,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_MODEL_PATH),
        }
    }
}

impl ModelConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve from `MODEL_PATH`, falling back to the default path.
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(MODEL_PATH_ENV).ok())
    }

    fn from_value(value: Option<String>) -> Self {
        match value {
            Some(path) if !path.trim().is_empty() => Self::new(path.trim()),
            _ => Self::default(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
