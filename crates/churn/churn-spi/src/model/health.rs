//! Health probe types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Service health derived from whether a model is held in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HealthStatus::Healthy => write!(f, "healthy"),
            HealthStatus::Unhealthy => write!(f, "unhealthy"),
        }
    }
}

/// Body of the health endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub model_loaded: bool,
}

impl HealthReport {
    pub fn from_model_loaded(model_loaded: bool) -> Self {
        let status = if model_loaded {
            HealthStatus::Healthy
        } else {
            HealthStatus::Unhealthy
        };
        Self {
            status,
            model_loaded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_loaded() {
        let report = HealthReport::from_model_loaded(true);
        assert_eq!(report.status, HealthStatus::Healthy);
        assert!(report.model_loaded);
    }

    #[test]
    fn test_report_serializes_lowercase_status() {
        let json = serde_json::to_string(&HealthReport::from_model_loaded(false)).unwrap();
        assert_eq!(json, r#"{"status":"unhealthy","model_loaded":false}"#);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(HealthStatus::Healthy.to_string(), "healthy");
        assert_eq!(HealthStatus::Unhealthy.to_string(), "unhealthy");
    }
}
