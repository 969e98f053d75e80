//! Server configuration from the environment.

use std::net::SocketAddr;

use churn::ModelConfig;

use crate::error::{Result, ServerError};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

/// Bind address and model location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub model: ModelConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            model: ModelConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Read `HOST`, `PORT` and `MODEL_PATH`.
    pub fn from_env() -> Result<Self> {
        Self::from_values(
            std::env::var("HOST").ok(),
            std::env::var("PORT").ok(),
            ModelConfig::from_env(),
        )
    }

    fn from_values(host: Option<String>, port: Option<String>, model: ModelConfig) -> Result<Self> {
        let host = host
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match port {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ServerError::Config {
                name: "PORT".to_string(),
                reason: format!("'{}': {}", raw, e),
            })?,
            None => DEFAULT_PORT,
        };
        Ok(Self { host, port, model })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| ServerError::Config {
                name: "HOST".to_string(),
                reason: format!("'{}': {}", self.host, e),
            })
    }
}
