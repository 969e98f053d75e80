//! # churn-server
//!
//! Loads the churn model once and serves predictions over HTTP.

use server::{ServerConfig, TelemetryConfig};

#[tokio::main]
async fn main() -> server::error::Result<()> {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    let telemetry = TelemetryConfig::from_env();
    server::telemetry::init_tracing(&telemetry);

    let config = ServerConfig::from_env()?;
    server::serve(&config).await
}
