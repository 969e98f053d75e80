//! Tracing setup and the optional Application Insights connection.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the Application Insights connection string.
pub const CONNECTION_STRING_ENV: &str = "APPLICATIONINSIGHTS_CONNECTION_STRING";

const DEFAULT_FILTER: &str = "server=info,churn=info,tower_http=info";

/// Telemetry settings.
///
/// The connection string is a `;`-separated list of `Key=Value` pairs, e.g.
/// `InstrumentationKey=...;IngestionEndpoint=https://...`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TelemetryConfig {
    pub connection_string: Option<String>,
}

impl TelemetryConfig {
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(CONNECTION_STRING_ENV).ok())
    }

    pub fn from_value(value: Option<String>) -> Self {
        Self {
            connection_string: value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
        }
    }

    pub fn enabled(&self) -> bool {
        self.connection_string.is_some()
    }

    pub fn instrumentation_key(&self) -> Option<&str> {
        self.field("InstrumentationKey")
    }

    pub fn ingestion_endpoint(&self) -> Option<&str> {
        self.field("IngestionEndpoint")
    }

    fn field(&self, key: &str) -> Option<&str> {
        self.connection_string
            .as_deref()?
            .split(';')
            .filter_map(|pair| pair.split_once('='))
            .find(|(k, _)| k.trim().eq_ignore_ascii_case(key))
            .map(|(_, v)| v.trim())
            .filter(|v| !v.is_empty())
    }
}

/// Install the global subscriber.
///
/// With a connection string, events are emitted as JSON lines for the
/// collector to ship; otherwise a plain console format is used. `RUST_LOG`
/// overrides the default filter either way.
pub fn init_tracing(config: &TelemetryConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_FILTER.into());

    let (json, plain) = if config.enabled() {
        (Some(tracing_subscriber::fmt::layer().json()), None)
    } else {
        (None, Some(tracing_subscriber::fmt::layer()))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(plain)
        .init();

    match config.instrumentation_key() {
        Some(key) => tracing::info!(
            instrumentation_key = key,
            endpoint = config.ingestion_endpoint().unwrap_or("default"),
            "Application Insights telemetry enabled"
        ),
        None if config.enabled() => {
            tracing::warn!("Connection string has no InstrumentationKey, telemetry may be dropped")
        }
        None => tracing::warn!(
            "{} not set, telemetry goes to the console only",
            CONNECTION_STRING_ENV
        ),
    }
}
