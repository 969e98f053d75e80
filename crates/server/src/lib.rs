//! # churn-server
//!
//! REST API serving the churn classifier.
//!
//! The router is built from an injected [`AppState`], so tests can swap in
//! mock classifiers without touching the filesystem.

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod telemetry;

pub use config::ServerConfig;
pub use error::ApiError;
pub use state::AppState;
pub use telemetry::TelemetryConfig;

/// Build the application router with middleware.
pub fn app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::root))
        .route("/health", get(routes::health))
        .route("/predict", post(routes::predict))
        // Middleware layers
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Bind the configured address, load the model and serve until shutdown.
///
/// A missing or broken model leaves the server up in degraded mode.
pub async fn serve(config: &ServerConfig) -> error::Result<()> {
    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    serve_on(listener, AppState::load(&config.model)).await
}

/// Serve the router on an already bound listener.
pub async fn serve_on(listener: TcpListener, state: AppState) -> error::Result<()> {
    tracing::info!(
        "churn-server v{} listening on {} (model loaded: {})",
        env!("CARGO_PKG_VERSION"),
        listener.local_addr()?,
        state.inference.is_ready()
    );
    axum::serve(listener, app(state)).await?;
    Ok(())
}
