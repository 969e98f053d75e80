//! API route handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use churn::{CustomerFeatures, HealthReport, PredictionResult};
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
}

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Bank Churn Prediction API".to_string(),
    })
}

pub async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    Json(state.inference.health())
}

pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<CustomerFeatures>, JsonRejection>,
) -> Result<Json<PredictionResult>, ApiError> {
    // Checked before the body so a degraded server answers 503 regardless.
    if !state.inference.is_ready() {
        return Err(churn::ModelError::Unavailable.into());
    }
    let Json(features) = payload.map_err(|rejection| {
        let status = match rejection.status() {
            StatusCode::UNSUPPORTED_MEDIA_TYPE => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            _ => StatusCode::UNPROCESSABLE_ENTITY,
        };
        ApiError::new(status, rejection.body_text())
    })?;

    match state.inference.predict(&features) {
        Ok(result) => Ok(Json(result)),
        Err(e) => {
            tracing::error!(error = %e, "Prediction failed");
            Err(e.into())
        }
    }
}
