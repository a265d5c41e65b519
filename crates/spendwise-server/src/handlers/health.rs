//! Service and model status handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use spendwise_core::ArtifactInfo;

use crate::{AppError, AppState};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// Classifier state reported by GET /model
#[derive(Debug, Serialize)]
pub struct ModelStatusResponse {
    pub origin: String,
    pub store: Option<String>,
    #[serde(flatten)]
    pub artifact: ArtifactInfo,
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "Spendwise Engine",
    })
}

/// GET /model - Current classifier artifact, 404 when untrained
pub async fn model_status(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ModelStatusResponse>, AppError> {
    let artifact = state
        .engine
        .model_info()
        .ok_or_else(|| AppError::not_found("Classifier has not been trained"))?;

    Ok(Json(ModelStatusResponse {
        origin: state.engine.origin().to_string(),
        store: state.engine.store_location(),
        artifact,
    }))
}
