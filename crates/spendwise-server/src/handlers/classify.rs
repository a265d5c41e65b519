//! Expense classification handler

use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;
use tracing::debug;

use spendwise_core::Classification;

use super::read_json;
use crate::{AppError, AppState};

#[derive(Debug, Deserialize)]
pub struct PredictCategoryRequest {
    pub description: Option<String>,
}

/// POST /predict_category
///
/// Keyword table first, then the statistical classifier. Responds with
/// `{"category": .., "source": ..}`; the category is "Uncategorized" when
/// neither layer produced one.
pub async fn predict_category(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PredictCategoryRequest>, JsonRejection>,
) -> Result<Json<Classification>, AppError> {
    let request = read_json(payload)?;
    let description = request
        .description
        .filter(|d| !d.trim().is_empty())
        .ok_or_else(|| AppError::bad_request("No description provided"))?;

    let result = state.engine.classify(&description);
    debug!("predict_category '{}' -> {}", description, result.label);
    Ok(Json(result))
}
