//! Classifier retraining handler

use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use spendwise_core::{Error as CoreError, ExpenseRecord};

use super::read_json;
use crate::{AppError, AppState};

#[derive(Debug, Deserialize)]
pub struct TrainRequest {
    pub expenses: Option<Vec<ExpenseRecord>>,
}

#[derive(Debug, Serialize)]
pub struct TrainResponse {
    pub message: &'static str,
    pub accuracy: f64,
}

/// POST /train - Rebuild the classifier from the posted corpus
///
/// The whole batch is rejected (400) if any record lacks a description or a
/// known category. Fitting runs on the blocking pool; classification keeps
/// using the previous artifact until the new one is published.
pub async fn train(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TrainRequest>, JsonRejection>,
) -> Result<Json<TrainResponse>, AppError> {
    let request = read_json(payload)?;
    let records = request
        .expenses
        .filter(|e| !e.is_empty())
        .ok_or_else(|| AppError::bad_request("No data to train"))?;

    let count = records.len();
    let engine = Arc::clone(&state.engine);
    let result = tokio::task::spawn_blocking(move || engine.train_records(records)).await?;

    match result {
        Ok(accuracy) => {
            info!("Retrained on {} posted expenses", count);
            Ok(Json(TrainResponse {
                message: "Training complete",
                accuracy,
            }))
        }
        Err(CoreError::Training(reason)) => {
            warn!("Rejected training batch: {}", reason);
            Err(AppError::bad_request(&reason))
        }
        Err(e) => Err(e.into()),
    }
}
