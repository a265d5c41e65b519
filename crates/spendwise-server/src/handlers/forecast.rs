//! Forecast handlers

use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};

use spendwise_core::PriceForecast;

use super::{read_json, require};
use crate::{AppError, AppState};

#[derive(Debug, Deserialize)]
pub struct NextMonthRequest {
    /// Monthly totals, oldest first
    pub monthly_totals: Option<Vec<f64>>,
}

#[derive(Debug, Serialize)]
pub struct NextMonthResponse {
    pub predicted_expense: f64,
}

#[derive(Debug, Deserialize)]
pub struct PriceRequest {
    /// Observed prices, oldest first
    pub prices: Option<Vec<f64>>,
}

/// POST /predict_next_month
pub async fn predict_next_month(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NextMonthRequest>, JsonRejection>,
) -> Result<Json<NextMonthResponse>, AppError> {
    let request = read_json(payload)?;
    let totals = require(request.monthly_totals, "monthly_totals")?;

    Ok(Json(NextMonthResponse {
        predicted_expense: state.engine.forecast_next(&totals),
    }))
}

/// POST /predict_price
pub async fn predict_price(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PriceRequest>, JsonRejection>,
) -> Result<Json<PriceForecast>, AppError> {
    let request = read_json(payload)?;
    let prices = require(request.prices, "prices")?;

    Ok(Json(state.engine.predict_price(&prices)))
}
