//! Spending analysis handlers
//!
//! Distributions are JSON objects of bucket name → amount. Bucket names are
//! matched exactly ("Food", not "food"); unknown buckets still count toward
//! the total.

use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;

use spendwise_core::{BehaviorAnalysis, CategoryDistribution, PersonalityProfile};

use super::{read_json, require};
use crate::{AppError, AppState};

#[derive(Debug, Deserialize)]
pub struct BehaviorRequest {
    pub category_distribution: Option<CategoryDistribution>,
}

#[derive(Debug, Deserialize)]
pub struct PersonalityRequest {
    pub category_distribution: Option<CategoryDistribution>,
    #[serde(default)]
    pub total_spend: f64,
    #[serde(default = "default_month_count")]
    pub month_count: u32,
}

fn default_month_count() -> u32 {
    1
}

/// POST /analyze_behavior
pub async fn analyze_behavior(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BehaviorRequest>, JsonRejection>,
) -> Result<Json<BehaviorAnalysis>, AppError> {
    let request = read_json(payload)?;
    let dist = require(request.category_distribution, "category_distribution")?;

    Ok(Json(state.engine.analyze_behavior(&dist)))
}

/// POST /analyze_personality
///
/// `total_spend` defaults to 0 (which yields Newcomer) and `month_count` to 1.
pub async fn analyze_personality(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PersonalityRequest>, JsonRejection>,
) -> Result<Json<PersonalityProfile>, AppError> {
    let request = read_json(payload)?;
    let dist = require(request.category_distribution, "category_distribution")?;

    Ok(Json(state.engine.analyze_personality(
        &dist,
        request.total_spend,
        request.month_count,
    )))
}
