//! HTTP request handlers organized by domain
//!
//! Each submodule contains handlers for a specific API area.

pub mod analysis;
pub mod classify;
pub mod forecast;
pub mod health;
pub mod training;

// Re-export all handlers for use in router
pub use analysis::*;
pub use classify::*;
pub use forecast::*;
pub use health::*;
pub use training::*;

use axum::{extract::rejection::JsonRejection, Json};

use crate::AppError;

/// Unwrap a JSON body, turning axum's rejection into a 400 with the usual error body
pub(crate) fn read_json<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::bad_request(&rejection.body_text()))
}

/// Reject a request whose required field is absent
pub(crate) fn require<T>(field: Option<T>, name: &str) -> Result<T, AppError> {
    field.ok_or_else(|| AppError::bad_request(&format!("Missing field: {}", name)))
}
