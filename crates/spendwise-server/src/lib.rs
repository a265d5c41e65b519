//! Spendwise Web Server
//!
//! Axum-based JSON API over the Spendwise engine. Paths and body shapes
//! are stable so existing expense clients keep working.
//!
//! Security features:
//! - Restrictive CORS policy unless origins are configured
//! - `nosniff` and frame-deny headers on every response
//! - Sanitized error responses (internal errors are logged, not returned)

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer};
use tracing::{error, info};

use spendwise_core::{Engine, ServerConfig};

mod handlers;

/// Shared application state
pub struct AppState {
    pub engine: Arc<Engine>,
}

/// Create the application router
pub fn create_router(engine: Arc<Engine>, config: ServerConfig) -> Router {
    let cors = cors_layer(&config.allowed_origins);
    let state = Arc::new(AppState { engine });

    Router::new()
        .route("/health", get(handlers::health))
        .route("/model", get(handlers::model_status))
        .route("/predict_category", post(handlers::predict_category))
        .route("/predict_next_month", post(handlers::predict_next_month))
        .route("/predict_price", post(handlers::predict_price))
        .route("/analyze_behavior", post(handlers::analyze_behavior))
        .route("/analyze_personality", post(handlers::analyze_personality))
        .route("/train", post(handlers::train))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(SetResponseHeaderLayer::overriding(
                    header::X_CONTENT_TYPE_OPTIONS,
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    header::X_FRAME_OPTIONS,
                    HeaderValue::from_static("DENY"),
                )),
        )
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    if allowed_origins.is_empty() {
        // Same-origin only
        return cors;
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();
    cors.allow_origin(origins)
}

/// Start the server
pub async fn serve(engine: Arc<Engine>, config: ServerConfig) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.host, config.port);

    match engine.model_info() {
        Some(model) => info!(
            "Classifier ready: {} rows, version {} ({})",
            model.documents,
            model.version,
            engine.origin()
        ),
        None => info!("Classifier untrained; keyword matches only until POST /train"),
    }

    let app = create_router(engine, config);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
pub struct AppError {
    status: StatusCode,
    message: String,
    internal: Option<anyhow::Error>,
}

impl AppError {
    pub fn bad_request(msg: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn not_found(msg: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: msg.to_string(),
            internal: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Some(err) = &self.internal {
            error!(error = %err, "Internal error");
        }

        let body = Json(serde_json::json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            // Return generic message to client
            message: "An internal error occurred".to_string(),
            internal: Some(err.into()),
        }
    }
}
