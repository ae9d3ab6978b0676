//! # forecast_server
//!
//! REST API serving a pretrained windowed forecasting model: `GET /predict`
//! reloads the model artifact, forecasts over the embedded series, and
//! returns the mean squared error against the held-out validation slice.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use forecast_model::ForecastError;
use std::path::PathBuf;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod data;
pub mod routes;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Location of the serialized model artifact, reloaded on every call
    pub model_path: PathBuf,
}

impl AppState {
    pub fn new(model_path: impl Into<PathBuf>) -> Self {
        Self {
            model_path: model_path.into(),
        }
    }
}

/// Error wrapper turning library failures into a generic server error
#[derive(Debug)]
pub struct AppError(pub ForecastError);

impl From<ForecastError> for AppError {
    fn from(err: ForecastError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": self.0.to_string() })),
        )
            .into_response()
    }
}

/// Build the application router
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::root))
        .route("/predict", get(routes::predict))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
