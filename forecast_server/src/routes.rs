//! API route handlers

use crate::data::{BATCH_SIZE, SERIES, VALIDATION, WINDOW_SIZE};
use crate::{AppError, AppState};
use axum::extract::State;
use axum::Json;
use forecast_model::metrics::evaluate_forecast;
use forecast_model::models::batch_forecast;
use forecast_model::models::dense::DenseNetwork;
use forecast_model::{PretrainedModel, TimeSeries};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub result: f64,
}

pub async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Hello World" }))
}

/// Forecast over the embedded series and score against the validation slice
///
/// The model artifact is deserialized from disk on every call; there is no
/// caching between requests.
pub async fn predict(State(state): State<AppState>) -> Result<Json<PredictResponse>, AppError> {
    let model = DenseNetwork::load(&state.model_path)?;
    tracing::debug!(model = model.name(), "model loaded");

    let series = TimeSeries::from_slice(&SERIES)?;
    let forecast = batch_forecast(&model, &series, WINDOW_SIZE, BATCH_SIZE)?;
    let results = forecast.squeeze()?;

    let metrics = evaluate_forecast(&results, &VALIDATION)?;
    tracing::info!(windows = results.len(), mse = metrics.mse, "forecast evaluated");

    Ok(Json(PredictResponse {
        result: metrics.mse,
    }))
}
