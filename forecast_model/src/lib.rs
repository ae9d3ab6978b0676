//! # Forecast Model
//!
//! A Rust library for windowed time series forecasting with pretrained models.
//!
//! ## Features
//!
//! - Time series containers and sliding-window datasets (fixed window, shift,
//!   drop-remainder semantics)
//! - Pretrained dense networks loaded from JSON artifacts (inference only)
//! - Batched forecasting over all windows of a series
//! - Forecast accuracy metrics (MAE, MSE, RMSE, MAPE, SMAPE)
//!
//! ## Quick Start
//!
//! ```rust
//! use forecast_model::metrics::evaluate_forecast;
//! use forecast_model::models::batch_forecast;
//! use forecast_model::models::dense::{Activation, DenseLayer, DenseNetwork};
//! use forecast_model::series::TimeSeries;
//!
//! # fn main() -> forecast_model::error::Result<()> {
//! // A single averaging unit over windows of two observations
//! let layer = DenseLayer::new(vec![vec![0.5, 0.5]], vec![0.0], Activation::Linear)?;
//! let model = DenseNetwork::new("mean-baseline", vec![layer])?;
//!
//! let series = TimeSeries::new(vec![1.0, 2.0, 3.0, 4.0, 5.0])?;
//! let forecast = batch_forecast(&model, &series, 2, 32)?;
//! let predictions = forecast.squeeze()?;
//! assert_eq!(predictions, vec![1.5, 2.5, 3.5, 4.5]);
//!
//! let metrics = evaluate_forecast(&predictions, &[2.0, 3.0, 4.0, 5.0])?;
//! assert!(metrics.mse > 0.0);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod metrics;
pub mod models;
pub mod series;
pub mod window;

// Re-export commonly used types
pub use crate::error::ForecastError;
pub use crate::models::{batch_forecast, Forecast, PretrainedModel};
pub use crate::series::TimeSeries;
pub use crate::window::WindowedDataset;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
