//! Pretrained models and the windowed forecasting pipeline

use crate::error::{ForecastError, Result};
use crate::series::TimeSeries;
use crate::window::WindowedDataset;
use std::fmt::Debug;

pub mod dense;

/// A model that produces one output vector per fixed-length input window
///
/// Implementations are inference-only: the parameters come from a pretrained
/// artifact and are never updated here.
pub trait PretrainedModel: Debug {
    /// Expected input window length
    fn input_size(&self) -> usize;

    /// Width of the output produced per window
    fn output_size(&self) -> usize;

    /// Run inference over a batch of windows
    ///
    /// Returns one output row per input window, in input order.
    fn predict_batch(&self, windows: &[Vec<f64>]) -> Result<Vec<Vec<f64>>>;

    /// Name of the model
    fn name(&self) -> &str;
}

/// Forecast produced by running a model over a windowed series
///
/// Holds one output row per window. For models with a single output unit the
/// rows collapse to scalars via [`Forecast::squeeze`].
#[derive(Debug, Clone)]
pub struct Forecast {
    rows: Vec<Vec<f64>>,
}

impl Forecast {
    /// Create a forecast from per-window output rows
    pub fn new(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }

    /// Get the per-window output rows
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Get the number of forecasted windows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check whether the forecast is empty
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Drop the single-dimensional output axis, yielding one scalar per window
    pub fn squeeze(&self) -> Result<Vec<f64>> {
        self.rows
            .iter()
            .map(|row| {
                if row.len() == 1 {
                    Ok(row[0])
                } else {
                    Err(ForecastError::ValidationError(format!(
                        "Cannot squeeze forecast row of width {}",
                        row.len()
                    )))
                }
            })
            .collect()
    }
}

/// Run a pretrained model over sliding windows of a series
///
/// The series is windowed with the given window size and shift 1, the windows
/// are grouped into batches of at most `batch_size`, and the model's batch
/// predictions are concatenated in window order. The result holds exactly
/// `series.len() - window_size + 1` rows.
pub fn batch_forecast<M: PretrainedModel>(
    model: &M,
    series: &TimeSeries,
    window_size: usize,
    batch_size: usize,
) -> Result<Forecast> {
    if window_size != model.input_size() {
        return Err(ForecastError::ValidationError(format!(
            "Window size ({}) doesn't match model input size ({})",
            window_size,
            model.input_size()
        )));
    }

    let dataset = WindowedDataset::new(series, window_size, 1)?;
    let mut rows = Vec::with_capacity(dataset.len());

    for batch in dataset.batches(batch_size)? {
        let outputs = model.predict_batch(batch)?;
        if outputs.len() != batch.len() {
            return Err(ForecastError::ModelError(format!(
                "Model '{}' returned {} rows for a batch of {}",
                model.name(),
                outputs.len(),
                batch.len()
            )));
        }
        rows.extend(outputs);
    }

    Ok(Forecast::new(rows))
}
