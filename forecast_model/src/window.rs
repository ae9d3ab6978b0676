//! Sliding-window materialization of a time series for batched inference

use crate::error::{ForecastError, Result};
use crate::series::TimeSeries;

/// A time series reshaped into fixed-length, overlapping windows
///
/// Windows start at positions `0, shift, 2 * shift, …`; a trailing window
/// shorter than `window_size` is dropped. With `shift == 1` this yields
/// exactly `series.len() - window_size + 1` windows.
#[derive(Debug, Clone)]
pub struct WindowedDataset {
    windows: Vec<Vec<f64>>,
    window_size: usize,
    shift: usize,
}

impl WindowedDataset {
    /// Window a time series
    pub fn new(series: &TimeSeries, window_size: usize, shift: usize) -> Result<Self> {
        if window_size == 0 {
            return Err(ForecastError::InvalidParameter(
                "Window size must be positive".to_string(),
            ));
        }
        if shift == 0 {
            return Err(ForecastError::InvalidParameter(
                "Shift must be positive".to_string(),
            ));
        }

        let values = series.values();
        if values.len() < window_size {
            return Err(ForecastError::ValidationError(format!(
                "Insufficient data for windowing. Need at least {} observations, got {}.",
                window_size,
                values.len()
            )));
        }

        let windows = values
            .windows(window_size)
            .step_by(shift)
            .map(|window| window.to_vec())
            .collect();

        Ok(Self {
            windows,
            window_size,
            shift,
        })
    }

    /// Get the window length
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Get the step between consecutive window start positions
    pub fn shift(&self) -> usize {
        self.shift
    }

    /// Get the number of windows
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// Check whether the dataset holds no windows
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Get the materialized windows
    pub fn windows(&self) -> &[Vec<f64>] {
        &self.windows
    }

    /// Group the windows into batches of at most `batch_size`
    ///
    /// The trailing batch may be shorter than `batch_size`; windows are never
    /// dropped at this stage.
    pub fn batches(&self, batch_size: usize) -> Result<impl Iterator<Item = &[Vec<f64>]>> {
        if batch_size == 0 {
            return Err(ForecastError::InvalidParameter(
                "Batch size must be positive".to_string(),
            ));
        }

        Ok(self.windows.chunks(batch_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(n: usize) -> TimeSeries {
        TimeSeries::new((0..n).map(|i| i as f64).collect()).unwrap()
    }

    #[test]
    fn shift_one_covers_every_position() {
        let dataset = WindowedDataset::new(&series(10), 3, 1).unwrap();

        assert_eq!(dataset.len(), 8); // 10 - 3 + 1
        assert_eq!(dataset.windows()[0], vec![0.0, 1.0, 2.0]);
        assert_eq!(dataset.windows()[7], vec![7.0, 8.0, 9.0]);
    }

    #[test]
    fn trailing_partial_window_is_dropped() {
        // Starts at 0, 2, 4; a window at 6 would need elements 6..9.
        let dataset = WindowedDataset::new(&series(8), 3, 2).unwrap();

        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.windows()[2], vec![4.0, 5.0, 6.0]);
    }

    #[test]
    fn rejects_degenerate_parameters() {
        assert!(WindowedDataset::new(&series(10), 0, 1).is_err());
        assert!(WindowedDataset::new(&series(10), 3, 0).is_err());
        assert!(WindowedDataset::new(&series(2), 3, 1).is_err());
    }

    #[test]
    fn trailing_batch_may_be_short() {
        let dataset = WindowedDataset::new(&series(12), 3, 1).unwrap();
        let batches: Vec<_> = dataset.batches(4).unwrap().collect();

        assert_eq!(dataset.len(), 10);
        assert_eq!(batches.len(), 3);
        assert_eq!(batches[0].len(), 4);
        assert_eq!(batches[1].len(), 4);
        assert_eq!(batches[2].len(), 2);

        assert!(dataset.batches(0).is_err());
    }
}
