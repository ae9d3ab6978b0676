//! Time series data handling for forecasting

use crate::error::{ForecastError, Result};

/// Ordered sequence of observations for forecasting
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    /// Observed values, oldest first
    values: Vec<f64>,
}

impl TimeSeries {
    /// Create a new time series from raw observations
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(ForecastError::DataError(
                "Time series must contain at least one observation".to_string(),
            ));
        }

        Ok(Self { values })
    }

    /// Create a time series from a slice of observations
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        Self::new(values.to_vec())
    }

    /// Get the observed values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Get the length of the time series
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the time series is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Calculate the mean of the observations
    pub fn mean(&self) -> f64 {
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }

    /// Calculate the population standard deviation of the observations
    pub fn std_dev(&self) -> f64 {
        let mean = self.mean();
        let variance = self
            .values
            .iter()
            .map(|value| (value - mean).powi(2))
            .sum::<f64>()
            / self.values.len() as f64;

        variance.sqrt()
    }

    /// Get a contiguous sub-series from start (inclusive) to end (exclusive)
    pub fn slice(&self, start: usize, end: Option<usize>) -> Result<Self> {
        let end = end.unwrap_or(self.values.len());

        if start >= end || end > self.values.len() {
            return Err(ForecastError::ValidationError(format!(
                "Invalid slice bounds [{}, {}) for series of length {}",
                start,
                end,
                self.values.len()
            )));
        }

        Self::new(self.values[start..end].to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_series() {
        assert!(TimeSeries::new(Vec::new()).is_err());
    }

    #[test]
    fn population_statistics() {
        let series = TimeSeries::new(vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();

        assert_eq!(series.mean(), 5.0);
        assert_eq!(series.std_dev(), 2.0);
    }

    #[test]
    fn slice_respects_bounds() {
        let series = TimeSeries::new(vec![1.0, 2.0, 3.0, 4.0]).unwrap();

        let tail = series.slice(1, None).unwrap();
        assert_eq!(tail.values(), &[2.0, 3.0, 4.0]);

        assert!(series.slice(2, Some(2)).is_err());
        assert!(series.slice(0, Some(5)).is_err());
    }
}
