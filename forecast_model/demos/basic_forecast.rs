//! Basic forecasting example: run a pretrained averaging model over a series
//! and score the forecast against held-out observations.

use forecast_model::metrics::evaluate_forecast;
use forecast_model::models::batch_forecast;
use forecast_model::models::dense::{Activation, DenseLayer, DenseNetwork};
use forecast_model::series::TimeSeries;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let window_size = 5;
    let batch_size = 8;

    // A one-unit network that averages each window
    let layer = DenseLayer::new(
        vec![vec![1.0 / window_size as f64; window_size]],
        vec![0.0],
        Activation::Linear,
    )?;
    let model = DenseNetwork::new("mean-baseline", vec![layer])?;

    // A slow upward ramp with a little seasonality
    let values: Vec<f64> = (0..60)
        .map(|i| 50.0 + 0.3 * i as f64 + 2.0 * (i as f64 * 0.5).sin())
        .collect();
    let series = TimeSeries::new(values.clone())?;

    // Each window of 5 predicts the observation that follows it
    let forecast = batch_forecast(&model, &series, window_size, batch_size)?;
    let predictions = forecast.squeeze()?;
    let actual = &values[window_size..];

    println!("Windows forecasted: {}", predictions.len());
    println!(
        "First prediction: {:.3} (next observation {:.3})",
        predictions[0], actual[0]
    );

    let metrics = evaluate_forecast(&predictions[..actual.len()], actual)?;
    println!("{}", metrics);

    Ok(())
}
