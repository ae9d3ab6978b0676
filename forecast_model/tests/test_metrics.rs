use assert_approx_eq::assert_approx_eq;
use forecast_model::metrics::{
    evaluate_forecast, mean_absolute_error, mean_absolute_percentage_error, mean_squared_error,
    root_mean_squared_error, symmetric_mean_absolute_percentage_error,
};

#[test]
fn test_regression_metrics() {
    let actual = vec![10.0, 20.0, 30.0, 40.0, 50.0];
    let predicted = vec![12.0, 18.0, 33.0, 37.0, 52.0];

    let mae = mean_absolute_error(&actual, &predicted);
    assert_approx_eq!(mae, 2.4, 0.01);

    let mse = mean_squared_error(&actual, &predicted);
    assert_approx_eq!(mse, 6.0, 0.01);

    let rmse = root_mean_squared_error(&actual, &predicted);
    assert_approx_eq!(rmse, 2.449, 0.01);

    let mape = mean_absolute_percentage_error(&actual, &predicted);
    assert_approx_eq!(mape, 10.3, 0.01);

    let smape = symmetric_mean_absolute_percentage_error(&actual, &predicted);
    assert_approx_eq!(smape, 9.989, 0.01);
}

#[test]
fn test_perfect_forecast() {
    let actual = vec![1.0, 2.0, 3.0];

    assert_eq!(mean_squared_error(&actual, &actual), 0.0);
    assert_eq!(mean_absolute_error(&actual, &actual), 0.0);
    assert_eq!(symmetric_mean_absolute_percentage_error(&actual, &actual), 0.0);
}

#[test]
fn test_error_handling() {
    // Empty vectors
    let empty: Vec<f64> = vec![];
    let actual = vec![1.0, 2.0];

    assert!(mean_absolute_error(&empty, &actual).is_nan());
    assert!(mean_absolute_error(&empty, &empty).is_nan());

    // Mismatched lengths
    let predicted = vec![1.0, 2.0, 3.0];
    assert!(mean_squared_error(&actual, &predicted).is_nan());
}

#[test]
fn test_mape_skips_zero_actuals() {
    let actual = vec![0.0, 10.0];
    let predicted = vec![5.0, 12.0];

    // Only the second pair contributes, divided by the full length
    let mape = mean_absolute_percentage_error(&actual, &predicted);
    assert_approx_eq!(mape, 10.0, 1e-9);
}

#[test]
fn test_evaluate_forecast() {
    let forecast = vec![12.0, 18.0, 33.0];
    let actual = vec![10.0, 20.0, 30.0];

    let metrics = evaluate_forecast(&forecast, &actual).unwrap();
    assert_approx_eq!(metrics.mae, 7.0 / 3.0, 1e-9);
    assert_approx_eq!(metrics.mse, 17.0 / 3.0, 1e-9);
    assert_approx_eq!(metrics.rmse, metrics.mse.sqrt(), 1e-12);

    let display = metrics.to_string();
    assert!(display.contains("MSE"));

    // Mismatched lengths are a validation error here, not NaN
    assert!(evaluate_forecast(&forecast, &actual[..2]).is_err());
    assert!(evaluate_forecast(&[], &[]).is_err());
}
