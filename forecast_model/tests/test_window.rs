use forecast_model::series::TimeSeries;
use forecast_model::window::WindowedDataset;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn ramp(n: usize) -> TimeSeries {
    TimeSeries::new((0..n).map(|i| i as f64).collect()).unwrap()
}

#[rstest]
#[case(10, 3, 1, 8)] // n - w + 1
#[case(8, 3, 2, 3)] // starts 0, 2, 4; 6 would overrun
#[case(5, 5, 1, 1)] // exactly one full window
#[case(6, 3, 3, 2)] // non-overlapping
#[case(7, 3, 3, 2)] // trailing element never forms a window
fn window_counts(
    #[case] len: usize,
    #[case] window_size: usize,
    #[case] shift: usize,
    #[case] expected: usize,
) {
    let dataset = WindowedDataset::new(&ramp(len), window_size, shift).unwrap();
    assert_eq!(dataset.len(), expected);
}

#[test]
fn windows_are_contiguous_and_ordered() {
    let dataset = WindowedDataset::new(&ramp(6), 3, 1).unwrap();

    assert_eq!(dataset.window_size(), 3);
    assert_eq!(dataset.shift(), 1);

    let expected: Vec<Vec<f64>> = vec![
        vec![0.0, 1.0, 2.0],
        vec![1.0, 2.0, 3.0],
        vec![2.0, 3.0, 4.0],
        vec![3.0, 4.0, 5.0],
    ];
    assert_eq!(dataset.windows(), expected.as_slice());
}

#[test]
fn every_window_has_full_length() {
    // A trailing partial window must be dropped, never padded
    let dataset = WindowedDataset::new(&ramp(11), 4, 3).unwrap();

    assert!(dataset.windows().iter().all(|w| w.len() == 4));
    assert_eq!(dataset.len(), 3); // starts 0, 3, 6; 9 would need 9..13
}

#[test]
fn batching_preserves_order_and_coverage() {
    let dataset = WindowedDataset::new(&ramp(40), 5, 1).unwrap();
    assert_eq!(dataset.len(), 36);

    let batches: Vec<_> = dataset.batches(8).unwrap().collect();
    assert_eq!(batches.len(), 5);
    assert_eq!(batches.last().unwrap().len(), 4);

    let flattened: Vec<&Vec<f64>> = batches.into_iter().flatten().collect();
    assert_eq!(flattened.len(), dataset.len());
    assert_eq!(flattened[0][0], 0.0);
    assert_eq!(flattened[35][0], 35.0);
}

#[test]
fn insufficient_data_is_an_error() {
    let result = WindowedDataset::new(&ramp(4), 20, 1);
    assert!(result.is_err());
}
