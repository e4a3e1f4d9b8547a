//! Small numeric helpers shared by the services.

/// Arithmetic mean as `sum / len`, or `None` for an empty slice.
///
/// Integer-valued samples give an exact result, so averages that land on a
/// tier threshold compare equal to it.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Mean of `field` over `items`, or 0.0 when there are none.
pub fn mean_of<T>(items: &[&T], field: impl Fn(&T) -> f64) -> f64 {
    let values: Vec<f64> = items.iter().map(|item| field(*item)).collect();
    mean(&values).unwrap_or(0.0)
}

/// Ordinary least-squares slope of `values` against their 0-based index.
///
/// `(n·Σxy − Σx·Σy) / (n·Σx² − (Σx)²)`. Fewer than two points have no trend
/// and give 0.0.
pub fn trend_slope(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }

    let n = values.len() as f64;
    let sum_x: f64 = (0..values.len()).map(|i| i as f64).sum();
    let sum_y: f64 = values.iter().sum();
    let sum_xy: f64 = values
        .iter()
        .enumerate()
        .map(|(i, y)| i as f64 * y)
        .sum();
    let sum_xx: f64 = (0..values.len()).map(|i| (i as f64).powi(2)).sum();

    let denominator = n * sum_xx - sum_x.powi(2);
    if denominator == 0.0 {
        return 0.0;
    }

    (n * sum_xy - sum_x * sum_y) / denominator
}
