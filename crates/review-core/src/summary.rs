//! Simple location summaries that tolerate empty input

use crate::quantile::percentile;

/// Arithmetic mean, `None` for an empty sample.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().sum();
    Some(sum / values.len() as f64)
}

/// Sample median, `None` for an empty sample.
///
/// Even-length samples average the two middle values.
pub fn median(values: &[f64]) -> Option<f64> {
    percentile(values, 0.5).ok().flatten()
}
