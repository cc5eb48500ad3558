//! Order statistics with linear interpolation between closest ranks
//!
//! For a sorted sample `x[0..n]` and probability `p`, the estimate sits at
//! fractional rank `h = (n - 1) * p` and is
//! `x[floor(h)] + (h - floor(h)) * (x[floor(h) + 1] - x[floor(h)])`.
//! This is the "linear" definition (Hyndman & Fan type 7) that dataframe
//! libraries use by default, so thresholds computed here line up with theirs.

use crate::{Error, Result};

/// Compute the `p`-th quantile of an unsorted sample.
///
/// NaN values are ignored. Returns `Ok(None)` when no values remain.
///
/// # Errors
/// `Error::InvalidProbability` if `p` is outside `[0, 1]`.
pub fn percentile(values: &[f64], p: f64) -> Result<Option<f64>> {
    Error::check_probability(p)?;
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    sorted.sort_by(f64::total_cmp);
    percentile_sorted(&sorted, p)
}

/// Compute the `p`-th quantile of a sample already sorted ascending.
///
/// The slice must not contain NaN.
pub fn percentile_sorted(sorted: &[f64], p: f64) -> Result<Option<f64>> {
    Error::check_probability(p)?;
    let n = sorted.len();
    if n == 0 {
        return Ok(None);
    }

    let rank = (n - 1) as f64 * p;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let frac = rank - lower as f64;

    let lo = sorted[lower];
    let hi = sorted[upper.min(n - 1)];
    Ok(Some(lerp(lo, hi, frac)))
}

/// Interpolate from the nearer endpoint so results match numpy bit for bit.
fn lerp(lo: f64, hi: f64, t: f64) -> f64 {
    let diff = hi - lo;
    if t >= 0.5 {
        hi - diff * (1.0 - t)
    } else {
        lo + diff * t
    }
}

/// Compute several quantiles of one sample, sorting it once.
pub fn percentiles(values: &[f64], ps: &[f64]) -> Result<Vec<Option<f64>>> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    sorted.sort_by(f64::total_cmp);
    ps.iter().map(|&p| percentile_sorted(&sorted, p)).collect()
}
