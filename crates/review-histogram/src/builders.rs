//! Histogram building strategies

use crate::types::{Histogram, HistogramBin};
use review_core::{Error, Result};

/// Fixed-width histogram builder
///
/// Creates a histogram with a specified number of equal-width bins spanning
/// `[min, max]` of the sample. NaN values are not binned.
#[derive(Debug, Clone, Copy)]
pub struct FixedWidthBuilder {
    num_bins: usize,
}

impl FixedWidthBuilder {
    /// Create a new fixed-width histogram builder
    pub fn new(num_bins: usize) -> Self {
        Self {
            num_bins: num_bins.max(1),
        }
    }

    pub fn num_bins(&self) -> usize {
        self.num_bins
    }

    /// Bin a sample in any order.
    ///
    /// # Errors
    /// `Error::InvalidInput` if the sample holds an infinite value.
    pub fn build(&self, sample: &[f64]) -> Result<Histogram> {
        let mut sorted: Vec<f64> = sample.iter().copied().filter(|v| !v.is_nan()).collect();
        sorted.sort_by(f64::total_cmp);
        self.build_sorted(&sorted)
    }

    fn build_sorted(&self, sorted_sample: &[f64]) -> Result<Histogram> {
        let (Some(&min), Some(&max)) = (sorted_sample.first(), sorted_sample.last()) else {
            return Ok(Histogram::empty());
        };
        if !min.is_finite() || !max.is_finite() {
            return Err(Error::InvalidInput(
                "histogram sample contains infinite values".to_string(),
            ));
        }

        let total = sorted_sample.len();
        if (max - min).abs() < 1e-10 {
            // All values are the same
            let bin = HistogramBin::new(min, max, total, total);
            return Ok(Histogram::new(vec![bin], total, min, max));
        }

        let width = (max - min) / self.num_bins as f64;
        let mut bins: Vec<HistogramBin> = (0..self.num_bins)
            .map(|i| {
                let left = min + i as f64 * width;
                let right = if i == self.num_bins - 1 {
                    max // Ensure last bin includes max
                } else {
                    min + (i + 1) as f64 * width
                };
                HistogramBin::new(left, right, 0, total)
            })
            .collect();

        // Single pass through sorted data
        let mut current_bin = 0;
        for &value in sorted_sample {
            while current_bin < self.num_bins - 1 && value >= bins[current_bin].right {
                current_bin += 1;
            }
            bins[current_bin].count += 1;
        }

        for bin in &mut bins {
            *bin = HistogramBin::new(bin.left, bin.right, bin.count, total);
        }

        Ok(Histogram::new(bins, total, min, max))
    }
}
