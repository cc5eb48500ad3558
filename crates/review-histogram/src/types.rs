//! Histogram bins and the histogram of one duration sample

use serde::Serialize;
use std::fmt;

/// One equal-width bin; `right` is exclusive except on the last bin
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub left: f64,
    pub right: f64,
    pub count: usize,
    /// `count / (total_count * width)`, zero for a degenerate bin
    pub density: f64,
}

impl HistogramBin {
    pub fn new(left: f64, right: f64, count: usize, total_count: usize) -> Self {
        let width = right - left;
        let density = if width > 0.0 && total_count > 0 {
            count as f64 / (total_count as f64 * width)
        } else {
            0.0
        };
        Self {
            left,
            right,
            count,
            density,
        }
    }
}

/// Binned minutes ready for a rendering layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    bins: Vec<HistogramBin>,
    total_count: usize,
    min: f64,
    max: f64,
}

impl Histogram {
    pub fn new(bins: Vec<HistogramBin>, total_count: usize, min: f64, max: f64) -> Self {
        Self {
            bins,
            total_count,
            min,
            max,
        }
    }

    /// Nothing to bin
    pub fn empty() -> Self {
        Self::new(vec![], 0, 0.0, 0.0)
    }

    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Bin counts, left to right
    pub fn counts(&self) -> Vec<usize> {
        self.bins.iter().map(|bin| bin.count).collect()
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} bins, n={}, range=[{:.2}, {:.2}] min",
            self.len(),
            self.total_count,
            self.min,
            self.max
        )
    }
}
