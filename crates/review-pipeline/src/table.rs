//! Raw and clean tables

use crate::columns::DurationMetric;
use crate::record::{CaseReview, CleanReview};
use serde::Serialize;

/// Every parsed row of a source file, before validation
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RawTable {
    /// Names of the non-required columns carried through in `CaseReview::extra`
    pub extra_columns: Vec<String>,
    pub rows: Vec<CaseReview>,
}

impl RawTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Upper bounds on each duration metric, taken at the cap percentile
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DurationCaps {
    pub handling_duration_min: f64,
    pub backlog_delay_min: f64,
    pub case_age_at_review_min: f64,
}

impl DurationCaps {
    pub fn get(&self, metric: DurationMetric) -> f64 {
        match metric {
            DurationMetric::HandlingDuration => self.handling_duration_min,
            DurationMetric::BacklogDelay => self.backlog_delay_min,
            DurationMetric::CaseAgeAtReview => self.case_age_at_review_min,
        }
    }

    /// A row is admitted when each metric is at or below its own cap.
    pub fn admits(&self, row: &CleanReview) -> bool {
        DurationMetric::ALL
            .iter()
            .all(|&m| row.metric(m) <= self.get(m))
    }
}

/// Row counts after each pipeline stage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CleaningSummary {
    /// Rows read from the source
    pub parsed: usize,
    /// Rows with all durations present and non-negative
    pub validated: usize,
    /// Rows within every percentile cap
    pub retained: usize,
}

impl CleaningSummary {
    pub fn dropped_invalid(&self) -> usize {
        self.parsed - self.validated
    }

    pub fn dropped_outliers(&self) -> usize {
        self.validated - self.retained
    }
}

/// The output of the metrics pipeline
///
/// Every row has all three durations defined, non-negative and within the
/// caps in `caps`. `caps` is `None` only when no row survived validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CleanTable {
    pub extra_columns: Vec<String>,
    pub rows: Vec<CleanReview>,
    pub caps: Option<DurationCaps>,
    pub summary: CleaningSummary,
}

impl CleanTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[CleanReview] {
        &self.rows
    }

    /// Values of one metric in row order
    pub fn metric_values(&self, metric: DurationMetric) -> Vec<f64> {
        self.rows.iter().map(|row| row.metric(metric)).collect()
    }

    /// Look up a pass-through column cell of a row by header name
    pub fn extra_value<'a>(&self, row: &'a CleanReview, column: &str) -> Option<&'a str> {
        let idx = self.extra_columns.iter().position(|c| c == column)?;
        row.record.extra.get(idx).map(String::as_str)
    }
}
