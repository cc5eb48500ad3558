//! Row types: raw case reviews, their derived metrics, and clean rows

use crate::columns::DurationMetric;
use crate::timestamp::minutes_between;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// One row of the source table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseReview {
    pub review_id: String,
    pub actor_id: String,
    pub case_type: String,
    pub case_created_time: Option<NaiveDateTime>,
    pub case_backlog_entry_time: Option<NaiveDateTime>,
    pub handling_time_start: Option<NaiveDateTime>,
    pub handling_time_end: Option<NaiveDateTime>,
    /// Pass-through cells for non-required columns, in header order
    pub extra: Vec<String>,
}

impl CaseReview {
    /// Compute the timing metrics of this row
    pub fn derive(&self) -> DerivedMetrics {
        DerivedMetrics {
            handling_duration_min: minutes_between(
                self.handling_time_end,
                self.handling_time_start,
            ),
            backlog_delay_min: minutes_between(
                self.handling_time_start,
                self.case_backlog_entry_time,
            ),
            case_age_at_review_min: minutes_between(
                self.handling_time_start,
                self.case_created_time,
            ),
            review_date: self.handling_time_end.map(|t| t.date()),
        }
    }
}

/// Derived timing values of one row; any may be missing
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct DerivedMetrics {
    pub handling_duration_min: Option<f64>,
    pub backlog_delay_min: Option<f64>,
    pub case_age_at_review_min: Option<f64>,
    pub review_date: Option<NaiveDate>,
}

impl DerivedMetrics {
    pub fn get(&self, metric: DurationMetric) -> Option<f64> {
        match metric {
            DurationMetric::HandlingDuration => self.handling_duration_min,
            DurationMetric::BacklogDelay => self.backlog_delay_min,
            DurationMetric::CaseAgeAtReview => self.case_age_at_review_min,
        }
    }

    /// True when all three durations are present and non-negative
    pub fn is_valid(&self) -> bool {
        DurationMetric::ALL
            .iter()
            .all(|&m| matches!(self.get(m), Some(v) if v >= 0.0))
    }
}

/// A row that passed validation: every duration is defined and `>= 0`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleanReview {
    #[serde(flatten)]
    pub record: CaseReview,
    pub handling_duration_min: f64,
    pub backlog_delay_min: f64,
    pub case_age_at_review_min: f64,
    pub review_date: NaiveDate,
}

impl CleanReview {
    /// Derive metrics for `record` and keep it only if they validate.
    pub fn from_record(record: CaseReview) -> Option<Self> {
        let metrics = record.derive();
        if !metrics.is_valid() {
            return None;
        }
        Some(Self {
            handling_duration_min: metrics.handling_duration_min?,
            backlog_delay_min: metrics.backlog_delay_min?,
            case_age_at_review_min: metrics.case_age_at_review_min?,
            review_date: metrics.review_date?,
            record,
        })
    }

    pub fn metric(&self, metric: DurationMetric) -> f64 {
        match metric {
            DurationMetric::HandlingDuration => self.handling_duration_min,
            DurationMetric::BacklogDelay => self.backlog_delay_min,
            DurationMetric::CaseAgeAtReview => self.case_age_at_review_min,
        }
    }

    pub fn actor_id(&self) -> &str {
        &self.record.actor_id
    }

    pub fn case_type(&self) -> &str {
        &self.record.case_type
    }
}
