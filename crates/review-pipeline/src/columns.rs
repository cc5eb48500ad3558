//! Column names of the source file and the derived metrics

use serde::Serialize;
use std::fmt;

pub const REVIEW_ID: &str = "REVIEW_ID";
pub const ACTOR_ID: &str = "ACTOR_ID";
pub const CASE_TYPE: &str = "CASE_TYPE";
pub const CASE_CREATED_TIME: &str = "CASE_CREATED_TIME";
pub const CASE_BACKLOG_ENTRY_TIME: &str = "CASE_BACKLOG_ENTRY_TIME";
pub const HANDLING_TIME_START: &str = "HANDLING_TIME_START";
pub const HANDLING_TIME_END: &str = "HANDLING_TIME_END";

pub const HANDLING_DURATION_MIN: &str = "HANDLING_DURATION_MIN";
pub const BACKLOG_DELAY_MIN: &str = "BACKLOG_DELAY_MIN";
pub const CASE_AGE_AT_REVIEW_MIN: &str = "CASE_AGE_AT_REVIEW_MIN";
pub const REVIEW_DATE: &str = "REVIEW_DATE";

/// Columns every source file must carry, in canonical order.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    REVIEW_ID,
    ACTOR_ID,
    CASE_TYPE,
    CASE_CREATED_TIME,
    CASE_BACKLOG_ENTRY_TIME,
    HANDLING_TIME_START,
    HANDLING_TIME_END,
];

/// The timestamp columns, parsed permissively.
pub const TIMESTAMP_COLUMNS: [&str; 4] = [
    CASE_CREATED_TIME,
    CASE_BACKLOG_ENTRY_TIME,
    HANDLING_TIME_START,
    HANDLING_TIME_END,
];

/// Columns the pipeline adds to every clean row; a source column with one
/// of these names is replaced by the derived value.
pub const DERIVED_COLUMNS: [&str; 4] = [
    HANDLING_DURATION_MIN,
    BACKLOG_DELAY_MIN,
    CASE_AGE_AT_REVIEW_MIN,
    REVIEW_DATE,
];

/// One of the three duration metrics derived per record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DurationMetric {
    /// `HANDLING_TIME_END - HANDLING_TIME_START`
    HandlingDuration,
    /// `HANDLING_TIME_START - CASE_BACKLOG_ENTRY_TIME`
    BacklogDelay,
    /// `HANDLING_TIME_START - CASE_CREATED_TIME`
    CaseAgeAtReview,
}

impl DurationMetric {
    pub const ALL: [DurationMetric; 3] = [
        DurationMetric::HandlingDuration,
        DurationMetric::BacklogDelay,
        DurationMetric::CaseAgeAtReview,
    ];

    /// Output column name of this metric
    pub fn column_name(self) -> &'static str {
        match self {
            Self::HandlingDuration => HANDLING_DURATION_MIN,
            Self::BacklogDelay => BACKLOG_DELAY_MIN,
            Self::CaseAgeAtReview => CASE_AGE_AT_REVIEW_MIN,
        }
    }
}

impl fmt::Display for DurationMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}
