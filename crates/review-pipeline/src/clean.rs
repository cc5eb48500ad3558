//! Validation and percentile capping
//!
//! Validation keeps rows whose three durations are present and `>= 0`.
//! Capping then computes the [`CAP_PERCENTILE`] of each metric over the
//! validated rows, independently per metric, and keeps rows at or below
//! all three caps. Both steps only drop rows; nothing is clamped or imputed.

use crate::columns::DurationMetric;
use crate::record::CleanReview;
use crate::table::{CleanTable, CleaningSummary, DurationCaps, RawTable};
use review_core::{percentile, Result};
use tracing::{debug, info};

/// Percentile at which each duration metric is capped.
pub const CAP_PERCENTILE: f64 = 0.99;

/// Keep rows whose derived durations are all defined and non-negative.
pub fn validate(raw: RawTable) -> (Vec<String>, Vec<CleanReview>) {
    let rows = raw
        .rows
        .into_iter()
        .filter_map(CleanReview::from_record)
        .collect();
    (raw.extra_columns, rows)
}

/// Compute the per-metric caps over validated rows.
///
/// Returns `None` for an empty input.
pub fn duration_caps(rows: &[CleanReview]) -> Result<Option<DurationCaps>> {
    let cap = |metric: DurationMetric| -> Result<Option<f64>> {
        let values: Vec<f64> = rows.iter().map(|row| row.metric(metric)).collect();
        percentile(&values, CAP_PERCENTILE)
    };

    let (Some(handling), Some(backlog), Some(age)) = (
        cap(DurationMetric::HandlingDuration)?,
        cap(DurationMetric::BacklogDelay)?,
        cap(DurationMetric::CaseAgeAtReview)?,
    ) else {
        return Ok(None);
    };

    Ok(Some(DurationCaps {
        handling_duration_min: handling,
        backlog_delay_min: backlog,
        case_age_at_review_min: age,
    }))
}

/// Run validation and capping over a raw table.
pub fn clean(raw: RawTable) -> Result<CleanTable> {
    let parsed = raw.len();
    let (extra_columns, validated) = validate(raw);
    let validated_count = validated.len();
    debug!(parsed, validated = validated_count, "validated duration metrics");

    let caps = duration_caps(&validated)?;
    let rows: Vec<CleanReview> = match caps {
        Some(caps) => {
            debug!(
                handling_duration_min = caps.handling_duration_min,
                backlog_delay_min = caps.backlog_delay_min,
                case_age_at_review_min = caps.case_age_at_review_min,
                "computed percentile caps"
            );
            validated.into_iter().filter(|row| caps.admits(row)).collect()
        }
        None => Vec::new(),
    };

    let summary = CleaningSummary {
        parsed,
        validated: validated_count,
        retained: rows.len(),
    };
    info!(
        parsed = summary.parsed,
        dropped_invalid = summary.dropped_invalid(),
        dropped_outliers = summary.dropped_outliers(),
        retained = summary.retained,
        "cleaned case-review table"
    );

    Ok(CleanTable {
        extra_columns,
        rows,
        caps,
        summary,
    })
}
