//! Conversion of a clean table into a `DataFrame`

use crate::Result;
use chrono::{Datelike, NaiveDateTime};
use polars::prelude::*;
use review_pipeline::columns::{
    ACTOR_ID, BACKLOG_DELAY_MIN, CASE_AGE_AT_REVIEW_MIN, CASE_BACKLOG_ENTRY_TIME,
    CASE_CREATED_TIME, CASE_TYPE, HANDLING_DURATION_MIN, HANDLING_TIME_END, HANDLING_TIME_START,
    REVIEW_DATE, REVIEW_ID,
};
use review_pipeline::{
    CaseReview, CleanReview, CleanTable, DurationMetric, DERIVED_COLUMNS, REQUIRED_COLUMNS,
};
use tracing::debug;

/// Days from 0001-01-01 to 1970-01-01
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Build a `DataFrame` with one row per clean review.
///
/// Column order: `REVIEW_ID`, `ACTOR_ID`, `CASE_TYPE`, the pass-through
/// columns as strings, the four timestamps as `Datetime(ms)`, the three
/// duration metrics as `Float64` and `REVIEW_DATE` as `Date`. A pass-through
/// column named like one of these, or like an earlier pass-through column,
/// is left out.
pub fn to_dataframe(table: &CleanTable) -> Result<DataFrame> {
    let rows = table.rows();
    let mut columns: Vec<Column> =
        Vec::with_capacity(3 + table.extra_columns.len() + 4 + 3 + 1);

    columns.push(text_column(REVIEW_ID, rows.iter().map(|r| r.record.review_id.as_str())));
    columns.push(text_column(ACTOR_ID, rows.iter().map(|r| r.record.actor_id.as_str())));
    columns.push(text_column(CASE_TYPE, rows.iter().map(|r| r.record.case_type.as_str())));

    let mut kept: Vec<&str> = Vec::new();
    for (i, name) in table.extra_columns.iter().enumerate() {
        let name = name.as_str();
        if REQUIRED_COLUMNS.contains(&name)
            || DERIVED_COLUMNS.contains(&name)
            || kept.contains(&name)
        {
            debug!(column = name, "skipping pass-through column that repeats a name");
            continue;
        }
        kept.push(name);
        columns.push(text_column(
            name,
            rows.iter()
                .map(|r| r.record.extra.get(i).map(String::as_str).unwrap_or("")),
        ));
    }

    let timestamps: [(&str, fn(&CaseReview) -> Option<NaiveDateTime>); 4] = [
        (CASE_CREATED_TIME, |r| r.case_created_time),
        (CASE_BACKLOG_ENTRY_TIME, |r| r.case_backlog_entry_time),
        (HANDLING_TIME_START, |r| r.handling_time_start),
        (HANDLING_TIME_END, |r| r.handling_time_end),
    ];
    for (name, get) in timestamps {
        columns.push(datetime_column(name, rows, get)?);
    }

    for (name, metric) in [
        (HANDLING_DURATION_MIN, DurationMetric::HandlingDuration),
        (BACKLOG_DELAY_MIN, DurationMetric::BacklogDelay),
        (CASE_AGE_AT_REVIEW_MIN, DurationMetric::CaseAgeAtReview),
    ] {
        columns.push(Series::new(name.into(), table.metric_values(metric)).into());
    }

    let days: Vec<i32> = rows
        .iter()
        .map(|r| r.review_date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE)
        .collect();
    columns.push(Series::new(REVIEW_DATE.into(), days).cast(&DataType::Date)?.into());

    let df = DataFrame::new(columns)?;
    debug!(rows = df.height(), columns = df.width(), "converted clean table to DataFrame");
    Ok(df)
}

fn text_column<'a>(name: &str, values: impl Iterator<Item = &'a str>) -> Column {
    let values: Vec<&str> = values.collect();
    Series::new(name.into(), values).into()
}

fn datetime_column(
    name: &str,
    rows: &[CleanReview],
    get: fn(&CaseReview) -> Option<NaiveDateTime>,
) -> Result<Column> {
    let millis: Vec<Option<i64>> = rows
        .iter()
        .map(|r| get(&r.record).map(|t| t.and_utc().timestamp_millis()))
        .collect();
    let series = Series::new(name.into(), millis)
        .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))?;
    Ok(series.into())
}
