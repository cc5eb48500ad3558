//! Tests for clean table to DataFrame conversion

mod common;

use approx::assert_relative_eq;
use chrono::NaiveDate;
use common::sample_table;
use polars::prelude::*;
use review_polars::to_dataframe;

#[test]
fn test_columns_and_types() -> anyhow::Result<()> {
    let df = to_dataframe(&sample_table())?;
    assert_eq!(df.shape(), (3, 12));

    let names: Vec<String> = df
        .get_column_names()
        .into_iter()
        .map(|n| n.to_string())
        .collect();
    assert_eq!(
        names,
        vec![
            "REVIEW_ID",
            "ACTOR_ID",
            "CASE_TYPE",
            "QUEUE",
            "CASE_CREATED_TIME",
            "CASE_BACKLOG_ENTRY_TIME",
            "HANDLING_TIME_START",
            "HANDLING_TIME_END",
            "HANDLING_DURATION_MIN",
            "BACKLOG_DELAY_MIN",
            "CASE_AGE_AT_REVIEW_MIN",
            "REVIEW_DATE",
        ]
    );

    assert_eq!(df.column("QUEUE")?.dtype(), &DataType::String);
    assert_eq!(
        df.column("HANDLING_TIME_START")?.dtype(),
        &DataType::Datetime(TimeUnit::Milliseconds, None)
    );
    assert_eq!(df.column("BACKLOG_DELAY_MIN")?.dtype(), &DataType::Float64);
    assert_eq!(df.column("REVIEW_DATE")?.dtype(), &DataType::Date);
    Ok(())
}

#[test]
fn test_values_follow_rows() -> anyhow::Result<()> {
    let df = to_dataframe(&sample_table())?;

    let ids: Vec<Option<&str>> = df.column("REVIEW_ID")?.str()?.into_iter().collect();
    assert_eq!(ids, vec![Some("r1"), Some("r2"), Some("r3")]);
    assert_eq!(df.column("QUEUE")?.str()?.get(1), Some("west"));

    let handling = df.column("HANDLING_DURATION_MIN")?.f64()?.get(0).unwrap();
    assert_relative_eq!(handling, 10.0);
    let age = df.column("CASE_AGE_AT_REVIEW_MIN")?.f64()?.get(2).unwrap();
    assert_relative_eq!(age, 60.0);

    let start = NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    let millis = df
        .column("HANDLING_TIME_START")?
        .cast(&DataType::Int64)?
        .i64()?
        .get(0);
    assert_eq!(millis, Some(start.and_utc().timestamp_millis()));

    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
    let review_day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let days = df.column("REVIEW_DATE")?.cast(&DataType::Int32)?.i32()?.get(0);
    assert_eq!(days, Some((review_day - epoch).num_days() as i32));
    Ok(())
}

#[test]
fn test_source_column_named_like_output_is_replaced() -> anyhow::Result<()> {
    let csv = "\
REVIEW_ID,ACTOR_ID,CASE_TYPE,REVIEW_DATE,HANDLING_DURATION_MIN,CASE_CREATED_TIME,CASE_BACKLOG_ENTRY_TIME,HANDLING_TIME_START,HANDLING_TIME_END
r1,a1,TYPE_ONE,1999-12-31,999,2024-03-01 08:00:00,2024-03-01 08:30:00,2024-03-01 09:00:00,2024-03-01 09:10:00
";
    let table = review_pipeline::load_from_reader(csv.as_bytes())?;
    assert_eq!(table.len(), 1);

    let df = to_dataframe(&table)?;
    assert_eq!(df.shape(), (1, 11));
    assert_eq!(df.column("REVIEW_DATE")?.dtype(), &DataType::Date);
    assert_relative_eq!(df.column("HANDLING_DURATION_MIN")?.f64()?.get(0).unwrap(), 10.0);
    Ok(())
}
