//! Common test utilities for review-polars tests

#![allow(dead_code)]

use polars::prelude::*;
use review_pipeline::{load_from_reader, CleanTable};

/// Three reviews on 2024-03-01 with a pass-through `QUEUE` column. Each has
/// a 10 minute handling time, a 30 minute backlog delay and a 60 minute case
/// age, so none is capped.
pub const SAMPLE_CSV: &str = "\
REVIEW_ID,ACTOR_ID,CASE_TYPE,QUEUE,CASE_CREATED_TIME,CASE_BACKLOG_ENTRY_TIME,HANDLING_TIME_START,HANDLING_TIME_END
r1,a1,TYPE_ONE,east,2024-03-01 08:00:00,2024-03-01 08:30:00,2024-03-01 09:00:00,2024-03-01 09:10:00
r2,a2,TYPE_THREE,west,2024-03-01 08:00:00,2024-03-01 08:30:00,2024-03-01 09:00:00,2024-03-01 09:10:00
r3,a1,TYPE_ONE,east,2024-03-01 08:00:00,2024-03-01 08:30:00,2024-03-01 09:00:00,2024-03-01 09:10:00
";

pub fn sample_table() -> CleanTable {
    load_from_reader(SAMPLE_CSV.as_bytes()).unwrap()
}

/// Helper function to create a test DataFrame with specific values
pub fn create_test_df(values: &[f64]) -> DataFrame {
    df!["values" => values].unwrap()
}

/// Helper function to extract percentile results
pub fn extract_quantile_values(df: &DataFrame, col_prefix: &str, quantiles: &[f64]) -> Vec<f64> {
    quantiles
        .iter()
        .map(|q| {
            let col_name = format!("{}_q{:.2}", col_prefix, q);
            df.column(&col_name).unwrap().f64().unwrap().get(0).unwrap()
        })
        .collect()
}
