//! Percentile summaries of numeric columns

use crate::{Error, Result};
use polars::prelude::*;

pub(super) fn duration_percentiles(
    df: &DataFrame,
    columns: &[&str],
    quantiles: &[f64],
) -> Result<DataFrame> {
    let mut result_series: Vec<Column> = Vec::with_capacity(columns.len() * quantiles.len());

    for &col_name in columns {
        let values = float_values(df, col_name)?;
        let estimates = review_core::percentiles(&values, quantiles)?;

        for (&q, estimate) in quantiles.iter().zip(estimates) {
            let name = format!("{}_q{:.2}", col_name, q);
            let series = Series::new(name.as_str().into(), vec![estimate.unwrap_or(f64::NAN)]);
            result_series.push(series.into());
        }
    }

    Ok(DataFrame::new(result_series)?)
}

fn float_values(df: &DataFrame, col_name: &str) -> Result<Vec<f64>> {
    let column = df
        .column(col_name)
        .map_err(|_| Error::InvalidColumn(col_name.to_string()))?;

    let column = match column.dtype() {
        DataType::Float64
        | DataType::Float32
        | DataType::Int64
        | DataType::Int32
        | DataType::UInt64
        | DataType::UInt32 => column.cast(&DataType::Float64)?,
        dt => {
            return Err(Error::TypeMismatch {
                expected: "numeric".to_string(),
                got: format!("{:?}", dt),
            });
        }
    };

    Ok(column.f64()?.into_iter().flatten().collect())
}
