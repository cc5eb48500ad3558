//! Value counts with percentage shares

use crate::{Error, Result};
use polars::prelude::*;
use std::collections::HashMap;

pub(super) fn value_shares(df: &DataFrame, col_name: &str) -> Result<DataFrame> {
    let column = df
        .column(col_name)
        .map_err(|_| Error::InvalidColumn(col_name.to_string()))?;
    let text = column.cast(&DataType::String)?;

    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, u32)> = Vec::new();
    for value in text.str()?.into_iter().flatten() {
        if value.trim().is_empty() {
            continue;
        }
        let i = *index.entry(value).or_insert_with(|| {
            counts.push((value, 0));
            counts.len() - 1
        });
        counts[i].1 += 1;
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let total: u32 = counts.iter().map(|(_, count)| count).sum();
    let values: Vec<&str> = counts.iter().map(|(value, _)| *value).collect();
    let percent: Vec<f64> = counts
        .iter()
        .map(|(_, count)| f64::from(*count) / f64::from(total) * 100.0)
        .collect();
    let counts: Vec<u32> = counts.into_iter().map(|(_, count)| count).collect();

    Ok(DataFrame::new(vec![
        Series::new("value".into(), values).into(),
        Series::new("count".into(), counts).into(),
        Series::new("percent".into(), percent).into(),
    ])?)
}
