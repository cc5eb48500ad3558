//! Extension trait for case-review DataFrames

use crate::Result;
use polars::prelude::*;

/// Summaries over a review `DataFrame`, such as one built by
/// [`to_dataframe`](crate::to_dataframe)
pub trait ReviewFrameExt {
    /// Percentiles of numeric columns by linear interpolation
    ///
    /// # Arguments
    /// * `columns` - Column names to summarise
    /// * `quantiles` - Probabilities in `[0, 1]`
    ///
    /// # Returns
    /// One-row DataFrame with columns named `{column}_q{quantile:.2}`.
    /// Nulls and NaN are ignored; a column with no values yields NaN.
    fn duration_percentiles(&self, columns: &[&str], quantiles: &[f64]) -> Result<DataFrame>;

    /// Count and percentage share of each distinct value of a column
    ///
    /// # Returns
    /// DataFrame with columns `value`, `count` and `percent`, largest count
    /// first with ties in order of first appearance. Nulls and blank values
    /// are left out.
    fn value_shares(&self, column: &str) -> Result<DataFrame>;
}
