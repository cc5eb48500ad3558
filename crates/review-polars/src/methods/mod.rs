//! `ReviewFrameExt` for `DataFrame`

mod percentiles;
mod shares;

use crate::{Result, ReviewFrameExt};
use polars::prelude::*;

impl ReviewFrameExt for DataFrame {
    fn duration_percentiles(&self, columns: &[&str], quantiles: &[f64]) -> Result<DataFrame> {
        percentiles::duration_percentiles(self, columns, quantiles)
    }

    fn value_shares(&self, column: &str) -> Result<DataFrame> {
        shares::value_shares(self, column)
    }
}
