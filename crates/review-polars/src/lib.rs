//! Polars integration for clean case-review tables
//!
//! [`to_dataframe`] turns the output of `review-pipeline` into a typed
//! `DataFrame`, and [`ReviewFrameExt`] adds the summaries a dashboard needs
//! on top of it.
//!
//! # Example
//!
//! ```rust,ignore
//! use review_pipeline::load;
//! use review_polars::{to_dataframe, ReviewFrameExt};
//!
//! let table = load("reviews.csv")?;
//! let df = to_dataframe(&table)?;
//!
//! let p = df.duration_percentiles(&["HANDLING_DURATION_MIN"], &[0.5, 0.9])?;
//! let shares = df.value_shares("CASE_TYPE")?;
//! ```

mod error;
mod frame;
mod methods;
mod traits;

pub use error::{Error, Result};
pub use frame::to_dataframe;
pub use traits::*;
