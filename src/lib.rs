//! Case-review timing metrics
//!
//! Re-exports the workspace crates behind one dependency:
//!
//! - [`review_core`]: shared error type, percentiles, mean and median
//! - [`review_histogram`]: fixed-width histograms for duration distributions
//! - [`review_pipeline`]: load, derive, validate and cap case-review records
//! - [`review_report`]: dashboard aggregates over a clean table
//! - `review_polars` (feature `polars`): DataFrame conversion and summaries
//!
//! # Example
//!
//! ```rust,ignore
//! use review_metrics::{load, OpsReport, ReportConfig};
//!
//! let table = load("reviews.csv")?;
//! let report = OpsReport::build(&table, &ReportConfig::default())?;
//! println!("{report}");
//! ```

pub use review_core;
pub use review_histogram;
pub use review_pipeline;
pub use review_report;

#[cfg(feature = "polars")]
pub use review_polars;

pub use review_core::{Error, Result};
pub use review_pipeline::{load, load_from_reader, CleanTable, TableCache};
pub use review_report::{OpsReport, ReportConfig};
