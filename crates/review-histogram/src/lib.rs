//! Histogram construction for duration distributions
//!
//! The report panels show the spread of handling time and backlog delay as
//! histograms. This crate turns a slice of minutes into equal-width bins that
//! a rendering layer can draw directly.
//!
//! # Example
//!
//! ```rust
//! use review_histogram::FixedWidthBuilder;
//!
//! let minutes = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//! let histogram = FixedWidthBuilder::new(5).build(&minutes).unwrap();
//!
//! assert_eq!(histogram.counts(), vec![2, 2, 2, 2, 2]);
//! assert_eq!(histogram.bins()[4].right, 10.0);
//! ```

pub mod builders;
pub mod types;

pub use builders::FixedWidthBuilder;
pub use types::{Histogram, HistogramBin};
