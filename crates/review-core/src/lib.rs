//! Core types and order statistics for case-review metrics
//!
//! This crate holds the pieces every other review-metrics crate depends on:
//!
//! - [`Error`] / [`Result`]: the shared error type for loading and summarising
//! - [`percentile`]: quantiles by linear interpolation between closest ranks
//! - [`mean`] / [`median`]: location summaries that return `None` on empty input
//!
//! # Example
//!
//! ```rust
//! use review_core::{percentile, median};
//!
//! let minutes: Vec<f64> = (1..=100).map(f64::from).collect();
//! let cap = percentile(&minutes, 0.99).unwrap().unwrap();
//! assert!((cap - 99.01).abs() < 1e-9);
//! assert_eq!(median(&[]), None);
//! ```

pub mod error;
pub mod quantile;
pub mod summary;

pub use error::{Error, Result};
pub use quantile::{percentile, percentile_sorted, percentiles};
pub use summary::{mean, median};
