//! Error types for case-review metrics
//!
//! Provides a unified error type for all review-metrics crates.

use thiserror::Error;

/// Core error type for loading and summarising review data
#[derive(Error, Debug)]
pub enum Error {
    /// IO error (missing or unreadable source file)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed delimited input
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// One or more required columns are absent from the header row
    #[error("Missing required columns: {}", missing.join(", "))]
    MissingColumns { missing: Vec<String> },

    /// Percentile probability outside [0, 1]
    #[error("Percentile probability {p} must be in [0, 1]")]
    InvalidProbability { p: f64 },

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check that a percentile probability is usable
    pub fn check_probability(p: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::InvalidProbability { p });
        }
        Ok(())
    }

    /// Create an error listing absent columns
    pub fn missing_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::MissingColumns {
            missing: columns.into_iter().map(Into::into).collect(),
        }
    }
}
