//! Presentation settings for the assembled report
//!
//! These only shape what the report shows. The cleaning pipeline has no
//! settings of its own.

use review_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Report layout parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Page title
    pub title: String,
    /// Number of equal-width bins in each duration histogram
    pub histogram_bins: usize,
    /// How many agents the leaderboard lists
    pub top_agents: usize,
    /// Case type given its own insights panel
    pub focus_case_type: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: "Operational Analytics Dashboard".to_string(),
            histogram_bins: 100,
            top_agents: 10,
            focus_case_type: "TYPE_THREE".to_string(),
        }
    }
}

impl ReportConfig {
    /// Reject settings that cannot produce a report
    pub fn validate(&self) -> Result<()> {
        if self.histogram_bins == 0 {
            return Err(Error::InvalidParameter(
                "histogram_bins must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
