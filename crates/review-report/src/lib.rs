//! Presentation aggregates for the case-review dashboard
//!
//! Consumes the clean table produced by `review-pipeline` and computes the
//! figures a dashboard shows: headline counts, daily volume, duration
//! distributions, the agent leaderboard, case-type shares and a focus panel
//! for one case type. Nothing here filters rows again.
//!
//! Rendering is left to the caller. [`OpsReport`] serializes with serde and
//! also prints as plain text.

pub mod aggregates;
pub mod config;
pub mod format;
pub mod report;

pub use aggregates::{
    backlog_delays, case_type_insights, case_type_share, daily_volume, handling_durations,
    headline, metric_values, rows_of_case_type, top_agents, AgentCount, CaseTypeInsights,
    CaseTypeShare, DailyCount, Headline,
};
pub use config::ReportConfig;
pub use report::{DurationDistribution, OpsReport};
