//! The assembled operations report

use crate::aggregates::{
    case_type_insights, case_type_share, daily_volume, headline, metric_values, top_agents,
    AgentCount, CaseTypeInsights, CaseTypeShare, DailyCount, Headline,
};
use crate::config::ReportConfig;
use crate::format::{format_count, format_minutes};
use review_core::Result;
use review_histogram::{FixedWidthBuilder, Histogram};
use review_pipeline::{CleanTable, DurationMetric};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Raw values of one metric and their histogram
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationDistribution {
    pub metric: DurationMetric,
    pub values: Vec<f64>,
    pub histogram: Histogram,
}

impl DurationDistribution {
    pub fn build(table: &CleanTable, metric: DurationMetric, bins: usize) -> Result<Self> {
        let values = metric_values(table.rows(), metric);
        let histogram = FixedWidthBuilder::new(bins).build(&values)?;
        Ok(Self {
            metric,
            values,
            histogram,
        })
    }
}

/// Everything a rendering layer needs for the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpsReport {
    pub title: String,
    pub headline: Headline,
    pub daily_volume: Vec<DailyCount>,
    pub handling_time: DurationDistribution,
    pub backlog_delay: DurationDistribution,
    pub top_agents: Vec<AgentCount>,
    pub case_types: Vec<CaseTypeShare>,
    pub focus: CaseTypeInsights,
}

impl OpsReport {
    /// Compute every panel from a clean table.
    ///
    /// # Errors
    /// `Error::InvalidParameter` for an unusable config.
    pub fn build(table: &CleanTable, config: &ReportConfig) -> Result<Self> {
        config.validate()?;
        let rows = table.rows();
        debug!(rows = rows.len(), "building operations report");

        Ok(Self {
            title: config.title.clone(),
            headline: headline(rows),
            daily_volume: daily_volume(rows),
            handling_time: DurationDistribution::build(
                table,
                DurationMetric::HandlingDuration,
                config.histogram_bins,
            )?,
            backlog_delay: DurationDistribution::build(
                table,
                DurationMetric::BacklogDelay,
                config.histogram_bins,
            )?,
            top_agents: top_agents(rows, config.top_agents),
            case_types: case_type_share(rows),
            focus: case_type_insights(rows, &config.focus_case_type),
        })
    }
}

impl fmt::Display for OpsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "=".repeat(self.title.chars().count()))?;
        writeln!(f, "Total Reviews: {}", format_count(self.headline.total_reviews))?;
        writeln!(f, "Unique Agents: {}", format_count(self.headline.unique_agents))?;
        writeln!(
            f,
            "Avg Handling Time: {}",
            format_minutes(self.headline.avg_handling_min)
        )?;

        writeln!(f)?;
        writeln!(f, "Daily Review Volume")?;
        for day in &self.daily_volume {
            writeln!(f, "  {}  {}", day.date, format_count(day.reviews))?;
        }

        writeln!(f)?;
        writeln!(f, "Handling Time Distribution: {}", self.handling_time.histogram)?;
        writeln!(f, "Backlog Delay Distribution: {}", self.backlog_delay.histogram)?;

        writeln!(f)?;
        writeln!(f, "Top {} Agents by Reviews", self.top_agents.len())?;
        for agent in &self.top_agents {
            writeln!(f, "  {}  {}", agent.actor_id, format_count(agent.reviews))?;
        }

        writeln!(f)?;
        writeln!(f, "Case Type Distribution")?;
        for share in &self.case_types {
            writeln!(f, "  {}  {:.2}%", share.case_type, share.percent)?;
        }

        writeln!(f)?;
        let focus = &self.focus;
        writeln!(f, "{} Case Insights", focus.case_type)?;
        writeln!(
            f,
            "  Total {} Reviews: {}",
            focus.case_type,
            format_count(focus.reviews)
        )?;
        writeln!(f, "  Avg Handling Time: {}", format_minutes(focus.avg_handling_min))?;
        write!(
            f,
            "  Median Backlog Delay: {}",
            format_minutes(focus.median_backlog_min)
        )
    }
}
