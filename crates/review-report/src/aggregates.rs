//! Aggregates over clean rows
//!
//! Every function here reads already-clean rows and never filters by
//! duration again. Empty input yields zero counts and `None` for means and
//! medians. Blank actor ids and case types count as missing values and are
//! left out of the agent and case-type breakdowns.

use chrono::NaiveDate;
use review_core::{mean, median};
use review_pipeline::{CleanReview, DurationMetric};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};

/// The three headline figures
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Headline {
    pub total_reviews: usize,
    pub unique_agents: usize,
    pub avg_handling_min: Option<f64>,
}

/// Reviews completed on one calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub reviews: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentCount {
    pub actor_id: String,
    pub reviews: usize,
}

/// Share of one case type among all rows with a case type
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseTypeShare {
    pub case_type: String,
    pub reviews: usize,
    pub percent: f64,
}

/// Summary of the rows of a single case type
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseTypeInsights {
    pub case_type: String,
    pub reviews: usize,
    pub avg_handling_min: Option<f64>,
    pub median_backlog_min: Option<f64>,
}

/// Whitespace-only cells are missing; anything else is kept verbatim
fn present(value: &str) -> Option<&str> {
    (!value.trim().is_empty()).then_some(value)
}

/// Count occurrences keeping first-encounter order of the keys
fn counts_in_encounter_order<'a, I>(keys: I) -> Vec<(&'a str, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for key in keys {
        let i = *index.entry(key).or_insert_with(|| {
            counts.push((key, 0));
            counts.len() - 1
        });
        counts[i].1 += 1;
    }
    counts
}

/// Stable sort by descending count so ties keep encounter order
fn ranked<'a, I>(keys: I) -> Vec<(&'a str, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts = counts_in_encounter_order(keys);
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Values of one duration metric, ready for a histogram
pub fn metric_values(rows: &[CleanReview], metric: DurationMetric) -> Vec<f64> {
    rows.iter().map(|row| row.metric(metric)).collect()
}

pub fn handling_durations(rows: &[CleanReview]) -> Vec<f64> {
    metric_values(rows, DurationMetric::HandlingDuration)
}

pub fn backlog_delays(rows: &[CleanReview]) -> Vec<f64> {
    metric_values(rows, DurationMetric::BacklogDelay)
}

pub fn headline(rows: &[CleanReview]) -> Headline {
    let agents: HashSet<&str> = rows.iter().filter_map(|row| present(row.actor_id())).collect();
    Headline {
        total_reviews: rows.len(),
        unique_agents: agents.len(),
        avg_handling_min: mean(&handling_durations(rows)),
    }
}

/// Row counts per review date in ascending date order
pub fn daily_volume(rows: &[CleanReview]) -> Vec<DailyCount> {
    let mut by_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for row in rows {
        *by_day.entry(row.review_date).or_default() += 1;
    }
    by_day
        .into_iter()
        .map(|(date, reviews)| DailyCount { date, reviews })
        .collect()
}

/// The `n` agents with most reviews, ties broken by first appearance
pub fn top_agents(rows: &[CleanReview], n: usize) -> Vec<AgentCount> {
    ranked(rows.iter().filter_map(|row| present(row.actor_id())))
        .into_iter()
        .take(n)
        .map(|(actor_id, reviews)| AgentCount {
            actor_id: actor_id.to_string(),
            reviews,
        })
        .collect()
}

/// Percentage share of every case type present, largest first
pub fn case_type_share(rows: &[CleanReview]) -> Vec<CaseTypeShare> {
    let counts = ranked(rows.iter().filter_map(|row| present(row.case_type())));
    let total: usize = counts.iter().map(|(_, count)| count).sum();
    counts
        .into_iter()
        .map(|(case_type, reviews)| CaseTypeShare {
            case_type: case_type.to_string(),
            reviews,
            percent: reviews as f64 / total as f64 * 100.0,
        })
        .collect()
}

/// Rows of the given case type
pub fn rows_of_case_type<'a>(rows: &'a [CleanReview], case_type: &str) -> Vec<&'a CleanReview> {
    rows.iter().filter(|row| row.case_type() == case_type).collect()
}

pub fn case_type_insights(rows: &[CleanReview], case_type: &str) -> CaseTypeInsights {
    let subset = rows_of_case_type(rows, case_type);
    let handling: Vec<f64> = subset.iter().map(|row| row.handling_duration_min).collect();
    let backlog: Vec<f64> = subset.iter().map(|row| row.backlog_delay_min).collect();
    CaseTypeInsights {
        case_type: case_type.to_string(),
        reviews: subset.len(),
        avg_handling_min: mean(&handling),
        median_backlog_min: median(&backlog),
    }
}
