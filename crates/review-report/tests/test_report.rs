//! Tests for the assembled report

mod common;

use common::{table, Row};
use review_pipeline::CleanTable;
use review_report::{OpsReport, ReportConfig};

fn sample() -> Vec<Row> {
    let mut rows = Vec::new();
    for i in 0..12u32 {
        let case_type = if i % 4 == 0 { "TYPE_THREE" } else { "TYPE_ONE" };
        let actor = if i % 2 == 0 { "agent-a" } else { "agent-b" };
        rows.push(
            Row::new(actor, case_type)
                .day(1 + i % 3)
                .handling(10 + (i % 2) * 10)
                .backlog(30),
        );
    }
    rows
}

#[test]
fn test_build_default_report() -> anyhow::Result<()> {
    let table = table(&sample());
    let report = OpsReport::build(&table, &ReportConfig::default())?;

    assert_eq!(report.title, "Operational Analytics Dashboard");
    assert_eq!(report.headline.total_reviews, 12);
    assert_eq!(report.headline.unique_agents, 2);
    assert_eq!(report.daily_volume.len(), 3);
    assert_eq!(report.handling_time.values.len(), 12);
    assert_eq!(report.handling_time.histogram.len(), 100);
    assert_eq!(report.handling_time.histogram.total_count(), 12);
    // constant backlog collapses to a single bin
    assert_eq!(report.backlog_delay.histogram.len(), 1);
    assert_eq!(report.top_agents.len(), 2);
    assert_eq!(report.case_types[0].case_type, "TYPE_ONE");
    assert_eq!(report.focus.case_type, "TYPE_THREE");
    assert_eq!(report.focus.reviews, 3);
    Ok(())
}

#[test]
fn test_report_text() -> anyhow::Result<()> {
    let table = table(&sample());
    let text = OpsReport::build(&table, &ReportConfig::default())?.to_string();

    assert!(text.starts_with("Operational Analytics Dashboard\n"));
    assert!(text.contains("Total Reviews: 12"));
    assert!(text.contains("Unique Agents: 2"));
    assert!(text.contains("Avg Handling Time: 15.00 min"));
    assert!(text.contains("  2024-03-01  4"));
    assert!(text.contains("Top 2 Agents by Reviews"));
    assert!(text.contains("  TYPE_ONE  75.00%"));
    assert!(text.contains("Total TYPE_THREE Reviews: 3"));
    assert!(text.contains("Median Backlog Delay: 30.00 min"));
    Ok(())
}

#[test]
fn test_empty_table_report() -> anyhow::Result<()> {
    let report = OpsReport::build(&CleanTable::default(), &ReportConfig::default())?;
    assert_eq!(report.headline.total_reviews, 0);
    assert!(report.handling_time.histogram.is_empty());
    assert!(report.case_types.is_empty());
    assert_eq!(report.focus.reviews, 0);

    let text = report.to_string();
    assert!(text.contains("Avg Handling Time: n/a"));
    assert!(text.contains("Median Backlog Delay: n/a"));
    Ok(())
}

#[test]
fn test_custom_focus_and_leaderboard_size() -> anyhow::Result<()> {
    let config = ReportConfig {
        top_agents: 1,
        focus_case_type: "TYPE_ONE".to_string(),
        ..ReportConfig::default()
    };
    let report = OpsReport::build(&table(&sample()), &config)?;
    assert_eq!(report.top_agents.len(), 1);
    assert_eq!(report.top_agents[0].actor_id, "agent-a");
    assert_eq!(report.focus.reviews, 9);
    Ok(())
}

#[test]
fn test_invalid_config_rejected() {
    let config = ReportConfig {
        histogram_bins: 0,
        ..ReportConfig::default()
    };
    assert!(OpsReport::build(&table(&sample()), &config).is_err());
}

#[test]
fn test_report_serializes_to_json() -> anyhow::Result<()> {
    let report = OpsReport::build(&table(&sample()), &ReportConfig::default())?;
    let json = serde_json::to_value(&report)?;

    assert_eq!(json["headline"]["total_reviews"], 12);
    assert_eq!(json["daily_volume"][0]["date"], "2024-03-01");
    assert_eq!(json["handling_time"]["metric"], "HandlingDuration");
    assert_eq!(json["focus"]["case_type"], "TYPE_THREE");
    assert!(json["handling_time"]["histogram"]["bins"].is_array());
    Ok(())
}
