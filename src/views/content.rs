//! Content view composition
//!
//! The publishing calendar in date order plus the summary row: weekly view
//! totals, average engagement across platforms, and the current top
//! performer.

use serde::Serialize;

use crate::metrics::{self, WeekTotal};
use crate::schedule;
use crate::types::Snapshot;
use crate::util::group_digits;

/// One row of the upcoming-content list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    /// ISO calendar date, already display-ready.
    pub date: String,
    pub content_type: String,
    pub platform: String,
    pub title: String,
}

/// Summary card for the platform currently leading on engagement.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopPerformerCard {
    pub platform: String,
    pub weekly_views_label: String,
    pub engagement_label: String,
}

/// Content payload: sorted schedule plus the summary row.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentView {
    pub schedule: Vec<ScheduleEntry>,
    pub weekly_totals: Vec<WeekTotal>,
    /// None when the snapshot carries no platform metrics.
    pub avg_engagement_label: Option<String>,
    /// None when the snapshot carries no platform metrics.
    pub top_performer: Option<TopPerformerCard>,
}

pub fn build(snapshot: &Snapshot) -> ContentView {
    let schedule = schedule::sort_by_date(&snapshot.schedule)
        .into_iter()
        .map(|item| ScheduleEntry {
            date: item.date.format("%Y-%m-%d").to_string(),
            content_type: item.content_type,
            platform: item.platform,
            title: item.title,
        })
        .collect();

    let avg_engagement_label = if snapshot.platforms.is_empty() {
        None
    } else {
        let mean: f64 = snapshot
            .platforms
            .iter()
            .map(|p| p.engagement_percent)
            .sum::<f64>()
            / snapshot.platforms.len() as f64;
        Some(format!("{:.1}%", mean))
    };

    let top_performer = metrics::top_performer(&snapshot.platforms, |p| p.engagement_percent)
        .map(|leader| TopPerformerCard {
            platform: leader.platform.clone(),
            weekly_views_label: group_digits(leader.weekly_views as i64),
            engagement_label: format!("{}% engagement", leader.engagement_percent),
        });

    ContentView {
        schedule,
        weekly_totals: metrics::weekly_totals(&snapshot.weekly),
        avg_engagement_label,
        top_performer,
    }
}
