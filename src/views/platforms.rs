//! Platforms view composition

use serde::Serialize;

use crate::charts::{self, BarChartData};
use crate::types::{PlatformMetric, Snapshot};
use crate::util::group_digits;

/// One platform card: raw metrics plus their display labels.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformCard {
    pub platform: String,
    pub followers: u64,
    pub followers_label: String,
    pub engagement_percent: f64,
    pub engagement_label: String,
    pub weekly_views: u64,
    pub weekly_views_label: String,
    pub growth_percent: f64,
    pub growth_label: String,
    pub priority: String,
    pub priority_token: &'static str,
}

fn platform_card(metric: &PlatformMetric) -> PlatformCard {
    PlatformCard {
        platform: metric.platform.clone(),
        followers: metric.followers,
        followers_label: group_digits(metric.followers as i64),
        engagement_percent: metric.engagement_percent,
        engagement_label: format!("{}%", metric.engagement_percent),
        weekly_views: metric.weekly_views,
        weekly_views_label: group_digits(metric.weekly_views as i64),
        growth_percent: metric.growth_percent,
        growth_label: format!("+{}%", metric.growth_percent),
        priority: format!("{} Priority", metric.priority),
        priority_token: metric.priority.display_token(),
    }
}

/// Platforms payload: one card per platform plus the comparison chart.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformsView {
    pub platform_cards: Vec<PlatformCard>,
    pub comparison: BarChartData,
}

pub fn build(snapshot: &Snapshot) -> PlatformsView {
    PlatformsView {
        platform_cards: snapshot.platforms.iter().map(platform_card).collect(),
        comparison: charts::to_bar_series(&snapshot.platforms),
    }
}
