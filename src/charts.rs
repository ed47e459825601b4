//! Chart payload adapters
//!
//! Reshapes snapshot collections into the equal-length series structures the
//! charting side consumes. Adapters never drop a series: a platform absent
//! from one sample gets a zero point so every series spans the full axis.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::error::DashboardError;
use crate::types::{ContentTypeShare, PlatformMetric, WeeklySample};

/// One platform's points along the shared week axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSeries {
    pub platform_name: String,
    pub points: Vec<u64>,
}

/// Multi-series line payload. Every series is exactly `categories.len()` long.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineChartData {
    pub categories: Vec<String>,
    pub series: Vec<LineSeries>,
}

/// One metric's values along the shared platform axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarSeries {
    pub metric_name: String,
    pub values: Vec<f64>,
}

/// Grouped-bar payload, one category per platform in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarChartData {
    pub categories: Vec<String>,
    pub series: Vec<BarSeries>,
}

/// One labeled pie slice, in snapshot order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PieSlice {
    pub label: String,
    pub percent: f64,
    pub color_token: String,
}

/// Build the weekly-trends line payload.
///
/// One series per platform in the union of keys across all samples. A
/// platform missing from a sample gets a zero point, never a shorter
/// series; the gap is logged as a diagnostic and recovered in place.
pub fn to_line_series(samples: &[WeeklySample]) -> LineChartData {
    let categories: Vec<String> = samples.iter().map(|s| s.week.clone()).collect();

    let platforms: BTreeSet<&str> = samples
        .iter()
        .flat_map(|s| s.views_by_platform.keys().map(String::as_str))
        .collect();

    let series = platforms
        .into_iter()
        .map(|platform| {
            let points = samples
                .iter()
                .map(|sample| match sample.views_by_platform.get(platform) {
                    Some(views) => *views,
                    None => {
                        log::debug!(
                            "{}",
                            DashboardError::MissingSeriesKey {
                                platform: platform.to_string(),
                                week: sample.week.clone(),
                            }
                        );
                        0
                    }
                })
                .collect();
            LineSeries {
                platform_name: platform.to_string(),
                points,
            }
        })
        .collect();

    LineChartData { categories, series }
}

/// Build the platform-comparison bar payload: follower count and engagement
/// rate per platform, categories in input order.
pub fn to_bar_series(platforms: &[PlatformMetric]) -> BarChartData {
    BarChartData {
        categories: platforms.iter().map(|p| p.platform.clone()).collect(),
        series: vec![
            BarSeries {
                metric_name: "Followers".to_string(),
                values: platforms.iter().map(|p| p.followers as f64).collect(),
            },
            BarSeries {
                metric_name: "Engagement Rate %".to_string(),
                values: platforms.iter().map(|p| p.engagement_percent).collect(),
            },
        ],
    }
}

/// Build labeled pie slices in snapshot order.
///
/// Slice order must match the snapshot so repeated render passes paint the
/// same wheel; sorting by magnitude here would be a defect.
pub fn to_pie_slices(shares: &[ContentTypeShare]) -> Vec<PieSlice> {
    shares
        .iter()
        .map(|share| PieSlice {
            label: format!("{} {}%", share.name, share.percent.round()),
            percent: share.percent,
            color_token: share.color_token.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::types::Priority;

    fn sample(week: &str, views: &[(&str, u64)]) -> WeeklySample {
        WeeklySample {
            week: week.to_string(),
            views_by_platform: views
                .iter()
                .map(|(platform, count)| (platform.to_string(), *count))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    fn platform(name: &str, followers: u64, engagement: f64) -> PlatformMetric {
        PlatformMetric {
            platform: name.to_string(),
            followers,
            engagement_percent: engagement,
            weekly_views: 0,
            growth_percent: 0.0,
            priority: Priority::Medium,
        }
    }

    #[test]
    fn test_line_series_cover_full_axis() {
        let samples = vec![
            sample("Week 1", &[("YouTube", 12000), ("TikTok", 20000)]),
            sample("Week 2", &[("YouTube", 13500), ("TikTok", 22000)]),
            sample("Week 3", &[("YouTube", 14200), ("TikTok", 23500)]),
        ];
        let data = to_line_series(&samples);
        assert_eq!(data.categories, vec!["Week 1", "Week 2", "Week 3"]);
        assert_eq!(data.series.len(), 2);
        for series in &data.series {
            assert_eq!(series.points.len(), data.categories.len());
        }
    }

    #[test]
    fn test_missing_platform_defaults_to_zero() {
        let samples = vec![
            sample("Week 1", &[("YouTube", 12000)]),
            sample("Week 2", &[("TikTok", 22000)]),
        ];
        let data = to_line_series(&samples);
        assert_eq!(data.series.len(), 2);

        let tiktok = data
            .series
            .iter()
            .find(|s| s.platform_name == "TikTok")
            .expect("TikTok series present");
        assert_eq!(tiktok.points, vec![0, 22000]);

        let youtube = data
            .series
            .iter()
            .find(|s| s.platform_name == "YouTube")
            .expect("YouTube series present");
        assert_eq!(youtube.points, vec![12000, 0]);
    }

    #[test]
    fn test_line_series_empty_input() {
        let data = to_line_series(&[]);
        assert!(data.categories.is_empty());
        assert!(data.series.is_empty());
    }

    #[test]
    fn test_bar_series_preserve_input_order() {
        let platforms = vec![
            platform("YouTube", 1250, 4.2),
            platform("TikTok", 2800, 6.8),
            platform("Instagram", 1800, 3.5),
        ];
        let data = to_bar_series(&platforms);
        assert_eq!(data.categories, vec!["YouTube", "TikTok", "Instagram"]);
        assert_eq!(data.series[0].metric_name, "Followers");
        assert_eq!(data.series[0].values, vec![1250.0, 2800.0, 1800.0]);
        assert_eq!(data.series[1].metric_name, "Engagement Rate %");
        assert_eq!(data.series[1].values, vec![4.2, 6.8, 3.5]);
    }

    #[test]
    fn test_pie_slices_keep_snapshot_order_and_round_labels() {
        let shares = vec![
            ContentTypeShare {
                name: "Music Videos".to_string(),
                percent: 35.0,
                color_token: "#2D1B69".to_string(),
            },
            ContentTypeShare {
                name: "Behind-the-Scenes".to_string(),
                percent: 24.6,
                color_token: "#00D4FF".to_string(),
            },
        ];
        let slices = to_pie_slices(&shares);
        assert_eq!(slices[0].label, "Music Videos 35%");
        assert_eq!(slices[1].label, "Behind-the-Scenes 25%");
        assert_eq!(slices[1].percent, 24.6);
        assert_eq!(slices[1].color_token, "#00D4FF");
    }
}
