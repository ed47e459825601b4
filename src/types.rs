use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Externally assigned KPI health classification.
///
/// Authored by the data-provisioning side, never derived here. `Unknown`
/// absorbs anything the provisioner left unclassified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum KpiStatus {
    Excellent,
    OnTrack,
    Behind,
    #[default]
    Unknown,
}

impl From<String> for KpiStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "excellent" => KpiStatus::Excellent,
            "on-track" => KpiStatus::OnTrack,
            "behind" => KpiStatus::Behind,
            _ => KpiStatus::Unknown,
        }
    }
}

impl KpiStatus {
    /// Opaque display token the renderer maps to a visual treatment.
    pub fn display_token(&self) -> &'static str {
        match self {
            KpiStatus::Excellent => "green",
            KpiStatus::OnTrack => "blue",
            KpiStatus::Behind => "red",
            KpiStatus::Unknown => "gray",
        }
    }
}

impl std::fmt::Display for KpiStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KpiStatus::Excellent => write!(f, "Excellent"),
            KpiStatus::OnTrack => write!(f, "On Track"),
            KpiStatus::Behind => write!(f, "Behind"),
            KpiStatus::Unknown => write!(f, "Unknown"),
        }
    }
}

/// How a KPI magnitude is rendered: a percentage or a grouped count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayKind {
    Percentage,
    Count,
}

impl DisplayKind {
    /// Fallback classification for KPIs that carry no explicit tag.
    ///
    /// Matches the `Rate` token anywhere in the name, so "Success Rate
    /// Overview" classifies as a percentage. That is the documented legacy
    /// behavior for snapshots authored before the tag existed; tag the KPI
    /// to override it.
    pub fn infer(name: &str) -> Self {
        if name.contains("Rate") {
            DisplayKind::Percentage
        } else {
            DisplayKind::Count
        }
    }
}

/// One tracked campaign KPI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kpi {
    pub name: String,
    pub current: f64,
    /// Must be positive for a progress ratio to exist.
    pub target: f64,
    #[serde(alias = "change")]
    pub change_percent: f64,
    #[serde(default)]
    pub status: KpiStatus,
    /// Explicit formatting tag. Untagged KPIs fall back to name inference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_kind: Option<DisplayKind>,
}

impl Kpi {
    pub fn resolved_display_kind(&self) -> DisplayKind {
        self.display_kind
            .unwrap_or_else(|| DisplayKind::infer(&self.name))
    }
}

/// Externally assigned platform investment priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Opaque display token the renderer maps to a badge treatment.
    pub fn display_token(&self) -> &'static str {
        match self {
            Priority::High => "red",
            Priority::Medium => "yellow",
            Priority::Low => "green",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::High => write!(f, "High"),
            Priority::Medium => write!(f, "Medium"),
            Priority::Low => write!(f, "Low"),
        }
    }
}

/// Snapshot metrics for one social platform.
///
/// `platform` is unique within a snapshot; the provisioner owns that
/// invariant along with the priority assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformMetric {
    pub platform: String,
    pub followers: u64,
    #[serde(alias = "engagement")]
    pub engagement_percent: f64,
    #[serde(alias = "views")]
    pub weekly_views: u64,
    #[serde(alias = "growth")]
    pub growth_percent: f64,
    pub priority: Priority,
}

/// One week of per-platform view counts.
///
/// Serialized flat (`{"week": "Week 1", "YouTube": 12000, ...}`) to match
/// the provisioner's wire shape. BTreeMap keeps key iteration deterministic,
/// and with it the series order derived from the keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklySample {
    pub week: String,
    #[serde(flatten)]
    pub views_by_platform: BTreeMap<String, u64>,
}

/// Share of the content mix held by one content type.
///
/// Percents across a snapshot sum to 100 (±rounding); the test suite
/// validates that against fixtures rather than enforcing it at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTypeShare {
    pub name: String,
    #[serde(alias = "value")]
    pub percent: f64,
    /// Opaque display reference, passed through to the renderer untouched.
    #[serde(alias = "color")]
    pub color_token: String,
}

/// One planned content item on the publishing calendar.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledContentItem {
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub content_type: String,
    pub platform: String,
    pub title: String,
}

/// Coarse classification of whether a goal projection is on schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceTier {
    OnTrack,
    AtRisk,
}

impl ConfidenceTier {
    /// Opaque display token the renderer maps to a timeline treatment.
    pub fn display_token(&self) -> &'static str {
        match self {
            ConfidenceTier::OnTrack => "green",
            ConfidenceTier::AtRisk => "yellow",
        }
    }
}

impl std::fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfidenceTier::OnTrack => write!(f, "On Track"),
            ConfidenceTier::AtRisk => write!(f, "At Risk"),
        }
    }
}

/// Projected time for one tracked goal to reach its target.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProjection {
    pub goal_label: String,
    pub estimated_days: u32,
    pub confidence: ConfidenceTier,
}

/// One complete, immutable set of campaign data for a single render pass.
///
/// Supplied whole by the data-provisioning side; the core only derives
/// read-only view models from it. Every collection defaults to empty so a
/// partial snapshot still renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub kpis: Vec<Kpi>,
    #[serde(default)]
    pub platforms: Vec<PlatformMetric>,
    #[serde(default)]
    pub weekly: Vec<WeeklySample>,
    #[serde(default)]
    pub content_types: Vec<ContentTypeShare>,
    #[serde(default)]
    pub schedule: Vec<ScheduledContentItem>,
    #[serde(default)]
    pub goals: Vec<GoalProjection>,
}
