//! Goals view composition
//!
//! Goal cards reuse the KPI card shape (same records, monthly-target
//! framing) and the achievement timeline humanizes each projection.

use serde::Serialize;

use crate::types::Snapshot;
use crate::util::humanize_eta_days;
use crate::views::overview::{kpi_card, KpiCard};

/// One row of the goal achievement timeline.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalTimelineEntry {
    pub goal_label: String,
    pub eta_label: String,
    pub confidence: String,
    pub confidence_token: &'static str,
}

/// Goals payload: per-goal progress cards plus the projection timeline.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalsView {
    pub goal_cards: Vec<KpiCard>,
    pub timeline: Vec<GoalTimelineEntry>,
}

pub fn build(snapshot: &Snapshot) -> GoalsView {
    let timeline = snapshot
        .goals
        .iter()
        .map(|goal| GoalTimelineEntry {
            goal_label: goal.goal_label.clone(),
            eta_label: humanize_eta_days(goal.estimated_days),
            confidence: goal.confidence.to_string(),
            confidence_token: goal.confidence.display_token(),
        })
        .collect();

    GoalsView {
        goal_cards: snapshot.kpis.iter().map(kpi_card).collect(),
        timeline,
    }
}
