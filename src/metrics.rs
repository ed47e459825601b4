//! Pure metric derivations over snapshot records
//!
//! Every function here is total except `progress_ratio`, whose only failure
//! is a non-positive target. Nothing mutates its input; each call derives a
//! fresh value from the snapshot it is handed.

use serde::Serialize;

use crate::error::DashboardError;
use crate::types::{DisplayKind, Kpi, WeeklySample};
use crate::util::group_digits;

/// Per-week view total summed across every platform in the sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekTotal {
    pub week: String,
    pub total: u64,
}

/// Fraction of the target reached, clamped to [0, 1].
///
/// A non-positive target has no meaningful ratio; callers substitute a
/// "not applicable" display state instead of a progress bar. NaN never
/// leaves this function.
pub fn progress_ratio(current: f64, target: f64) -> Result<f64, DashboardError> {
    if target <= 0.0 {
        return Err(DashboardError::InvalidTarget { target });
    }
    Ok((current / target).clamp(0.0, 1.0))
}

/// Headline string for a KPI card.
///
/// Rate-style KPIs print the stored value with a percent sign; everything
/// else prints as a thousands-grouped integer. Dispatch follows the KPI's
/// resolved display kind (explicit tag, or the legacy name-token fallback).
pub fn format_magnitude(kpi: &Kpi) -> String {
    match kpi.resolved_display_kind() {
        DisplayKind::Percentage => format!("{}%", kpi.current),
        DisplayKind::Count => group_digits(kpi.current.round() as i64),
    }
}

/// Sum each sample's per-platform views, preserving sample order.
pub fn weekly_totals(samples: &[WeeklySample]) -> Vec<WeekTotal> {
    samples
        .iter()
        .map(|sample| WeekTotal {
            week: sample.week.clone(),
            total: sample.views_by_platform.values().sum(),
        })
        .collect()
}

/// Item maximizing `metric`. Ties keep the first-encountered item.
pub fn top_performer<T, F>(items: &[T], metric: F) -> Option<&T>
where
    F: Fn(&T) -> f64,
{
    let mut best: Option<(&T, f64)> = None;
    for item in items {
        let score = metric(item);
        match best {
            Some((_, leader)) if score <= leader => {}
            _ => best = Some((item, score)),
        }
    }
    best.map(|(item, _)| item)
}
