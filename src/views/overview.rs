//! Overview view composition
//!
//! KPI cards plus the two overview charts: weekly trends and content mix.

use serde::Serialize;

use crate::charts::{self, LineChartData, PieSlice};
use crate::metrics;
use crate::types::{Kpi, Snapshot};
use crate::util::group_digits;

/// One KPI card: headline magnitude, progress toward target, health badge.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiCard {
    pub name: String,
    pub magnitude: String,
    /// None when the target is non-positive; the renderer shows "N/A"
    /// instead of a progress bar.
    pub progress: Option<f64>,
    pub change_percent: f64,
    pub status: String,
    pub status_token: &'static str,
    pub target: String,
}

/// Build one card from a KPI record.
///
/// A broken target degrades the card to its "not applicable" state rather
/// than dropping it from the view.
pub(crate) fn kpi_card(kpi: &Kpi) -> KpiCard {
    let progress = match metrics::progress_ratio(kpi.current, kpi.target) {
        Ok(ratio) => Some(ratio),
        Err(err) => {
            log::warn!("KPI '{}': {}", kpi.name, err);
            None
        }
    };

    KpiCard {
        name: kpi.name.clone(),
        magnitude: metrics::format_magnitude(kpi),
        progress,
        change_percent: kpi.change_percent,
        status: kpi.status.to_string(),
        status_token: kpi.status.display_token(),
        target: group_digits(kpi.target.round() as i64),
    }
}

/// Overview payload: one card per KPI plus the two charts.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewView {
    pub kpi_cards: Vec<KpiCard>,
    pub weekly_trends: LineChartData,
    pub content_mix: Vec<PieSlice>,
}

pub fn build(snapshot: &Snapshot) -> OverviewView {
    OverviewView {
        kpi_cards: snapshot.kpis.iter().map(kpi_card).collect(),
        weekly_trends: charts::to_line_series(&snapshot.weekly),
        content_mix: charts::to_pie_slices(&snapshot.content_types),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::KpiStatus;

    fn kpi(name: &str, current: f64, target: f64, status: KpiStatus) -> Kpi {
        Kpi {
            name: name.to_string(),
            current,
            target,
            change_percent: 4.6,
            status,
            display_kind: None,
        }
    }

    #[test]
    fn test_kpi_card_formats_count_and_progress() {
        let card = kpi_card(&kpi("Content Views", 48000.0, 50000.0, KpiStatus::Excellent));
        assert_eq!(card.magnitude, "48,000");
        assert_eq!(card.progress, Some(0.96));
        assert_eq!(card.status, "Excellent");
        assert_eq!(card.status_token, "green");
        assert_eq!(card.target, "50,000");
    }

    #[test]
    fn test_kpi_card_formats_rate() {
        let card = kpi_card(&kpi("Engagement Rate", 4.3, 5.0, KpiStatus::OnTrack));
        assert_eq!(card.magnitude, "4.3%");
        assert_eq!(card.target, "5");
    }

    #[test]
    fn test_broken_target_degrades_to_not_applicable() {
        let card = kpi_card(&kpi("Beta Signups", 120.0, 0.0, KpiStatus::Unknown));
        assert_eq!(card.progress, None);
        // The card itself survives with its magnitude intact.
        assert_eq!(card.magnitude, "120");
    }

    #[test]
    fn test_build_covers_every_kpi() {
        let snapshot = crate::presets::sample_snapshot().expect("bundled sample parses");
        let view = build(&snapshot);
        assert_eq!(view.kpi_cards.len(), snapshot.kpis.len());
        assert_eq!(view.weekly_trends.series.len(), 4);
        assert_eq!(view.content_mix.len(), 5);
    }
}
