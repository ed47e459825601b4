//! Bundled sample campaign
//!
//! A complete four-platform music-campaign snapshot, embedded at compile
//! time. The test suite runs against it, and it doubles as a demo data
//! source before a real provisioning hookup exists.

use crate::error::DashboardError;
use crate::loader::SnapshotProvider;
use crate::types::Snapshot;

const SAMPLE_CAMPAIGN: &str = include_str!("../presets/sample-campaign.json");

/// Parse the embedded sample campaign.
pub fn sample_snapshot() -> Result<Snapshot, DashboardError> {
    serde_json::from_str(SAMPLE_CAMPAIGN)
        .map_err(|e| DashboardError::Parse(format!("sample-campaign.json: {}", e)))
}

/// Provider serving the embedded sample campaign.
#[derive(Debug, Clone, Default)]
pub struct SampleProvider;

impl SnapshotProvider for SampleProvider {
    fn snapshot(&self) -> Result<Snapshot, DashboardError> {
        sample_snapshot()
    }
}
