//! Snapshot provisioning
//!
//! The core consumes one whole `Snapshot` per render pass. A JSON file, the
//! bundled sample, and a caller-built value are all equivalent at this
//! boundary; the dashboard never fetches anything on its own.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::DashboardError;
use crate::types::Snapshot;

/// Source of the campaign snapshot for a render pass.
pub trait SnapshotProvider {
    fn snapshot(&self) -> Result<Snapshot, DashboardError>;
}

/// Load a snapshot from a JSON file.
pub fn load_snapshot_json(path: &Path) -> Result<Snapshot, DashboardError> {
    let content = fs::read_to_string(path)
        .map_err(|e| DashboardError::Io(format!("{}: {}", path.display(), e)))?;
    serde_json::from_str(&content)
        .map_err(|e| DashboardError::Parse(format!("{}: {}", path.display(), e)))
}

/// Provider backed by a JSON snapshot file on disk.
///
/// Re-reads the file on every call; the provisioning side owns freshness.
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    path: PathBuf,
}

impl JsonFileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SnapshotProvider for JsonFileProvider {
    fn snapshot(&self) -> Result<Snapshot, DashboardError> {
        load_snapshot_json(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn write_snapshot(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(json.as_bytes()).expect("write snapshot");
        file
    }

    #[test]
    fn test_loads_snapshot_from_json_file() {
        init_logging();
        let file = write_snapshot(
            r#"{
                "kpis": [
                    {"name": "Total Followers", "current": 6800, "target": 10000, "change": 4.6, "status": "on-track"}
                ],
                "weekly": [
                    {"week": "Week 1", "YouTube": 12000, "TikTok": 20000}
                ]
            }"#,
        );

        let snapshot = load_snapshot_json(file.path()).expect("valid snapshot");
        assert_eq!(snapshot.kpis.len(), 1);
        assert_eq!(snapshot.kpis[0].name, "Total Followers");
        assert_eq!(snapshot.weekly[0].views_by_platform.len(), 2);
        assert!(snapshot.platforms.is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        init_logging();
        let err = load_snapshot_json(Path::new("/nonexistent/campaign.json"))
            .expect_err("missing file must fail");
        assert!(matches!(err, DashboardError::Io(_)));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        init_logging();
        let file = write_snapshot("{ not json");
        let err = load_snapshot_json(file.path()).expect_err("malformed input must fail");
        assert!(matches!(err, DashboardError::Parse(_)));
    }

    #[test]
    fn test_provider_round_trips_through_serialization() {
        init_logging();
        let snapshot = crate::presets::sample_snapshot().expect("bundled sample parses");
        let json = serde_json::to_string(&snapshot).expect("snapshot serializes");

        let file = write_snapshot(&json);
        let provider = JsonFileProvider::new(file.path());
        let reloaded = provider.snapshot().expect("reload succeeds");
        assert_eq!(reloaded.kpis.len(), snapshot.kpis.len());
        assert_eq!(reloaded.schedule.len(), snapshot.schedule.len());
    }
}
