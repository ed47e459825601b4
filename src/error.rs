//! Error types for snapshot provisioning and view derivation
//!
//! Errors are classified by recoverability:
//! - Recoverable: derivation problems the view composer absorbs with a
//!   placeholder display state (the render pass always completes)
//! - NonRecoverable: snapshot loading problems, surfaced to whoever owns
//!   the data boundary

use thiserror::Error;

/// Error types for dashboard derivation and snapshot loading
#[derive(Debug, Error)]
pub enum DashboardError {
    // Recoverable: absorbed into placeholder display states
    #[error("progress target must be positive, got {target}")]
    InvalidTarget { target: f64 },

    #[error("unknown view '{0}', expected one of: overview, platforms, content, goals")]
    UnknownView(String),

    #[error("platform '{platform}' has no point in sample '{week}', defaulting to 0")]
    MissingSeriesKey { platform: String, week: String },

    // Non-recoverable: the caller owns the snapshot boundary
    #[error("failed to read snapshot: {0}")]
    Io(String),

    #[error("failed to parse snapshot: {0}")]
    Parse(String),
}

impl DashboardError {
    /// Returns true if the render pass absorbs this failure with a
    /// placeholder value instead of aborting.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            DashboardError::InvalidTarget { .. }
                | DashboardError::UnknownView(_)
                | DashboardError::MissingSeriesKey { .. }
        )
    }
}

impl From<std::io::Error> for DashboardError {
    fn from(err: std::io::Error) -> Self {
        DashboardError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derivation_errors_are_recoverable() {
        assert!(DashboardError::InvalidTarget { target: 0.0 }.is_recoverable());
        assert!(DashboardError::UnknownView("settings".to_string()).is_recoverable());
        assert!(DashboardError::MissingSeriesKey {
            platform: "TikTok".to_string(),
            week: "Week 1".to_string(),
        }
        .is_recoverable());
    }

    #[test]
    fn test_loading_errors_are_not_recoverable() {
        assert!(!DashboardError::Io("missing file".to_string()).is_recoverable());
        assert!(!DashboardError::Parse("bad json".to_string()).is_recoverable());
    }
}
