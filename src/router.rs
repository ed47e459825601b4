//! View selection state machine
//!
//! Four long-lived views, each reachable from any other in one step. There
//! is no terminal state and no guard condition; selecting the active view
//! again is a no-op.

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

/// Dashboard view identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Overview,
    Platforms,
    Content,
    Goals,
}

impl View {
    /// All views in display order.
    pub const ALL: [View; 4] = [View::Overview, View::Platforms, View::Content, View::Goals];
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            View::Overview => write!(f, "overview"),
            View::Platforms => write!(f, "platforms"),
            View::Content => write!(f, "content"),
            View::Goals => write!(f, "goals"),
        }
    }
}

impl std::str::FromStr for View {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "overview" => Ok(View::Overview),
            "platforms" => Ok(View::Platforms),
            "content" => Ok(View::Content),
            "goals" => Ok(View::Goals),
            _ => Err(DashboardError::UnknownView(s.to_string())),
        }
    }
}

/// Holds the single active view selector.
///
/// Selection events arrive serialized by the host event loop; each one
/// produces the next state synchronously.
#[derive(Debug, Clone, Default)]
pub struct ViewRouter {
    active: View,
}

impl ViewRouter {
    /// Starts on the overview, like every fresh dashboard session.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> View {
        self.active
    }

    /// Unconditional transition. Idempotent for the already-active view.
    pub fn select(&mut self, view: View) {
        self.active = view;
    }

    /// Parse a view name and select it.
    ///
    /// An unknown name is a diagnostic, not a failure mode: the state is
    /// left unchanged and the error is returned for the caller to surface.
    pub fn select_named(&mut self, name: &str) -> Result<View, DashboardError> {
        match name.parse::<View>() {
            Ok(view) => {
                self.select(view);
                Ok(view)
            }
            Err(err) => {
                log::warn!("Ignoring view selection: {}", err);
                Err(err)
            }
        }
    }
}
