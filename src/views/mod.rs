//! Per-view view-model composition
//!
//! Each submodule builds one view's presentation-agnostic payload from the
//! snapshot. The `Dashboard` facade pairs a snapshot with the view router
//! and hands the renderer the payload for whatever view is active; a render
//! pass always gets a complete payload, degraded where the data is.

pub mod content;
pub mod goals;
pub mod overview;
pub mod platforms;

use serde::Serialize;

use crate::error::DashboardError;
use crate::loader::SnapshotProvider;
use crate::router::{View, ViewRouter};
use crate::types::Snapshot;

pub use content::{ContentView, ScheduleEntry, TopPerformerCard};
pub use goals::{GoalTimelineEntry, GoalsView};
pub use overview::{KpiCard, OverviewView};
pub use platforms::{PlatformCard, PlatformsView};

/// The active view's payload, tagged for the renderer.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum ViewModel {
    Overview(OverviewView),
    Platforms(PlatformsView),
    Content(ContentView),
    Goals(GoalsView),
}

/// One dashboard session: an immutable snapshot plus the view selector.
///
/// The snapshot is fixed for the session's render passes; swap in a new
/// `Dashboard` when the provisioning side produces fresh data.
#[derive(Debug, Clone)]
pub struct Dashboard {
    snapshot: Snapshot,
    router: ViewRouter,
}

impl Dashboard {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot,
            router: ViewRouter::new(),
        }
    }

    /// Pull one snapshot from the provisioning side and start on overview.
    pub fn from_provider(provider: &impl SnapshotProvider) -> Result<Self, DashboardError> {
        Ok(Self::new(provider.snapshot()?))
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn active_view(&self) -> View {
        self.router.active()
    }

    pub fn select(&mut self, view: View) {
        self.router.select(view);
    }

    /// Select by name; an unknown name leaves the active view unchanged.
    pub fn select_named(&mut self, name: &str) -> Result<View, DashboardError> {
        self.router.select_named(name)
    }

    /// Build the active view's payload from the snapshot.
    pub fn view_model(&self) -> ViewModel {
        match self.router.active() {
            View::Overview => ViewModel::Overview(overview::build(&self.snapshot)),
            View::Platforms => ViewModel::Platforms(platforms::build(&self.snapshot)),
            View::Content => ViewModel::Content(content::build(&self.snapshot)),
            View::Goals => ViewModel::Goals(goals::build(&self.snapshot)),
        }
    }
}
