//! Campaign analytics dashboard core
//!
//! Turns immutable campaign snapshots (KPIs, platform metrics, weekly view
//! counts, content mix, publishing schedule, goal projections) into
//! display-ready view models, one per dashboard view. Rendering lives
//! elsewhere; this crate's output boundary is plain serializable data.

pub mod charts;
pub mod error;
pub mod loader;
pub mod metrics;
pub mod presets;
pub mod router;
pub mod schedule;
pub mod types;
pub mod util;
pub mod views;

pub use error::DashboardError;
pub use loader::{JsonFileProvider, SnapshotProvider};
pub use router::{View, ViewRouter};
pub use types::Snapshot;
pub use views::{Dashboard, ViewModel};
