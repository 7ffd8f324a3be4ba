//! nodecap-state — cluster-state types and retrieval sources.
//!
//! Defines the domain types a capacity-planning run consumes (workloads
//! with per-container resource limits, node usage) and the source traits
//! that retrieve them. The shipped source reads a JSON snapshot document
//! from disk; a live cluster client would implement the same traits.
//!
//! Retrieval errors are fatal to a planning run. A source never maps a
//! failure to "no workloads": undercounting pending demand would lead to
//! under-provisioning.

pub mod error;
pub mod snapshot;
pub mod source;
pub mod types;

pub use error::{StateError, StateResult};
pub use snapshot::SnapshotFile;
pub use source::{NodeMetricsSource, PendingWorkloadSource};
pub use types::*;
