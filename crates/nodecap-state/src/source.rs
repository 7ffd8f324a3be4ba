//! Retrieval-source traits.
//!
//! The planner consumes these boundaries, not a concrete backend. Errors
//! are fatal to the current run; a failed retrieval never degrades to an
//! empty listing.

use crate::error::StateResult;
use crate::types::{NodeUsage, Workload};

/// Lists workloads the cluster could not schedule, in cluster order.
pub trait PendingWorkloadSource {
    fn list_pending(&self) -> StateResult<Vec<Workload>>;
}

/// Lists current per-node usage, used by the utilization report only.
pub trait NodeMetricsSource {
    fn list_nodes(&self) -> StateResult<Vec<NodeUsage>>;
}
