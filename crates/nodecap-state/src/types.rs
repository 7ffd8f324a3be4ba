//! Domain types for cluster state.
//!
//! These mirror the slice of cluster state a planning run needs: workloads
//! with per-container resource limits, and per-node usage. Quantity fields
//! (de)serialize as Kubernetes-style literals ("500m", "1Gi") via the
//! adapters in `nodecap_quantity::literal`.

use nodecap_quantity::{Quantity, literal};
use serde::{Deserialize, Serialize};

// ── Workload ──────────────────────────────────────────────────────

/// Scheduling phase of a workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkloadPhase {
    Pending,
    Running,
    Succeeded,
    Failed,
    #[serde(other)]
    Unknown,
}

/// One workload as reported by the cluster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Workload {
    pub name: String,
    pub namespace: String,
    pub phase: WorkloadPhase,
    /// Constituent containers; each may declare resource limits.
    #[serde(default)]
    pub containers: Vec<ContainerSpec>,
}

/// A single container within a workload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContainerSpec {
    pub name: String,
    #[serde(default)]
    pub limits: ResourceLimits,
}

/// Declared resource limits. A missing limit contributes zero demand, it
/// is not an error.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct ResourceLimits {
    #[serde(default, with = "literal::cpu_opt", skip_serializing_if = "Option::is_none")]
    pub cpu: Option<Quantity>,
    #[serde(default, with = "literal::memory_opt", skip_serializing_if = "Option::is_none")]
    pub memory: Option<Quantity>,
}

impl Workload {
    /// Namespace-qualified identifier, used in logs and reports.
    pub fn id(&self) -> String {
        format!("{}/{}", self.namespace, self.name)
    }

    pub fn is_pending(&self) -> bool {
        self.phase == WorkloadPhase::Pending
    }
}

// ── Node ──────────────────────────────────────────────────────────

/// Current resource usage and capacity of one node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NodeUsage {
    pub name: String,
    /// Current CPU usage across all workloads on the node.
    #[serde(with = "literal::cpu")]
    pub cpu_used: Quantity,
    /// Current memory usage across all workloads on the node.
    #[serde(with = "literal::memory")]
    pub memory_used: Quantity,
    /// Allocatable CPU capacity.
    #[serde(with = "literal::cpu")]
    pub cpu_allocatable: Quantity,
    /// Allocatable memory capacity.
    #[serde(with = "literal::memory")]
    pub memory_allocatable: Quantity,
}

impl NodeUsage {
    /// A node with no usage at all is a scale-down candidate.
    pub fn is_idle(&self) -> bool {
        self.cpu_used.is_zero() && self.memory_used.is_zero()
    }
}

// ── Snapshot ──────────────────────────────────────────────────────

/// The JSON document a snapshot file holds: one point-in-time view of the
/// cluster's workloads and nodes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ClusterSnapshot {
    #[serde(default)]
    pub workloads: Vec<Workload>,
    #[serde(default)]
    pub nodes: Vec<NodeUsage>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use nodecap_quantity::ResourceKind;

    #[test]
    fn deserializes_workload_with_partial_limits() {
        let json = r#"{
            "name": "ingest",
            "namespace": "etl",
            "phase": "Pending",
            "containers": [
                {"name": "main", "limits": {"cpu": "500m"}},
                {"name": "sidecar", "limits": {"memory": "256Mi"}},
                {"name": "init"}
            ]
        }"#;
        let workload: Workload = serde_json::from_str(json).unwrap();

        assert_eq!(workload.id(), "etl/ingest");
        assert!(workload.is_pending());
        assert_eq!(workload.containers.len(), 3);
        assert_eq!(
            workload.containers[0].limits.cpu,
            Some(Quantity::millicores(500))
        );
        assert_eq!(workload.containers[0].limits.memory, None);
        assert_eq!(
            workload.containers[1].limits.memory,
            Some(Quantity::bytes(256 << 20))
        );
        assert_eq!(workload.containers[2].limits, ResourceLimits::default());
    }

    #[test]
    fn unknown_phase_is_tolerated() {
        let json = r#"{"name": "w", "namespace": "ns", "phase": "Evicted"}"#;
        let workload: Workload = serde_json::from_str(json).unwrap();
        assert_eq!(workload.phase, WorkloadPhase::Unknown);
        assert!(!workload.is_pending());
    }

    #[test]
    fn malformed_limit_literal_is_an_error() {
        let json = r#"{
            "name": "w",
            "namespace": "ns",
            "phase": "Pending",
            "containers": [{"name": "main", "limits": {"cpu": "lots"}}]
        }"#;
        assert!(serde_json::from_str::<Workload>(json).is_err());
    }

    #[test]
    fn node_idle_detection() {
        let mut node: NodeUsage = serde_json::from_str(
            r#"{
                "name": "node-1",
                "cpu_used": "0",
                "memory_used": "0",
                "cpu_allocatable": "4",
                "memory_allocatable": "8Gi"
            }"#,
        )
        .unwrap();
        assert!(node.is_idle());

        node.cpu_used = Quantity::millicores(50);
        assert!(!node.is_idle());
        assert_eq!(node.cpu_used.kind(), ResourceKind::Cpu);
    }

    #[test]
    fn snapshot_round_trips() {
        let snapshot = ClusterSnapshot {
            workloads: vec![Workload {
                name: "api".to_string(),
                namespace: "default".to_string(),
                phase: WorkloadPhase::Pending,
                containers: vec![ContainerSpec {
                    name: "main".to_string(),
                    limits: ResourceLimits {
                        cpu: Some(Quantity::cores(1)),
                        memory: Some(Quantity::gibibytes(1)),
                    },
                }],
            }],
            nodes: vec![],
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: ClusterSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
