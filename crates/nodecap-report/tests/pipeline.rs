//! End-to-end planning pipeline: snapshot file → pending workloads →
//! demands → bundles → rendered report.

use std::io::Write as _;

use nodecap_planner::{CapacityCeiling, extract_demand, plan};
use nodecap_report::render_plan;
use nodecap_state::{PendingWorkloadSource, SnapshotFile};

const SNAPSHOT: &str = r#"{
    "workloads": [
        {"name": "api", "namespace": "default", "phase": "Pending",
         "containers": [{"name": "main", "limits": {"cpu": "1", "memory": "1Gi"}}]},
        {"name": "worker", "namespace": "default", "phase": "Pending",
         "containers": [
            {"name": "main", "limits": {"cpu": "250m", "memory": "256Mi"}},
            {"name": "sidecar", "limits": {"cpu": "250m", "memory": "256Mi"}}
         ]},
        {"name": "running", "namespace": "default", "phase": "Running",
         "containers": [{"name": "main", "limits": {"cpu": "4", "memory": "8Gi"}}]},
        {"name": "batch", "namespace": "jobs", "phase": "Pending",
         "containers": [{"name": "main", "limits": {"cpu": "1", "memory": "1Gi"}}]}
    ],
    "nodes": []
}"#;

#[test]
fn plans_pending_demand_from_snapshot() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SNAPSHOT.as_bytes()).unwrap();
    let source = SnapshotFile::new(file.path());

    let pending = source.list_pending().unwrap();
    assert_eq!(pending.len(), 3, "running workloads are filtered out");

    let demands: Vec<_> = pending.iter().map(extract_demand).collect();
    let bundles = plan(&demands, &CapacityCeiling::default());

    // api (1, 1Gi) + worker (0.5, 0.5Gi) share a node; batch (1, 1Gi)
    // overflows it and opens a second one.
    assert_eq!(bundles.len(), 2);
    assert_eq!(bundles[0].cpu_need.to_string(), "1500m");
    assert_eq!(bundles[0].memory_need.to_string(), "1536Mi");
    assert_eq!(bundles[1].cpu_need.to_string(), "1");
    assert_eq!(bundles[1].memory_need.to_string(), "1Gi");

    let report = render_plan(&bundles);
    assert!(report.contains("Node 1:"));
    assert!(report.contains("Node 2:"));
    assert!(report.contains("  - CPU Need: 1500m"));
    assert!(report.contains("  - Memory Need: 1Gi"));
}
