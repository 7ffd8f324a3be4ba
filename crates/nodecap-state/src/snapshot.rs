//! File-backed cluster snapshot source.
//!
//! Reads a `ClusterSnapshot` JSON document from disk. Each listing call
//! re-reads the file, so a long-running watch loop picks up a refreshed
//! snapshot without restarting.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{StateError, StateResult};
use crate::source::{NodeMetricsSource, PendingWorkloadSource};
use crate::types::{ClusterSnapshot, NodeUsage, Workload};

/// Environment variable naming a snapshot path, checked when no explicit
/// path is given.
pub const SNAPSHOT_ENV: &str = "NODECAP_SNAPSHOT";

/// Default snapshot location when running inside a cluster.
pub const IN_CLUSTER_PATH: &str = "/var/run/nodecap/cluster.json";

/// Snapshot location under the invoking user's home directory.
pub const HOME_RELATIVE_PATH: &str = ".nodecap/cluster.json";

/// A cluster snapshot document on disk.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> SnapshotFile {
        SnapshotFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolve a snapshot location.
    ///
    /// Precedence: an explicit path, the `NODECAP_SNAPSHOT` environment
    /// variable, the in-cluster default, then `~/.nodecap/cluster.json`.
    /// Explicit and environment paths win even if the file does not exist
    /// yet; the fallback locations are only taken when present.
    pub fn discover(explicit: Option<PathBuf>) -> StateResult<SnapshotFile> {
        let env = std::env::var_os(SNAPSHOT_ENV).map(PathBuf::from);
        let home = std::env::var_os("HOME").map(PathBuf::from);
        Self::discover_from(explicit, env, home)
    }

    fn discover_from(
        explicit: Option<PathBuf>,
        env: Option<PathBuf>,
        home: Option<PathBuf>,
    ) -> StateResult<SnapshotFile> {
        if let Some(path) = explicit {
            return Ok(SnapshotFile::new(path));
        }
        if let Some(path) = env {
            debug!(path = %path.display(), "using snapshot from environment");
            return Ok(SnapshotFile::new(path));
        }

        let in_cluster = PathBuf::from(IN_CLUSTER_PATH);
        if in_cluster.is_file() {
            debug!(path = %in_cluster.display(), "using in-cluster snapshot");
            return Ok(SnapshotFile::new(in_cluster));
        }

        let fallback = home
            .map(|home| home.join(HOME_RELATIVE_PATH))
            .unwrap_or(in_cluster);
        if fallback.is_file() {
            debug!(path = %fallback.display(), "using home snapshot");
            return Ok(SnapshotFile::new(fallback));
        }

        Err(StateError::Discovery { fallback })
    }

    /// Read and decode the snapshot document.
    pub fn load(&self) -> StateResult<ClusterSnapshot> {
        let contents = std::fs::read_to_string(&self.path).map_err(|source| StateError::Io {
            path: self.path.clone(),
            source,
        })?;
        let snapshot: ClusterSnapshot =
            serde_json::from_str(&contents).map_err(|source| StateError::Malformed {
                path: self.path.clone(),
                source,
            })?;
        debug!(
            path = %self.path.display(),
            workloads = snapshot.workloads.len(),
            nodes = snapshot.nodes.len(),
            "loaded cluster snapshot"
        );
        Ok(snapshot)
    }
}

impl PendingWorkloadSource for SnapshotFile {
    /// Pending workloads in snapshot order.
    fn list_pending(&self) -> StateResult<Vec<Workload>> {
        let snapshot = self.load()?;
        Ok(snapshot
            .workloads
            .into_iter()
            .filter(Workload::is_pending)
            .collect())
    }
}

impl NodeMetricsSource for SnapshotFile {
    fn list_nodes(&self) -> StateResult<Vec<NodeUsage>> {
        Ok(self.load()?.nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn write_snapshot(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    const SNAPSHOT: &str = r#"{
        "workloads": [
            {"name": "a", "namespace": "ns", "phase": "Pending",
             "containers": [{"name": "main", "limits": {"cpu": "1", "memory": "1Gi"}}]},
            {"name": "b", "namespace": "ns", "phase": "Running",
             "containers": [{"name": "main", "limits": {"cpu": "2"}}]},
            {"name": "c", "namespace": "ns", "phase": "Pending"}
        ],
        "nodes": [
            {"name": "node-1", "cpu_used": "350m", "memory_used": "1Gi",
             "cpu_allocatable": "4", "memory_allocatable": "8Gi"}
        ]
    }"#;

    #[test]
    fn lists_pending_in_snapshot_order() {
        let file = write_snapshot(SNAPSHOT);
        let source = SnapshotFile::new(file.path());

        let pending = source.list_pending().unwrap();
        let ids: Vec<String> = pending.iter().map(Workload::id).collect();
        assert_eq!(ids, ["ns/a", "ns/c"]);
    }

    #[test]
    fn lists_nodes() {
        let file = write_snapshot(SNAPSHOT);
        let source = SnapshotFile::new(file.path());

        let nodes = source.list_nodes().unwrap();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].name, "node-1");
        assert!(!nodes[0].is_idle());
    }

    #[test]
    fn missing_file_is_a_retrieval_error() {
        let source = SnapshotFile::new("/nonexistent/cluster.json");
        assert!(matches!(
            source.list_pending(),
            Err(StateError::Io { .. })
        ));
    }

    #[test]
    fn malformed_document_is_a_retrieval_error() {
        let file = write_snapshot("{\"workloads\": [{\"name\": 42}]}");
        let source = SnapshotFile::new(file.path());
        assert!(matches!(
            source.list_pending(),
            Err(StateError::Malformed { .. })
        ));
    }

    #[test]
    fn explicit_path_wins_discovery() {
        let source = SnapshotFile::discover_from(
            Some(PathBuf::from("/tmp/explicit.json")),
            Some(PathBuf::from("/tmp/env.json")),
            Some(PathBuf::from("/home/user")),
        )
        .unwrap();
        assert_eq!(source.path(), Path::new("/tmp/explicit.json"));
    }

    #[test]
    fn env_path_wins_over_fallbacks() {
        let source = SnapshotFile::discover_from(
            None,
            Some(PathBuf::from("/tmp/env.json")),
            Some(PathBuf::from("/home/user")),
        )
        .unwrap();
        assert_eq!(source.path(), Path::new("/tmp/env.json"));
    }

    #[test]
    fn discovery_falls_back_to_home_snapshot() {
        let home = tempfile::tempdir().unwrap();
        let dir = home.path().join(".nodecap");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("cluster.json"), "{}").unwrap();

        let source =
            SnapshotFile::discover_from(None, None, Some(home.path().to_path_buf())).unwrap();
        assert_eq!(source.path(), dir.join("cluster.json"));
        assert_eq!(source.load().unwrap(), ClusterSnapshot::default());
    }

    #[test]
    fn discovery_reports_missing_snapshot() {
        let home = tempfile::tempdir().unwrap();
        let err = SnapshotFile::discover_from(None, None, Some(home.path().to_path_buf()))
            .unwrap_err();
        assert!(matches!(err, StateError::Discovery { .. }));
        assert!(err.to_string().contains("NODECAP_SNAPSHOT"));
    }
}
