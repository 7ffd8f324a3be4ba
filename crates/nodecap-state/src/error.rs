//! Error types for cluster-state retrieval.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for state retrieval operations.
pub type StateResult<T> = Result<T, StateError>;

/// Errors that can occur while retrieving cluster state.
#[derive(Debug, Error)]
pub enum StateError {
    #[error("failed to read cluster snapshot {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed cluster snapshot {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(
        "no cluster snapshot found: pass --snapshot, set NODECAP_SNAPSHOT, \
         or place a snapshot at {}", .fallback.display()
    )]
    Discovery { fallback: PathBuf },
}
