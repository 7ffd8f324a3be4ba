//! nodecap.toml settings.
//!
//! Four independently settable quantity literals: the per-node capacity
//! ceiling (`[capacity]`) and the current-utilization alert thresholds
//! (`[alerts]`). Literals are parsed once at startup; a malformed value
//! fails the run before any cluster state is retrieved.

use std::path::{Path, PathBuf};

use nodecap_planner::CapacityCeiling;
use nodecap_quantity::{Quantity, QuantityError, ResourceKind};
use nodecap_report::AlertThresholds;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Settings file read when present and no `--config` is given.
pub const DEFAULT_SETTINGS_PATH: &str = "nodecap.toml";

/// Errors that can occur while loading settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed settings {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid `{field}` in settings: {source}")]
    Quantity {
        field: &'static str,
        #[source]
        source: QuantityError,
    },
}

/// On-disk settings. Every value is optional; unset values fall back to
/// the documented defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    pub capacity: Option<CapacitySection>,
    pub alerts: Option<AlertsSection>,
}

/// `[capacity]` — the per-node ceiling applied to new bundles.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CapacitySection {
    pub cpu: Option<String>,
    pub memory: Option<String>,
}

/// `[alerts]` — thresholds above which an existing node is flagged hot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AlertsSection {
    pub cpu: Option<String>,
    pub memory: Option<String>,
}

impl Settings {
    /// Load settings from an explicit path, or from `nodecap.toml` in the
    /// working directory when present, or defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Settings, ConfigError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_SETTINGS_PATH);
                if !default.is_file() {
                    return Ok(Settings::default());
                }
                default
            }
        };
        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse { path, source })
    }

    /// Capacity ceiling for this run; unset values use 2 CPU / 2Gi.
    pub fn ceiling(&self) -> Result<CapacityCeiling, ConfigError> {
        let defaults = CapacityCeiling::default();
        let section = self.capacity.as_ref();
        Ok(CapacityCeiling {
            cpu: parse_field(
                ResourceKind::Cpu,
                "capacity.cpu",
                section.and_then(|s| s.cpu.as_deref()),
                defaults.cpu,
            )?,
            memory: parse_field(
                ResourceKind::Memory,
                "capacity.memory",
                section.and_then(|s| s.memory.as_deref()),
                defaults.memory,
            )?,
        })
    }

    /// Alert thresholds; unset values use 800m CPU / 2Gi.
    pub fn thresholds(&self) -> Result<AlertThresholds, ConfigError> {
        let defaults = AlertThresholds::default();
        let section = self.alerts.as_ref();
        Ok(AlertThresholds {
            cpu: parse_field(
                ResourceKind::Cpu,
                "alerts.cpu",
                section.and_then(|s| s.cpu.as_deref()),
                defaults.cpu,
            )?,
            memory: parse_field(
                ResourceKind::Memory,
                "alerts.memory",
                section.and_then(|s| s.memory.as_deref()),
                defaults.memory,
            )?,
        })
    }
}

fn parse_field(
    kind: ResourceKind,
    field: &'static str,
    literal: Option<&str>,
    default: Quantity,
) -> Result<Quantity, ConfigError> {
    match literal {
        Some(literal) => {
            Quantity::parse(kind, literal).map_err(|source| ConfigError::Quantity { field, source })
        }
        None => Ok(default),
    }
}
