//! nodecap — estimates how many additional nodes a cluster needs to
//! schedule its pending workloads.
//!
//! # Usage
//!
//! ```text
//! nodecap plan --snapshot cluster.json
//! nodecap plan --watch --interval 30
//! nodecap nodes
//! ```
//!
//! Capacity ceilings and alert thresholds come from a TOML settings file
//! (`--config`, or `nodecap.toml` in the working directory); no flag
//! alters planning behavior. The cluster snapshot is discovered from
//! `--snapshot`, `NODECAP_SNAPSHOT`, or the default locations.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use nodecap_state::SnapshotFile;

mod commands;
mod config;

#[derive(Parser)]
#[command(
    name = "nodecap",
    about = "nodecap — pending-workload capacity planner",
    version,
    propagate_version = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan how many additional nodes pending workloads require.
    Plan {
        /// Path to a cluster snapshot (default: discovered).
        #[arg(short, long)]
        snapshot: Option<PathBuf>,

        /// Path to a settings file (default: ./nodecap.toml if present).
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print bundles as JSON instead of the textual report.
        #[arg(long)]
        json: bool,

        /// Keep planning on an interval instead of exiting.
        #[arg(long)]
        watch: bool,

        /// Seconds between planning cycles in watch mode.
        #[arg(long, default_value = "30")]
        interval: u64,
    },
    /// Show current node utilization with alert markers.
    Nodes {
        /// Path to a cluster snapshot (default: discovered).
        #[arg(short, long)]
        snapshot: Option<PathBuf>,

        /// Path to a settings file (default: ./nodecap.toml if present).
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Plan {
            snapshot,
            config,
            json,
            watch,
            interval,
        } => {
            let settings = config::Settings::load(config.as_deref())?;
            let ceiling = settings.ceiling()?;
            let source = SnapshotFile::discover(snapshot)?;
            if watch {
                commands::plan::watch(&source, &ceiling, json, Duration::from_secs(interval))
                    .await
            } else {
                commands::plan::run_once(&source, &ceiling, json)
            }
        }
        Commands::Nodes { snapshot, config } => {
            let settings = config::Settings::load(config.as_deref())?;
            let thresholds = settings.thresholds()?;
            let source = SnapshotFile::discover(snapshot)?;
            commands::nodes::run(&source, &thresholds)
        }
    }
}
