//! The `nodes` subcommand.

use nodecap_report::{AlertThresholds, render_nodes};
use nodecap_state::{NodeMetricsSource, SnapshotFile};

pub fn run(source: &SnapshotFile, thresholds: &AlertThresholds) -> anyhow::Result<()> {
    let nodes = source.list_nodes()?;
    print!("{}", render_nodes(&nodes, thresholds));
    Ok(())
}
