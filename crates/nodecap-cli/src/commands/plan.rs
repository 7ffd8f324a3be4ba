//! The `plan` subcommand.

use std::time::Duration;

use nodecap_planner::{CapacityCeiling, Demand, extract_demand, plan};
use nodecap_report::render_plan;
use nodecap_state::{PendingWorkloadSource, SnapshotFile};
use tracing::{debug, error, info};

/// One planning cycle: retrieve, extract, pack, print.
///
/// Any retrieval error aborts the cycle before output; a plan is never
/// rendered from partial data.
pub fn run_once(
    source: &SnapshotFile,
    ceiling: &CapacityCeiling,
    json: bool,
) -> anyhow::Result<()> {
    let pending = source.list_pending()?;
    info!(pending = pending.len(), "retrieved pending workloads");

    let demands: Vec<Demand> = pending
        .iter()
        .map(|workload| {
            let demand = extract_demand(workload);
            debug!(
                workload = %workload.id(),
                cpu = %demand.cpu,
                memory = %demand.memory,
                "extracted demand"
            );
            demand
        })
        .collect();
    let bundles = plan(&demands, ceiling);
    info!(bundles = bundles.len(), "capacity plan computed");

    if json {
        println!("{}", serde_json::to_string_pretty(&bundles)?);
    } else {
        print!("{}", render_plan(&bundles));
    }
    Ok(())
}

/// Re-plan on an interval.
///
/// A failed cycle is logged and retried at the next tick rather than
/// crashing the loop; ctrl-c shuts it down.
pub async fn watch(
    source: &SnapshotFile,
    ceiling: &CapacityCeiling,
    json: bool,
    interval: Duration,
) -> anyhow::Result<()> {
    info!(interval_secs = interval.as_secs(), "watch loop started");

    loop {
        if let Err(err) = run_once(source, ceiling, json) {
            error!(error = %err, "planning cycle failed");
        }

        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            _ = tokio::signal::ctrl_c() => {
                info!("watch loop shutting down");
                return Ok(());
            }
        }
    }
}
