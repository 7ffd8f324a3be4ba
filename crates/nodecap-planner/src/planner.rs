//! The bin-packing planner.

use nodecap_quantity::Quantity;
use tracing::{debug, warn};

use crate::demand::Demand;

/// Maximum aggregate demand a single bundle may hold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapacityCeiling {
    pub cpu: Quantity,
    pub memory: Quantity,
}

impl Default for CapacityCeiling {
    /// 2 CPU cores and 2Gi of memory per prospective node.
    fn default() -> CapacityCeiling {
        CapacityCeiling {
            cpu: Quantity::cores(2),
            memory: Quantity::gibibytes(2),
        }
    }
}

/// Aggregate demand assigned to one prospective node. Sealed bundles are
/// never mutated again.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Bundle {
    pub cpu_need: Quantity,
    pub memory_need: Quantity,
}

impl Bundle {
    fn empty() -> Bundle {
        let zero = Demand::zero();
        Bundle {
            cpu_need: zero.cpu,
            memory_need: zero.memory,
        }
    }

    fn seeded(demand: &Demand) -> Bundle {
        Bundle {
            cpu_need: demand.cpu,
            memory_need: demand.memory,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.cpu_need.is_zero() && self.memory_need.is_zero()
    }
}

/// Pack demands, in input order, into bundles capped by the ceiling. See
/// the crate docs for the algorithm and its guarantees.
///
/// Infallible: demands built by `extract_demand` are kind-correct, and the
/// ceiling is validated at configuration time.
pub fn plan(demands: &[Demand], ceiling: &CapacityCeiling) -> Vec<Bundle> {
    let mut bundles = Vec::new();
    let mut current = Bundle::empty();

    for demand in demands {
        // Trial totals are copies; `current` stays untouched until the
        // overflow decision is made.
        let trial_cpu = current.cpu_need + demand.cpu;
        let trial_memory = current.memory_need + demand.memory;

        if trial_cpu > ceiling.cpu || trial_memory > ceiling.memory {
            if !current.is_zero() {
                debug!(cpu = %current.cpu_need, memory = %current.memory_need, "sealed bundle");
                bundles.push(current);
            }
            if demand.cpu > ceiling.cpu || demand.memory > ceiling.memory {
                warn!(
                    cpu = %demand.cpu,
                    memory = %demand.memory,
                    "single demand exceeds the capacity ceiling; emitting oversized bundle"
                );
            }
            current = Bundle::seeded(demand);
        } else {
            current.cpu_need = trial_cpu;
            current.memory_need = trial_memory;
        }
    }

    if !current.is_zero() {
        debug!(cpu = %current.cpu_need, memory = %current.memory_need, "sealed bundle");
        bundles.push(current);
    }

    bundles
}
