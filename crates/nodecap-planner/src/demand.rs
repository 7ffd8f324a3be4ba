//! Demand extraction.

use nodecap_quantity::{Quantity, ResourceKind};
use nodecap_state::Workload;

/// One workload's aggregate resource ask.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Demand {
    pub cpu: Quantity,
    pub memory: Quantity,
}

impl Demand {
    pub fn zero() -> Demand {
        Demand {
            cpu: Quantity::zero(ResourceKind::Cpu),
            memory: Quantity::zero(ResourceKind::Memory),
        }
    }
}

/// Reduce a workload to a single demand by summing the limits its
/// containers declare. A container with no limit for a resource
/// contributes zero for that resource.
///
/// Callers pass workloads already filtered to pending; no phase check
/// happens here.
pub fn extract_demand(workload: &Workload) -> Demand {
    let mut demand = Demand::zero();
    for container in &workload.containers {
        if let Some(cpu) = container.limits.cpu {
            demand.cpu += cpu;
        }
        if let Some(memory) = container.limits.memory {
            demand.memory += memory;
        }
    }
    demand
}
