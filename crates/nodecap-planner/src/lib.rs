//! nodecap-planner — greedy bin-packing of pending demand into node-sized
//! bundles.
//!
//! Each pending workload reduces to one `Demand` (the sum of its declared
//! container limits). The planner packs demands, in input order, into
//! `Bundle`s capped by a `CapacityCeiling`; each bundle is one prospective
//! node.
//!
//! # Packing Algorithm
//!
//! ```text
//! current = empty bundle
//! for each demand in input order:
//!     trial = current + demand            // copies, current untouched
//!     if trial.cpu > ceiling.cpu or trial.memory > ceiling.memory:
//!         seal current (unless empty)
//!         current = bundle seeded with demand
//!     else:
//!         current = trial
//! seal current (unless empty)
//! ```
//!
//! Greedy left-to-right packing is deterministic and order-preserving; it
//! does not minimize bundle count (optimal bin packing is NP-hard) but is
//! adequate for a coarse provisioning estimate. The overflow test is a
//! strict greater-than, so a bundle may fill to exactly the ceiling. A
//! single demand larger than the ceiling still gets its own bundle; the
//! planner never splits or rejects one workload's demand.

pub mod demand;
pub mod planner;

pub use demand::{Demand, extract_demand};
pub use planner::{Bundle, CapacityCeiling, plan};
