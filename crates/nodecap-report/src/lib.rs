//! nodecap-report — textual reports for planning runs.
//!
//! Two views: the scale-up plan (one section per prospective node with its
//! CPU and memory need) and current node utilization (usage against
//! allocatable capacity, with hot and idle markers). Rendering is pure;
//! callers decide where the text goes.

pub mod report;

pub use report::{AlertThresholds, render_nodes, render_plan};
