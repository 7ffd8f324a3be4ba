//! Report rendering.

use nodecap_planner::Bundle;
use nodecap_quantity::Quantity;
use nodecap_state::NodeUsage;

/// Utilization levels above which an existing node is flagged as hot.
///
/// Independent of the planner's capacity ceiling: these govern "is this
/// node running hot", not "how big is a new node".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlertThresholds {
    pub cpu: Quantity,
    pub memory: Quantity,
}

impl Default for AlertThresholds {
    /// 800 milli-CPU and 2Gi of memory.
    fn default() -> AlertThresholds {
        AlertThresholds {
            cpu: Quantity::millicores(800),
            memory: Quantity::gibibytes(2),
        }
    }
}

/// Render the scale-up plan: one section per prospective node.
pub fn render_plan(bundles: &[Bundle]) -> String {
    let mut out = String::new();
    out.push_str("==== Cluster Capacity Plan ====\n");

    if bundles.is_empty() {
        out.push_str("No pending demand; no additional nodes are required.\n");
    }
    for (index, bundle) in bundles.iter().enumerate() {
        out.push_str(&format!("Node {}:\n", index + 1));
        out.push_str(&format!("  - CPU Need: {}\n", bundle.cpu_need));
        out.push_str(&format!(
            "    Explanation: this node requires {} CPUs to accommodate pending workloads.\n",
            bundle.cpu_need
        ));
        out.push_str(&format!("  - Memory Need: {}\n", bundle.memory_need));
        out.push_str(&format!(
            "    Explanation: this node requires {} of memory to accommodate pending workloads.\n",
            bundle.memory_need
        ));
    }

    out.push_str("==== End of Plan ====\n");
    out
}

/// Render current per-node utilization with hot and idle markers.
pub fn render_nodes(nodes: &[NodeUsage], thresholds: &AlertThresholds) -> String {
    let mut out = String::new();
    out.push_str("==== Current Node Utilization ====\n");

    if nodes.is_empty() {
        out.push_str("No nodes reported.\n");
    }
    for node in nodes {
        out.push_str(&format!(
            "{}: cpu {} of {}, memory {} of {}\n",
            node.name,
            node.cpu_used,
            node.cpu_allocatable,
            node.memory_used,
            node.memory_allocatable,
        ));
        if node.cpu_used > thresholds.cpu {
            out.push_str(&format!(
                "  ! cpu usage is above the {} alert threshold\n",
                thresholds.cpu
            ));
        }
        if node.memory_used > thresholds.memory {
            out.push_str(&format!(
                "  ! memory usage is above the {} alert threshold\n",
                thresholds.memory
            ));
        }
        if node.is_idle() {
            out.push_str("  - idle: candidate for scale-down\n");
        }
    }

    out.push_str("==== End of Utilization ====\n");
    out
}
