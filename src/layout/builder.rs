//! Render graph assembly.
//!
//! Pulls the per-node stages together: discovery fixes the node order,
//! classification and humanization run per node, relaxation supplies layer
//! depths, counter extraction attaches metrics, and this module packages
//! everything onto a fixed grid with colored directed edges.

use crate::layout::classify::classify_node;
use crate::layout::discovery::discover_nodes;
use crate::layout::label::humanize_label;
use crate::layout::levels::assign_levels;
use crate::metrics::extract::extract_node_metrics;
use crate::types::{
    EdgeColorClass, LayoutEdge, LayoutNode, MetricsSnapshot, NodeMetrics, NodeRole, RenderGraph,
    TopologyDescriptor,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Label of the synthetic node emitted for an empty topology.
pub const PLACEHOLDER_LABEL: &str = "No topology data";

/// Id of the synthetic node emitted for an empty topology.
pub const PLACEHOLDER_ID: &str = "placeholder";

/// Grid spacing for node placement.
///
/// `x` walks across a level in discovery order, `y` walks down one row per
/// level. There is no collision avoidance beyond the grid itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutOptions {
    pub origin_x: f32,
    pub origin_y: f32,
    pub column_spacing: f32,
    pub row_spacing: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            origin_x: 50.0,
            origin_y: 40.0,
            column_spacing: 180.0,
            row_spacing: 100.0,
        }
    }
}

/// Compute the render graph for one (topology, snapshot) pair using the
/// default grid spacing.
///
/// Pure and deterministic: identical inputs produce a structurally identical
/// graph. Partial or inconsistent data degrades to defaults instead of
/// failing.
pub fn compute_topology_layout(
    topology: &TopologyDescriptor,
    metrics: &MetricsSnapshot,
) -> RenderGraph {
    compute_topology_layout_with(topology, metrics, &LayoutOptions::default())
}

/// [`compute_topology_layout`] with explicit grid spacing.
pub fn compute_topology_layout_with(
    topology: &TopologyDescriptor,
    metrics: &MetricsSnapshot,
    options: &LayoutOptions,
) -> RenderGraph {
    let discovered = discover_nodes(topology);
    if discovered.is_empty() {
        debug!("empty topology, emitting placeholder node");
        return placeholder_graph(options);
    }
    debug!(nodes = discovered.len(), "building render graph");

    let levels = assign_levels(&discovered, topology);

    let mut roles: HashMap<&str, NodeRole> = HashMap::new();
    let mut nodes = Vec::with_capacity(discovered.len());
    // How many nodes already sit on each level, for the x offset
    let mut level_occupancy: HashMap<u32, u32> = HashMap::new();

    for id in &discovered {
        let role = classify_node(id, topology);
        roles.insert(id.as_str(), role);

        let level = levels.get(id).copied().unwrap_or(0);
        let index_in_level = {
            let slot = level_occupancy.entry(level).or_insert(0);
            let index = *slot;
            *slot += 1;
            index
        };

        nodes.push(LayoutNode {
            id: id.clone(),
            role,
            level,
            label: humanize_label(id),
            x: options.origin_x + index_in_level as f32 * options.column_spacing,
            y: options.origin_y + level as f32 * options.row_spacing,
            metrics: extract_node_metrics(metrics, id),
        });
    }

    let mut edges = Vec::new();
    for (from, downstream) in &topology.edges {
        for to in downstream {
            edges.push(LayoutEdge {
                from: from.clone(),
                to: to.clone(),
                color_class: edge_color(&roles, from, to),
            });
        }
    }

    RenderGraph { nodes, edges }
}

fn edge_color(roles: &HashMap<&str, NodeRole>, from: &str, to: &str) -> EdgeColorClass {
    if roles.get(from) == Some(&NodeRole::Source) {
        EdgeColorClass::FromSource
    } else if roles.get(to) == Some(&NodeRole::Sink) {
        EdgeColorClass::ToSink
    } else {
        EdgeColorClass::Default
    }
}

/// A graph with zero discovered nodes still renders: one placeholder node,
/// no edges. Callers must not special-case "no data" themselves.
fn placeholder_graph(options: &LayoutOptions) -> RenderGraph {
    RenderGraph {
        nodes: vec![LayoutNode {
            id: PLACEHOLDER_ID.to_string(),
            role: NodeRole::Operator,
            level: 0,
            label: PLACEHOLDER_LABEL.to_string(),
            x: options.origin_x,
            y: options.origin_y,
            metrics: NodeMetrics::default(),
        }],
        edges: Vec::new(),
    }
}
