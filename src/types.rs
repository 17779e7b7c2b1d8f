//! Core data types for TopoViz-RS
//!
//! This module contains the data structures exchanged with the two external
//! collaborators: the poller that supplies engine-reported inputs, and the
//! renderer that draws the computed graph.
//!
//! # Main Types
//!
//! - [`TopologyDescriptor`] - Engine-reported pipeline shape (sources + adjacency)
//! - [`MetricsSnapshot`] - Flat counter dictionary from one status poll
//! - [`RenderGraph`] - Classified, labeled, positioned graph ready to draw
//! - [`AggregateMetrics`] - Pipeline-wide totals computed from the snapshot
//!
//! # Determinism
//!
//! The adjacency map and the counter snapshot are [`IndexMap`]s on purpose:
//! every traversal in this crate iterates them in payload order, so a fixed
//! pair of inputs always produces a structurally identical [`RenderGraph`].
//!
//! # Ownership
//!
//! Every output structure is created fresh per computation and never mutated
//! afterwards. Nothing here caches or survives across invocations.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Opaque node identifier as reported by the engine.
///
/// Two distinct ids may humanize to the same display label; labels are never
/// used as keys.
pub type NodeId = String;

/// Flat instrumentation dictionary from a single engine status poll.
///
/// Keys follow the engine's `<node-id>_<metric-name>_total|_us` convention
/// but carry plenty of irrelevant noise; non-numeric entries are dropped
/// during parsing (see [`crate::descriptor`]).
pub type MetricsSnapshot = IndexMap<String, f64>;

/// Engine-reported shape of a running pipeline.
///
/// `edges` may reference nodes that never appear in `sources`; those are
/// discovered implicitly. The map is not guaranteed acyclic or connected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopologyDescriptor {
    /// Node identifiers that are graph roots.
    #[serde(default)]
    pub sources: Vec<NodeId>,
    /// Directed adjacency list, from-node to its downstream nodes.
    #[serde(default)]
    pub edges: IndexMap<NodeId, Vec<NodeId>>,
}

/// Presentational classification of a node.
///
/// Derived from naming heuristics, not authoritative: a misclassified node
/// renders with the wrong shape but its metrics stay correct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum NodeRole {
    Source,
    #[default]
    Operator,
    Sink,
}

/// Throughput and error counters attributed to a single node.
///
/// All-zero when no counters match — absence is not an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeMetrics {
    pub records_in: u64,
    pub records_out: u64,
    pub latency_micros: u64,
    pub exceptions: u64,
}

/// One fully resolved node of the render graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutNode {
    /// Raw engine identifier.
    pub id: NodeId,
    pub role: NodeRole,
    /// Layer depth used purely for positioning.
    pub level: u32,
    /// Human-readable display name.
    pub label: String,
    pub x: f32,
    pub y: f32,
    pub metrics: NodeMetrics,
}

/// Styling class for a directed edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EdgeColorClass {
    /// Edge leaving a source node.
    FromSource,
    /// Edge entering a sink node.
    ToSink,
    #[default]
    Default,
}

/// One directed edge of the render graph.
///
/// Duplicate (from, to) pairs in the descriptor are preserved as distinct
/// edges; the graph is a multigraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutEdge {
    pub from: NodeId,
    pub to: NodeId,
    pub color_class: EdgeColorClass,
}

/// The sole output of the layout computation.
///
/// Never empty: an input topology with zero discoverable nodes yields a
/// single placeholder node (see [`crate::layout::builder`]) so the renderer
/// has an explicit "no data" state instead of an empty-but-valid graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderGraph {
    pub nodes: Vec<LayoutNode>,
    pub edges: Vec<LayoutEdge>,
}

/// Pipeline-wide totals computed from the counter snapshot alone.
///
/// Uses stricter prefix matching than per-node extraction, so these totals
/// may diverge from the sum over [`LayoutNode`] metrics. That asymmetry is
/// a property of the two algorithms, not a reconciliation bug.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateMetrics {
    pub records_in: u64,
    pub records_out: u64,
    pub mean_latency_micros: u64,
    pub exceptions: u64,
}
