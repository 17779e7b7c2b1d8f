//! # TopoViz-RS: Pipeline Topology Layout & Metrics Attribution
//!
//! The core of a management console for a remote stream-processing engine:
//! given the engine's raw dataflow report (source names plus an adjacency
//! map) and one flat runtime counter snapshot, compute a renderable directed
//! graph — classified nodes, human-readable labels, deterministic layered
//! positions, colored edges, and per-node plus aggregate throughput/error
//! metrics.
//!
//! ## Architecture
//!
//! - **Layout**: node discovery, role classification, label humanization,
//!   cycle-tolerant level assignment, and grid placement ([`layout`])
//! - **Metrics**: per-node counter attribution and pipeline-wide reduction
//!   over the same flat snapshot ([`metrics`])
//! - **Descriptor**: tolerant parsing of raw engine JSON payloads into the
//!   strict core types ([`descriptor`])
//!
//! The computation is synchronous, side-effect-free, and idempotent: a fixed
//! (topology, snapshot) pair always yields a structurally identical graph.
//! Polling the engine and drawing the result belong to external
//! collaborators.
//!
//! ## Example
//!
//! ```
//! use topoviz_rs::{compute_aggregate_metrics, compute_topology_layout};
//! use topoviz_rs::descriptor::{parse_metrics, parse_topology};
//!
//! let topology = parse_topology(
//!     r#"{"sources": ["source_demo"], "edges": {"source_demo": ["sink_log"]}}"#,
//! ).unwrap();
//! let metrics = parse_metrics(
//!     r#"{"source_demo_0_records_in_total": 42, "sink_log_0_0_records_out_total": 40}"#,
//! ).unwrap();
//!
//! let graph = compute_topology_layout(&topology, &metrics);
//! assert_eq!(graph.nodes.len(), 2);
//! assert_eq!(graph.nodes[0].metrics.records_in, 42);
//!
//! let totals = compute_aggregate_metrics(&metrics);
//! assert_eq!(totals.records_out, 40);
//! ```

pub mod descriptor;
pub mod error;
pub mod layout;
pub mod metrics;
pub mod types;

// Re-export commonly used types
pub use error::{Result, TopoVizError};
pub use layout::{compute_topology_layout, compute_topology_layout_with, LayoutOptions};
pub use metrics::{compute_aggregate_metrics, extract_node_metrics};
pub use types::{
    AggregateMetrics, EdgeColorClass, LayoutEdge, LayoutNode, MetricsSnapshot, NodeId, NodeMetrics,
    NodeRole, RenderGraph, TopologyDescriptor,
};
