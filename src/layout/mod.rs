//! Topology layout engine.
//!
//! Turns an engine-reported dataflow description into a renderable layered
//! graph. The stages run in a fixed order over the discovered node set:
//!
//! ```text
//! [Discovery] ──► [Classify] ──► [Humanize] ──► [Levels] ──► [Builder]
//! ```
//!
//! # Design
//!
//! - **Payload-order iteration** — adjacency and counters are walked in the
//!   order the engine reported them, so output is bit-identical per input.
//! - **Data-driven heuristics** — keyword and synonym tables are ordered
//!   module-level constants, evaluated first-match-wins.
//! - **Cycle tolerance** — level assignment is bounded relaxation, not a
//!   topological sort; cyclic payloads terminate with approximate depths.
//! - **Total functions** — no stage fails; partial data degrades to zeros,
//!   level 0, or the placeholder node.

pub mod builder;
pub mod classify;
pub mod discovery;
pub mod label;
pub mod levels;

pub use builder::{
    compute_topology_layout, compute_topology_layout_with, LayoutOptions, PLACEHOLDER_ID,
    PLACEHOLDER_LABEL,
};
pub use classify::{classify_node, OPERATOR_PREFIX, SINK_PREFIX, SOURCE_PREFIX};
pub use discovery::discover_nodes;
pub use label::humanize_label;
pub use levels::assign_levels;
