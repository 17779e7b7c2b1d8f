//! Counter attribution and aggregation.
//!
//! Two independent views of the same flat snapshot: [`extract`] attributes
//! counters to a single node for display next to it, [`aggregate`] reduces
//! the whole snapshot to pipeline totals. They intentionally use different
//! matching rules and may disagree numerically.

pub mod aggregate;
pub mod extract;

pub use aggregate::compute_aggregate_metrics;
pub use extract::extract_node_metrics;
