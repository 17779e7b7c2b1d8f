//! Node discovery over the raw topology descriptor.
//!
//! The engine only lists source nodes explicitly; operators and sinks exist
//! solely as adjacency-map keys and values. Discovery collects the union of
//! all three, de-duplicated, in first-appearance order. That order is the
//! canonical node order for the rest of the computation.

use crate::types::TopologyDescriptor;
use indexmap::IndexSet;

/// Collect every node referenced anywhere in the descriptor, exactly once.
///
/// Order: `sources` first, then each adjacency entry's key followed by its
/// downstream list, skipping ids already seen. An empty descriptor yields an
/// empty set.
pub fn discover_nodes(topology: &TopologyDescriptor) -> IndexSet<String> {
    let mut nodes = IndexSet::new();

    for source in &topology.sources {
        nodes.insert(source.clone());
    }

    for (from, downstream) in &topology.edges {
        nodes.insert(from.clone());
        for to in downstream {
            nodes.insert(to.clone());
        }
    }

    nodes
}
