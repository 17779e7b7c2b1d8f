//! Layer depth assignment via bounded iterative relaxation.
//!
//! Levels position nodes on the layout grid; they have no runtime meaning.
//! The relaxation is deliberately not a topological sort: the engine never
//! promises an acyclic adjacency map, and a strict sort would reject exactly
//! the payloads this crate must tolerate. Instead, edges are relaxed for at
//! most one pass per discovered node, which guarantees termination on cyclic
//! input at the cost of approximate levels inside the cycle.

use crate::types::TopologyDescriptor;
use indexmap::IndexSet;
use std::collections::HashMap;
use tracing::trace;

/// Compute a layer depth for every discovered node.
///
/// Sources start at level 0. Each pass walks the adjacency map in payload
/// order and pushes a downstream node to `from + 1` whenever it has no level
/// yet or sits at or above its upstream neighbor; an unassigned `from` reads
/// as level 0. Stops early when a full pass changes nothing, or after
/// `|nodes|` passes. Nodes left unassigned (unreachable from any source)
/// default to 0.
pub fn assign_levels(
    nodes: &IndexSet<String>,
    topology: &TopologyDescriptor,
) -> HashMap<String, u32> {
    let mut levels: HashMap<String, u32> = HashMap::new();
    for source in &topology.sources {
        levels.insert(source.clone(), 0);
    }

    let max_passes = nodes.len();
    for pass in 0..max_passes {
        let mut changed = false;

        for (from, downstream) in &topology.edges {
            let from_level = levels.get(from).copied().unwrap_or(0);
            for to in downstream {
                let needs_push = match levels.get(to) {
                    None => true,
                    Some(&to_level) => to_level <= from_level,
                };
                if needs_push {
                    levels.insert(to.clone(), from_level + 1);
                    changed = true;
                }
            }
        }

        if !changed {
            trace!(pass, "level relaxation reached fixed point");
            break;
        }
    }

    // Unreachable nodes sit on the top row
    for node in nodes {
        levels.entry(node.clone()).or_insert(0);
    }

    levels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::discovery::discover_nodes;
    use indexmap::IndexMap;

    fn descriptor(sources: &[&str], edges: &[(&str, &[&str])]) -> TopologyDescriptor {
        TopologyDescriptor {
            sources: sources.iter().map(|s| s.to_string()).collect(),
            edges: edges
                .iter()
                .map(|(from, tos)| {
                    (
                        from.to_string(),
                        tos.iter().map(|t| t.to_string()).collect::<Vec<_>>(),
                    )
                })
                .collect::<IndexMap<_, _>>(),
        }
    }

    fn levels_for(desc: &TopologyDescriptor) -> HashMap<String, u32> {
        assign_levels(&discover_nodes(desc), desc)
    }

    #[test]
    fn test_linear_chain() {
        let desc = descriptor(
            &["source_a"],
            &[("source_a", &["op_1"]), ("op_1", &["sink_log"])],
        );
        let levels = levels_for(&desc);
        assert_eq!(levels["source_a"], 0);
        assert_eq!(levels["op_1"], 1);
        assert_eq!(levels["sink_log"], 2);
    }

    #[test]
    fn test_diamond_takes_longest_path() {
        let desc = descriptor(
            &["source_a"],
            &[
                ("source_a", &["op_1", "op_2"]),
                ("op_1", &["op_3"]),
                ("op_2", &["op_3"]),
                ("op_3", &["sink_log"]),
            ],
        );
        let levels = levels_for(&desc);
        assert_eq!(levels["op_1"], 1);
        assert_eq!(levels["op_2"], 1);
        assert_eq!(levels["op_3"], 2);
        assert_eq!(levels["sink_log"], 3);
    }

    #[test]
    fn test_monotonic_along_edges_in_dag() {
        let desc = descriptor(
            &["source_a", "source_b"],
            &[
                ("source_a", &["op_1"]),
                ("source_b", &["op_1", "op_2"]),
                ("op_1", &["op_2"]),
                ("op_2", &["sink_log"]),
            ],
        );
        let levels = levels_for(&desc);
        for (from, downstream) in &desc.edges {
            for to in downstream {
                assert!(
                    levels[to] > levels[from],
                    "level({to}) must exceed level({from})"
                );
            }
        }
    }

    #[test]
    fn test_cycle_terminates() {
        let desc = descriptor(&["a"], &[("a", &["b"]), ("b", &["a"])]);
        let levels = levels_for(&desc);
        // Levels inside a cycle are approximate; termination and coverage
        // are the contract
        assert_eq!(levels.len(), 2);
        assert!(levels["b"] >= 1);
    }

    #[test]
    fn test_unreachable_node_defaults_to_zero() {
        let desc = descriptor(&["source_a"], &[("orphan", &[])]);
        let levels = levels_for(&desc);
        assert_eq!(levels["orphan"], 0);
    }

    #[test]
    fn test_no_sources_still_assigns() {
        // Unassigned upstream nodes read as level 0, so downstream nodes
        // still get pushed below them
        let desc = descriptor(&[], &[("op_1", &["sink_log"])]);
        let levels = levels_for(&desc);
        assert_eq!(levels["op_1"], 0);
        assert_eq!(levels["sink_log"], 1);
    }

    // Property-based tests using proptest
    use proptest::prelude::*;

    fn arb_id() -> impl Strategy<Value = String> {
        (0u8..8).prop_map(|i| format!("node_{i}"))
    }

    // Arbitrary adjacency maps, cycles and self-loops included
    fn arb_descriptor() -> impl Strategy<Value = TopologyDescriptor> {
        (
            prop::collection::vec(arb_id(), 0..4),
            prop::collection::vec((arb_id(), prop::collection::vec(arb_id(), 0..4)), 0..8),
        )
            .prop_map(|(sources, edge_list)| TopologyDescriptor {
                sources,
                edges: edge_list.into_iter().collect(),
            })
    }

    proptest! {
        #[test]
        fn test_terminates_and_covers_all_nodes(desc in arb_descriptor()) {
            let nodes = discover_nodes(&desc);
            // Property: returns (bounded passes even on cyclic input) with a
            // level for every discovered node, capped by the pass count
            let levels = assign_levels(&nodes, &desc);
            prop_assert_eq!(levels.len(), nodes.len());

            // Each of the at most |nodes| passes can push a level at most
            // once per adjacency pair
            let pairs: usize = desc.edges.values().map(Vec::len).sum();
            let bound = (nodes.len() * pairs) as u32 + 1;
            for level in levels.values() {
                prop_assert!(*level <= bound);
            }
        }
    }
}
