//! Role classification from engine-generated node names.
//!
//! The engine does not report node roles, only names that follow a loose
//! positional convention (`source_*`, `op_*`, `sink_*`) which user-defined
//! plugins are free to ignore. Classification is therefore a best-effort
//! heuristic: a wrong role changes the node's shape on screen and nothing
//! else.

use crate::types::{NodeId, NodeRole, TopologyDescriptor};

/// Positional prefix the engine gives source nodes.
pub const SOURCE_PREFIX: &str = "source_";
/// Positional prefix the engine gives sink nodes.
pub const SINK_PREFIX: &str = "sink_";
/// Positional prefix the engine gives plan operators.
pub const OPERATOR_PREFIX: &str = "op_";

/// Output technologies that mark an unprefixed terminal node as a sink.
///
/// Checked by substring containment against the lower-cased id; only applies
/// when the node has no outgoing edges.
const SINK_KEYWORDS: &[&str] = &[
    "log", "mqtt", "kafka", "rest", "file", "redis", "influx", "tdengine", "edgex", "memory",
    "nop",
];

/// Assign a presentational role to a node.
///
/// Priority order: source prefix, sink prefix, sink-technology keyword on a
/// node with no outgoing edges, otherwise operator.
pub fn classify_node(id: &NodeId, topology: &TopologyDescriptor) -> NodeRole {
    if id.starts_with(SOURCE_PREFIX) {
        return NodeRole::Source;
    }
    if id.starts_with(SINK_PREFIX) {
        return NodeRole::Sink;
    }

    let lowered = id.to_lowercase();
    let has_outgoing = topology.edges.contains_key(id);
    if !has_outgoing && SINK_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
        return NodeRole::Sink;
    }

    NodeRole::Operator
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn topology_with_edges(edges: &[(&str, &[&str])]) -> TopologyDescriptor {
        TopologyDescriptor {
            sources: Vec::new(),
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

    #[test]
    fn test_source_prefix_wins() {
        let topo = topology_with_edges(&[]);
        assert_eq!(
            classify_node(&"source_demo_0".to_string(), &topo),
            NodeRole::Source
        );
    }

    #[test]
    fn test_sink_prefix_wins() {
        let topo = topology_with_edges(&[]);
        assert_eq!(
            classify_node(&"sink_log_0_0".to_string(), &topo),
            NodeRole::Sink
        );
    }

    #[test]
    fn test_keyword_terminal_node_is_sink() {
        // No sink_ prefix, but a known output technology with no outgoing edges
        let topo = topology_with_edges(&[("op_1", &["my_mqtt_out"])]);
        assert_eq!(
            classify_node(&"my_mqtt_out".to_string(), &topo),
            NodeRole::Sink
        );
    }

    #[test]
    fn test_keyword_with_outgoing_edges_is_operator() {
        // Keyword match alone is not enough; the node forwards data onward
        let topo = topology_with_edges(&[("my_mqtt_out", &["op_1"])]);
        assert_eq!(
            classify_node(&"my_mqtt_out".to_string(), &topo),
            NodeRole::Operator
        );
    }

    #[test]
    fn test_plain_operator() {
        let topo = topology_with_edges(&[("having_1", &["sink_log_0"])]);
        assert_eq!(
            classify_node(&"having_1".to_string(), &topo),
            NodeRole::Operator
        );
    }

    #[test]
    fn test_keyword_is_case_insensitive() {
        let topo = topology_with_edges(&[]);
        assert_eq!(
            classify_node(&"My_Redis_Cache".to_string(), &topo),
            NodeRole::Sink
        );
    }
}
