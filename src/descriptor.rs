//! Parsing of raw engine status payloads.
//!
//! The polling component hands this crate two JSON documents per refresh:
//! the topology report (`sources` + `edges`) and the metrics report (a flat
//! object of counters mixed with non-numeric noise such as status strings
//! and timestamps). This module turns both into the strict core types,
//! dropping whatever the core cannot use. Acquisition itself (HTTP, polling
//! cadence) stays outside this crate.

use crate::error::{Result, TopoVizError};
use crate::types::{MetricsSnapshot, TopologyDescriptor};
use serde_json::Value;
use std::path::Path;
use tracing::trace;

/// Parse a topology report.
///
/// Missing `sources` or `edges` fields default to empty; the layout engine
/// treats that as the "no data" state rather than an error.
pub fn parse_topology(payload: &str) -> Result<TopologyDescriptor> {
    Ok(serde_json::from_str(payload)?)
}

/// Parse a metrics report into a flat numeric snapshot.
///
/// Keeps every top-level entry whose value is a JSON number (booleans,
/// strings, nulls, and nested values are dropped silently), preserving
/// payload order. A payload that is not a JSON object is an error.
pub fn parse_metrics(payload: &str) -> Result<MetricsSnapshot> {
    let value: Value = serde_json::from_str(payload)?;
    let object = value
        .as_object()
        .ok_or_else(|| TopoVizError::Payload("metrics report must be a JSON object".to_string()))?;

    let mut snapshot = MetricsSnapshot::new();
    for (key, entry) in object {
        if let Some(number) = entry.as_f64() {
            snapshot.insert(key.clone(), number);
        } else {
            trace!(key = %key, "dropping non-numeric metrics entry");
        }
    }
    Ok(snapshot)
}

/// Load and parse a topology report from a file.
pub fn load_topology(path: impl AsRef<Path>) -> Result<TopologyDescriptor> {
    parse_topology(&std::fs::read_to_string(path)?)
}

/// Load and parse a metrics report from a file.
pub fn load_metrics(path: impl AsRef<Path>) -> Result<MetricsSnapshot> {
    parse_metrics(&std::fs::read_to_string(path)?)
}
