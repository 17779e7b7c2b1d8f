//! Pipeline-wide metric totals.
//!
//! Runs over the raw snapshot, never over the render graph. Matching here is
//! stricter than per-node attribution (throughput counters must carry the
//! positional source/sink prefix), so aggregate totals and the sum of node
//! metrics can legitimately disagree. The two algorithms are specified
//! independently and must stay that way.

use crate::layout::classify::{SINK_PREFIX, SOURCE_PREFIX};
use crate::metrics::extract::to_counter;
use crate::types::{AggregateMetrics, MetricsSnapshot};

/// Reduce one counter snapshot to pipeline-wide totals.
///
/// - `records_in`: sum of `records_in_total` counters on `source_`-prefixed keys
/// - `records_out`: sum of `records_out_total` counters on `sink_`-prefixed keys
/// - `mean_latency_micros`: arithmetic mean over every `process_latency_us`
///   counter, 0 when none exist
/// - `exceptions`: sum of every `exceptions_total` counter
pub fn compute_aggregate_metrics(snapshot: &MetricsSnapshot) -> AggregateMetrics {
    let mut records_in = 0.0f64;
    let mut records_out = 0.0f64;
    let mut exceptions = 0.0f64;
    let mut latency_sum = 0.0f64;
    let mut latency_count = 0u64;

    for (key, &value) in snapshot {
        if key.contains("records_in_total") && key.starts_with(SOURCE_PREFIX) {
            records_in += value;
        }
        if key.contains("records_out_total") && key.starts_with(SINK_PREFIX) {
            records_out += value;
        }
        if key.contains("process_latency_us") {
            latency_sum += value;
            latency_count += 1;
        }
        if key.contains("exceptions_total") {
            exceptions += value;
        }
    }

    let mean_latency = if latency_count > 0 {
        latency_sum / latency_count as f64
    } else {
        0.0
    };

    AggregateMetrics {
        records_in: to_counter(records_in),
        records_out: to_counter(records_out),
        mean_latency_micros: to_counter(mean_latency),
        exceptions: to_counter(exceptions),
    }
}
