//! Display-name humanization for machine-generated node identifiers.
//!
//! Engine plan nodes carry names like `op_2_tumblingwindow_0` — positional
//! prefix, ordinal, operator kind, instance suffix. Humanization strips the
//! machinery and maps the remaining stem through two ordered synonym tables
//! (sink technologies first, then stream operators); unmatched stems fall
//! back to title-cased words.
//!
//! Labels are display-only. Two ids may humanize to the same label.

use crate::layout::classify::{OPERATOR_PREFIX, SINK_PREFIX, SOURCE_PREFIX};

/// Friendly names for known sink technologies, in match-priority order.
///
/// Matching is substring containment on the cleaned, lower-cased stem; the
/// first entry that matches wins.
const SINK_SYNONYMS: &[(&str, &str)] = &[
    ("mqtt", "MQTT Output"),
    ("edgex", "EdgeX Output"),
    ("rest", "REST Output"),
    ("influx", "InfluxDB Output"),
    ("tdengine", "TDengine Output"),
    ("redis", "Redis Output"),
    ("kafka", "Kafka Output"),
    ("memory", "Memory Output"),
    ("file", "File Output"),
    ("log", "Log Output"),
    ("nop", "No-op Output"),
];

/// Friendly names for known stream operators, in match-priority order.
///
/// Specific window kinds come before the generic "window" entry so that
/// `tumblingwindow` does not fall through to the catch-all.
const OPERATOR_SYNONYMS: &[(&str, &str)] = &[
    ("tumblingwindow", "Tumbling Window"),
    ("hoppingwindow", "Hopping Window"),
    ("slidingwindow", "Sliding Window"),
    ("sessionwindow", "Session Window"),
    ("countwindow", "Count Window"),
    ("watermark", "Watermark"),
    ("window", "Window"),
    ("filter", "Filter"),
    ("having", "Having"),
    ("aggregate", "Aggregate"),
    ("join", "Join"),
    ("order", "Order"),
    ("select", "Select"),
    ("project", "Projection"),
    ("transform", "Transform"),
    ("encode", "Encode"),
    ("decode", "Decode"),
    ("switch", "Switch"),
];

/// Convert a raw node identifier into a short display name.
pub fn humanize_label(id: &str) -> String {
    let cleaned = clean_identifier(id);
    if cleaned.is_empty() {
        return id.to_string();
    }

    for (keyword, label) in SINK_SYNONYMS {
        if cleaned.contains(keyword) {
            return (*label).to_string();
        }
    }
    for (keyword, label) in OPERATOR_SYNONYMS {
        if cleaned.contains(keyword) {
            return (*label).to_string();
        }
    }

    title_case(&cleaned)
}

/// Strip positional prefix, trailing instance suffixes, and leading ordinal
/// groups, then lower-case what remains.
fn clean_identifier(id: &str) -> String {
    let mut stem = id;
    for prefix in [SOURCE_PREFIX, SINK_PREFIX, OPERATOR_PREFIX] {
        if let Some(rest) = stem.strip_prefix(prefix) {
            stem = rest;
            break;
        }
    }

    // Trailing `_<digits>` instance suffixes, e.g. `mqtt_0_0` -> `mqtt`
    let mut stem = stem.to_string();
    while let Some(idx) = stem.rfind('_') {
        let suffix = &stem[idx + 1..];
        if !suffix.is_empty() && suffix.chars().all(|c| c.is_ascii_digit()) {
            stem.truncate(idx);
        } else {
            break;
        }
    }

    // Leading `<digits>_` ordinal groups, e.g. `2_tumblingwindow` -> `tumblingwindow`
    loop {
        match stem.find('_') {
            Some(idx)
                if idx > 0 && stem[..idx].chars().all(|c| c.is_ascii_digit()) =>
            {
                stem.drain(..=idx);
            }
            _ => break,
        }
    }

    stem.to_lowercase()
}

/// `my_custom_stream` -> `My Custom Stream`
fn title_case(stem: &str) -> String {
    stem.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
