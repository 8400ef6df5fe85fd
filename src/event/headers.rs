//! Header-name normalization.
//!
//! The gateway delivers header names with arbitrary casing; all lookups in
//! this crate go through a lowercased copy of the mapping. Values are kept
//! untouched, including non-string values a misbehaving client might send.

use serde_json::{Map, Value};

/// Lowercase every header key for case-insensitive lookup.
///
/// Absent or empty input yields an empty mapping. When two source keys
/// differ only by case, the last one inserted wins; `serde_json::Map`
/// iterates keys in sorted order, so the winner is deterministic.
/// Idempotent: applying this to its own output is a no-op.
pub fn lower_headers(headers: Option<&Map<String, Value>>) -> Map<String, Value> {
    match headers {
        Some(map) => map
            .iter()
            .map(|(name, value)| (name.to_lowercase(), value.clone()))
            .collect(),
        None => Map::new(),
    }
}

/// Look up a header as a string. Non-string values are a miss.
pub fn header_str<'a>(headers: &'a Map<String, Value>, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(Value::as_str)
}
