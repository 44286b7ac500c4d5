//! Record flattening
//!
//! Two transforms live here:
//!
//! 1. [`flatten_record`] — the generic recursive flattener. Nested objects
//!    collapse into compound keys joined by a separator; arrays are copied
//!    verbatim and never flattened inline.
//! 2. [`rules::apply_rules`] — a declarative per-stream rule interpreter.
//!    Each stream lists `FlattenRule`s (flatten-recursive with a literal
//!    prefix, or extract-named-fields), so an entity's reshaping is data
//!    rather than a dispatch chain.

pub mod rules;

pub use rules::{apply_rules, FlattenRule};

use serde_json::{Map, Value};

/// Default separator for compound keys
pub const DEFAULT_SEPARATOR: &str = ".";

/// Recursively flatten nested objects into compound keys.
///
/// Scalars and arrays are copied unchanged under their (possibly prefixed)
/// key. Key collisions resolve last-write-wins; output ordering is the
/// insertion order of first encounter.
pub fn flatten_record(record: &Map<String, Value>, sep: &str) -> Map<String, Value> {
    let mut out = Map::new();
    flatten_into(&mut out, "", record, sep);
    out
}

fn flatten_into(out: &mut Map<String, Value>, prefix: &str, map: &Map<String, Value>, sep: &str) {
    for (key, value) in map {
        let new_key = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}{sep}{key}")
        };

        match value {
            Value::Object(inner) => flatten_into(out, &new_key, inner, sep),
            other => {
                out.insert(new_key, other.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests;
