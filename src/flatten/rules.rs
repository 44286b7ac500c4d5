//! Declarative flatten rules
//!
//! A stream's reshaping is a list of rules interpreted by [`apply_rules`].
//! After all rules run, the top-level root of every claimed source path
//! is removed: the nested source never survives beside its flattened
//! children.

use super::flatten_record;
use serde_json::{Map, Value};

/// One reshaping step for a stream's records
#[derive(Debug, Clone, Copy)]
pub enum FlattenRule {
    /// Flatten-recursive: collapse the object at the dotted `source` path
    /// into top-level keys `prefix` + flattened subkey (separator `_`).
    /// Array-valued subfields are preserved verbatim.
    FlattenInto {
        /// Dotted path to the nested object
        source: &'static str,
        /// Literal prefix, including its trailing separator (e.g. `shop_`)
        prefix: &'static str,
    },

    /// Extract-named-fields: copy specific subfields of the object at
    /// `source` to explicit top-level target keys. A missing subfield
    /// yields an explicit null so the target key is always present.
    ExtractFields {
        /// Dotted path to the nested object
        source: &'static str,
        /// Pairs of (dotted subpath within source, target key)
        fields: &'static [(&'static str, &'static str)],
    },
}

impl FlattenRule {
    /// The dotted source path of this rule
    pub fn source(&self) -> &'static str {
        match self {
            Self::FlattenInto { source, .. } | Self::ExtractFields { source, .. } => source,
        }
    }

    /// The top-level field the source path starts at
    fn root(&self) -> &'static str {
        self.source().split('.').next().unwrap_or_default()
    }
}

/// Apply a rule list to a record in place.
///
/// Rules whose source path is absent (or not an object) are skipped and
/// leave the record untouched; the vendor omits optional sections. A
/// dotted source still consumes its root when the root is present: once
/// a rule has claimed a container like `prices`, it never survives into
/// the flat record, even if the claimed branch is missing.
pub fn apply_rules(record: &mut Map<String, Value>, rules: &[FlattenRule]) {
    let mut consumed_roots: Vec<&str> = Vec::new();

    for rule in rules {
        let Some(Value::Object(source_obj)) = get_path(record, rule.source()) else {
            if rule.source().contains('.') && record.contains_key(rule.root()) {
                consumed_roots.push(rule.root());
            }
            continue;
        };

        match rule {
            FlattenRule::FlattenInto { prefix, .. } => {
                for (key, value) in flatten_record(&source_obj, "_") {
                    record.insert(format!("{prefix}{key}"), value);
                }
            }
            FlattenRule::ExtractFields { fields, .. } => {
                let source_value = Value::Object(source_obj);
                for (subpath, target) in *fields {
                    let value = get_value_path(&source_value, subpath).unwrap_or(Value::Null);
                    record.insert((*target).to_string(), value);
                }
            }
        }

        consumed_roots.push(rule.root());
    }

    for root in consumed_roots {
        record.remove(root);
    }
}

/// Resolve a dotted path against a record, cloning the result
fn get_path(record: &Map<String, Value>, path: &str) -> Option<Value> {
    let mut parts = path.split('.');
    let first = parts.next()?;
    let mut current = record.get(first)?;

    for part in parts {
        current = current.as_object()?.get(part)?;
    }

    Some(current.clone())
}

/// Resolve a dotted path against a JSON value, cloning the result
fn get_value_path(value: &Value, path: &str) -> Option<Value> {
    let mut current = value;
    for part in path.split('.') {
        current = current.as_object()?.get(part)?;
    }
    Some(current.clone())
}
