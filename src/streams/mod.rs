//! Stream catalog
//!
//! Every Tilroy entity the connector extracts is described by a
//! [`StreamSpec`]: endpoint path, keys, page size, replication window and
//! the declarative flatten rules applied to each record. Adding an entity
//! means adding a data declaration here, not a new type.

mod products;
mod purchase_orders;
mod sales;
mod shops;
mod stock_changes;

use crate::error::{Error, Result};
use crate::flatten::{apply_rules, flatten_record, FlattenRule, DEFAULT_SEPARATOR};
use crate::schema::Schema;
use crate::window::WindowVariant;
use once_cell::sync::Lazy;
use serde_json::{Map, Value};
use tracing::warn;


/// Description of one extractable Tilroy entity
#[derive(Debug, Clone)]
pub struct StreamSpec {
    /// Stream name, also the state key for its bookmark
    pub name: &'static str,
    /// Endpoint path relative to the configured API base URL
    pub path: &'static str,
    /// Primary key field(s) of the emitted flat records
    pub primary_keys: &'static [&'static str],
    /// Replication key, or `None` for full-refresh streams
    pub replication_key: Option<&'static str>,
    /// Records requested per page
    pub page_size: u32,
    /// Upper-bound behavior of the replication window
    pub window: WindowVariant,
    /// Reshaping rules applied to each record
    pub rules: &'static [FlattenRule],
    /// Flat target schema of the emitted records
    pub schema: Schema,
}

static STREAMS: Lazy<Vec<StreamSpec>> = Lazy::new(|| {
    vec![
        shops::spec(),
        products::spec(),
        purchase_orders::spec(),
        stock_changes::spec(),
        sales::spec(),
    ]
});

/// All known streams, in sync order
pub fn all() -> &'static [StreamSpec] {
    &STREAMS
}

/// Look up a stream by name
pub fn find(name: &str) -> Result<&'static StreamSpec> {
    STREAMS
        .iter()
        .find(|s| s.name == name)
        .ok_or_else(|| Error::stream_not_found(name))
}

/// Reshape one raw vendor record into its flat form.
///
/// Returns `None` for vendor error envelopes (`{code, message}` objects
/// that some endpoints interleave with real records); these are logged
/// and dropped. Streams without rules fall back to a full recursive
/// flatten with the `.` separator.
pub fn post_process(
    spec: &StreamSpec,
    mut record: Map<String, Value>,
) -> Option<Map<String, Value>> {
    if is_error_envelope(&record) {
        let message = record
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("<no message>");
        warn!(stream = spec.name, message, "skipping vendor error envelope");
        return None;
    }

    if spec.rules.is_empty() {
        return Some(flatten_record(&record, DEFAULT_SEPARATOR));
    }

    apply_rules(&mut record, spec.rules);
    Some(record)
}

fn is_error_envelope(record: &Map<String, Value>) -> bool {
    record.contains_key("code") && record.contains_key("message")
}
