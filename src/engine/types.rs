//! Engine output and configuration types

use serde_json::Value;

/// One output produced by a sync run
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// A flattened record from a stream
    Record {
        /// Stream the record belongs to
        stream: String,
        /// The flat record
        record: Value,
    },
    /// A snapshot of connector state, safe to persist downstream
    State {
        /// Serialized state
        value: Value,
    },
}

impl Message {
    /// Shorthand for a record message
    pub fn record(stream: impl Into<String>, record: Value) -> Self {
        Self::Record {
            stream: stream.into(),
            record,
        }
    }

    /// Shorthand for a state message
    pub fn state(value: Value) -> Self {
        Self::State { value }
    }
}

/// Tunables for a sync run
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Stop a stream after this many emitted records
    pub max_records: Option<u64>,
    /// Emit a state message after every page in addition to the final one
    pub state_per_page: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            max_records: None,
            state_per_page: true,
        }
    }
}

/// Counters for one stream's sync run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncStats {
    /// Pages fetched
    pub pages: u64,
    /// Raw records received from the API
    pub records_fetched: u64,
    /// Flattened records emitted
    pub records_emitted: u64,
    /// Records dropped (error envelopes, non-object entries)
    pub records_skipped: u64,
}
