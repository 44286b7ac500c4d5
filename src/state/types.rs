//! State types persisted between runs

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Complete connector state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct State {
    /// Per-stream state
    #[serde(default)]
    pub streams: HashMap<String, StreamState>,
}

impl State {
    /// Create a new empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Get state for a stream
    pub fn get_stream(&self, stream: &str) -> Option<&StreamState> {
        self.streams.get(stream)
    }

    /// Get mutable state for a stream, creating if needed
    pub fn get_stream_mut(&mut self, stream: &str) -> &mut StreamState {
        self.streams.entry(stream.to_string()).or_default()
    }

    /// Get the bookmark for a stream
    pub fn get_bookmark(&self, stream: &str) -> Option<&str> {
        self.streams.get(stream)?.bookmark.as_deref()
    }

    /// Advance a stream's bookmark, keeping the maximum value seen.
    ///
    /// Replication keys are ISO-8601 dates or timestamps, so string
    /// ordering matches chronological ordering. Returns true if the
    /// bookmark moved.
    pub fn advance_bookmark(&mut self, stream: &str, value: &str) -> bool {
        let stream_state = self.get_stream_mut(stream);
        match &stream_state.bookmark {
            Some(current) if value <= current.as_str() => false,
            _ => {
                stream_state.bookmark = Some(value.to_string());
                true
            }
        }
    }
}

/// State for a single stream
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StreamState {
    /// High-water mark of the stream's replication key
    #[serde(default)]
    pub bookmark: Option<String>,
}
