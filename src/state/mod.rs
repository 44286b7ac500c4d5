//! Bookmark state
//!
//! Each incremental stream keeps one bookmark: the maximum replication-key
//! value observed so far. Bookmarks advance monotonically and persist to a
//! JSON state file between runs.

mod manager;
mod types;

pub use manager::StateManager;
pub use types::{State, StreamState};

#[cfg(test)]
mod manager_tests;
