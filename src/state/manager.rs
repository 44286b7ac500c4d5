//! State persistence

use crate::error::{Error, Result};
use crate::state::types::State;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Manages connector state with optional file persistence.
///
/// State lives behind an async lock so the engine can advance bookmarks
/// while the CLI holds a handle for checkpointing. Saves are atomic:
/// the file is written to a temp sibling and renamed into place, so a
/// crash mid-write never leaves a truncated state file.
#[derive(Debug, Clone)]
pub struct StateManager {
    state: Arc<RwLock<State>>,
    path: Option<PathBuf>,
}

impl StateManager {
    /// Create an in-memory manager with no persistence
    pub fn in_memory() -> Self {
        Self {
            state: Arc::new(RwLock::new(State::new())),
            path: None,
        }
    }

    /// Load state from a file, or start empty if the file does not exist
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let state = if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            serde_json::from_str(&contents)
                .map_err(|e| Error::state(format!("invalid state file {}: {e}", path.display())))?
        } else {
            State::new()
        };
        Ok(Self {
            state: Arc::new(RwLock::new(state)),
            path: Some(path),
        })
    }

    /// Get the bookmark for a stream
    pub async fn get_bookmark(&self, stream: &str) -> Option<String> {
        self.state
            .read()
            .await
            .get_bookmark(stream)
            .map(str::to_string)
    }

    /// Advance a stream's bookmark, keeping the maximum. Returns true
    /// if the bookmark moved.
    pub async fn advance_bookmark(&self, stream: &str, value: &str) -> bool {
        self.state.write().await.advance_bookmark(stream, value)
    }

    /// Snapshot of the current state
    pub async fn snapshot(&self) -> State {
        self.state.read().await.clone()
    }

    /// Persist the current state to the configured file, if any
    pub async fn checkpoint(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let state = self.state.read().await;
        let contents = serde_json::to_string_pretty(&*state)?;
        drop(state);

        let tmp = path.with_extension("tmp");
        std::fs::write(&tmp, contents)?;
        std::fs::rename(&tmp, path)?;
        debug!(path = %path.display(), "state checkpointed");
        Ok(())
    }
}
