//! # Tilroy Connector
//!
//! A data extraction connector for the Tilroy retail commerce API.
//! Fetches shops, products, purchase orders, stock changes and sales via
//! the paginated REST endpoints and emits flat, schema-stable records.
//!
//! ## Features
//!
//! - **Page/count pagination**: walks `?count={N}&page={P}` until a short
//!   page signals the end
//! - **Incremental sync**: per-stream bookmarks with a one-day lookback
//!   window against the replication key
//! - **Declarative flattening**: each stream lists rules that collapse
//!   nested vendor objects into flat prefixed keys; line-item arrays
//!   survive verbatim
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tilroy_connector::config::ConnectorConfig;
//! use tilroy_connector::engine::SyncEngine;
//! use tilroy_connector::state::StateManager;
//! use tilroy_connector::{streams, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ConnectorConfig::from_file("config.json")?;
//!     let state = StateManager::from_file("state.json")?;
//!     let engine = SyncEngine::new(&config, state)?;
//!
//!     let sales = streams::find("sales")?;
//!     let (messages, stats) = engine.sync_stream(sales).await?;
//!     println!("emitted {} records", stats.records_emitted);
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the connector
pub mod error;

/// Configuration loading and validation
pub mod config;

/// API key authentication headers
pub mod auth;

/// HTTP client
pub mod http;

/// Response decoding and record extraction
pub mod decode;

/// Pagination strategies
pub mod pagination;

/// Incremental replication windows
pub mod window;

/// Record flattening
pub mod flatten;

/// Target schemas
pub mod schema;

/// Stream catalog
pub mod streams;

/// State management and checkpointing
pub mod state;

/// Main execution engine
pub mod engine;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
