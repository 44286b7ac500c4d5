//! CLI module
//!
//! Command-line interface for the connector.
//!
//! # Commands
//!
//! - `check` - Test connection to the Tilroy API
//! - `discover` - Emit the stream catalog with schemas
//! - `read` - Extract data from streams
//! - `streams` - List stream names (lightweight)
//! - `validate` - Validate a config file without any network calls

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
