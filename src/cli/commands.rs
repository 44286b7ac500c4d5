//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tilroy data extraction connector CLI
#[derive(Parser, Debug)]
#[command(name = "tilroy-connector")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// State file (JSON)
    #[arg(short, long, global = true)]
    pub state: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Test connection to the API
    Check {
        /// Inline config JSON
        #[arg(long)]
        config_json: Option<String>,
    },

    /// Emit the stream catalog with schemas
    Discover,

    /// Read data from streams
    Read {
        /// Streams to sync (comma-separated, empty = all)
        #[arg(long)]
        streams: Option<String>,

        /// Inline config JSON
        #[arg(long)]
        config_json: Option<String>,

        /// Maximum records per stream
        #[arg(long)]
        max_records: Option<u64>,

        /// Emit state after each page
        #[arg(long)]
        state_per_page: bool,

        /// Stop at the first stream failure instead of continuing
        #[arg(long)]
        fail_fast: bool,
    },

    /// List available stream names (lightweight, no schemas)
    Streams,

    /// Validate a config file without making network calls
    Validate {
        /// Inline config JSON
        #[arg(long)]
        config_json: Option<String>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one message per line)
    Json,
    /// Human-readable output
    Pretty,
}
