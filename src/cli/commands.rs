//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Deletion-resilient pagination over a CSV dataset
#[derive(Parser, Debug)]
#[command(name = "hyperpage")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Dataset file (CSV), overrides the configured one
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,

    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

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
    /// Show the start and end offsets of a page
    Range {
        /// Page number (1-indexed)
        #[arg(long, default_value = "1", allow_negative_numbers = true)]
        page: i64,

        /// Records per page (defaults to the configured page size)
        #[arg(long, allow_negative_numbers = true)]
        page_size: Option<i64>,
    },

    /// Print the records on a page
    Page {
        /// Page number (1-indexed)
        #[arg(long, default_value = "1", allow_negative_numbers = true)]
        page: i64,

        /// Records per page (defaults to the configured page size)
        #[arg(long, allow_negative_numbers = true)]
        page_size: Option<i64>,
    },

    /// Print a page with navigation metadata
    Hyper {
        /// Page number (1-indexed)
        #[arg(long, default_value = "1", allow_negative_numbers = true)]
        page: i64,

        /// Records per page (defaults to the configured page size)
        #[arg(long, allow_negative_numbers = true)]
        page_size: Option<i64>,
    },

    /// Print a page addressed by stable position
    HyperIndex {
        /// Starting position (defaults to 0)
        #[arg(long, allow_negative_numbers = true)]
        index: Option<i64>,

        /// Records per page (defaults to the configured page size)
        #[arg(long, allow_negative_numbers = true)]
        page_size: Option<i64>,
    },

    /// Start HTTP server mode
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON on one line
    Json,
    /// Indented JSON
    Pretty,
}
