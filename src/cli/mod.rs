//! CLI module
//!
//! Command-line interface over the paginator.
//!
//! # Commands
//!
//! - `range` - Show the offsets a page covers
//! - `page` - Print the records on a page
//! - `hyper` - Print a page with next/prev/total navigation
//! - `hyper-index` - Print a page addressed by stable position
//! - `serve` - Start HTTP server mode

mod commands;
mod runner;
mod server;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
pub use server::{preload, router, serve, ServerConfig};
