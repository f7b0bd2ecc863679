// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]

//! # hyperpage
//!
//! Deletion-resilient pagination over a static tabular dataset.
//!
//! ## Features
//!
//! - **Range Pagination**: page number + page size to row offsets
//! - **Hypermedia Pages**: pages carry next/prev/total navigation
//! - **Stable-Index Pagination**: positions fixed at load time, so deleted
//!   rows leave holes instead of shifting the rows after them
//! - **Load Once**: the dataset and index are built on first use and cached
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hyperpage::{CsvFileProvider, Paginator, Result};
//!
//! fn main() -> Result<()> {
//!     let paginator = Paginator::new(CsvFileProvider::new("Popular_Baby_Names.csv"));
//!
//!     let hyper = paginator.get_hyper(1, 10)?;
//!     println!("page 1 of {}", hyper.total_pages);
//!
//!     let mut cursor = paginator.get_hyper_index(None, 10)?;
//!     cursor = paginator.get_hyper_index(Some(cursor.next_index as i64), 10)?;
//!     println!("{} rows from position {}", cursor.data.len(), cursor.index);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────┐
//! │  DatasetProvider  │  ordered_sequence_of_records()
//! └─────────┬─────────┘
//!           │ loaded once (CachedDataset)
//! ┌─────────┴──────────────────────────────┐
//! │               Paginator                │
//! ├───────────────────┬────────────────────┤
//! │ Range             │ Stable index       │
//! │ compute_range     │ StableIndex::build │
//! │ get_page          │ get_hyper_index    │
//! └─────────┬─────────┴─────────┬──────────┘
//!           │   Hypermedia      │
//!           └──── HyperPage / HyperIndexPage ──→ caller
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types
pub mod types;

/// Configuration
pub mod config;

/// Dataset providers and caching
pub mod dataset;

/// Range and stable-index pagination
pub mod pagination;

/// Hypermedia response types
pub mod hypermedia;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::Record;

// Re-export commonly used types
pub use config::PagerConfig;
pub use dataset::{CsvFileProvider, DatasetProvider, InMemoryProvider};
pub use hypermedia::{HyperIndexPage, HyperPage};
pub use pagination::{compute_range, Paginator, StableIndex};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
