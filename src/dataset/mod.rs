//! Dataset module
//!
//! Loads the ordered sequence of records that every paginator works over.
//!
//! # Overview
//!
//! The dataset module provides:
//! - `DatasetProvider` - Source of the full, ordered record sequence
//! - `CsvFileProvider` / `InMemoryProvider` - Built-in providers
//! - `CsvDecoder` - Delimited text decoding with header handling
//! - `CachedDataset` - Load-once cache kept for the owner's lifetime

mod cache;
mod decoder;
mod providers;
mod types;

pub use cache::CachedDataset;
pub use decoder::CsvDecoder;
pub use providers::{CsvFileProvider, InMemoryProvider};
pub use types::DatasetProvider;
