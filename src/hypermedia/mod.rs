//! Hypermedia module
//!
//! Wraps a page of records with the navigation metadata a client needs to
//! walk the dataset without doing offset arithmetic itself.

mod builder;
mod types;

pub use types::{HyperIndexPage, HyperPage};

#[cfg(test)]
mod tests;
