//! Pagination module
//!
//! Supports: Range (page number + page size), Stable index
//!
//! # Overview
//!
//! Range pagination recomputes offsets on every request and makes no promise
//! if the data changes. Stable-index pagination serves positions from an
//! index materialized once, so deleted rows leave holes instead of shifting
//! the rows after them.

mod paginator;
mod range;
mod stable;
mod types;

pub use paginator::Paginator;
pub use range::{compute_range, slice_page, total_pages};
pub use stable::StableIndex;
pub use types::{IndexRequest, PageRequest};
