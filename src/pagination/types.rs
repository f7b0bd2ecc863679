//! Pagination request types
//!
//! Requests are validated when they are constructed. Anything that gets past
//! these constructors satisfies the preconditions of the core functions.

use super::range::compute_range;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A validated range-pagination request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// 1-indexed page number
    pub page: usize,
    /// Records per page
    pub page_size: usize,
}

impl PageRequest {
    /// Validate raw page parameters
    pub fn new(page: i64, page_size: i64) -> Result<Self> {
        Ok(Self {
            page: positive("page", page)?,
            page_size: positive("page_size", page_size)?,
        })
    }

    /// Offsets `[start, end)` covered by this page
    pub fn range(&self) -> (usize, usize) {
        compute_range(self.page, self.page_size)
    }
}

/// A validated stable-index request
///
/// Only the sign of `index` is checked here. Whether it falls inside the
/// stable index map is checked against the map itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexRequest {
    /// Starting position, or `None` for the beginning
    pub index: Option<usize>,
    /// Number of positions to return
    pub page_size: usize,
}

impl IndexRequest {
    /// Validate raw index parameters
    pub fn new(index: Option<i64>, page_size: i64) -> Result<Self> {
        let index = match index {
            Some(raw) => Some(usize::try_from(raw).map_err(|_| {
                Error::invalid_argument("index", format!("must be non-negative, got {raw}"))
            })?),
            None => None,
        };

        Ok(Self {
            index,
            page_size: positive("page_size", page_size)?,
        })
    }

    /// Starting position, defaulting to 0
    pub fn start(&self) -> usize {
        self.index.unwrap_or(0)
    }

    /// Starting position of the following page
    pub fn next_index(&self) -> usize {
        self.start().saturating_add(self.page_size)
    }
}

fn positive(field: &str, value: i64) -> Result<usize> {
    if value < 1 {
        return Err(Error::invalid_argument(
            field,
            format!("must be a positive integer, got {value}"),
        ));
    }
    usize::try_from(value)
        .map_err(|_| Error::invalid_argument(field, format!("{value} is too large")))
}
