//! Hypermedia response types

use crate::types::Record;
use serde::{Deserialize, Serialize};

/// A range page with next/prev/total navigation
///
/// Absent `next_page` and `prev_page` serialize as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HyperPage {
    /// Number of records actually returned
    pub page_size: usize,
    /// Requested page number, echoed as given
    pub page: usize,
    /// Records on this page
    pub data: Vec<Record>,
    /// Following page, if there is one
    pub next_page: Option<usize>,
    /// Preceding page, if there is one
    pub prev_page: Option<usize>,
    /// Pages needed to cover the dataset at the requested page size
    pub total_pages: usize,
}

impl HyperPage {
    /// Check if a following page exists
    pub fn has_next(&self) -> bool {
        self.next_page.is_some()
    }

    /// Check if a preceding page exists
    pub fn has_prev(&self) -> bool {
        self.prev_page.is_some()
    }
}

/// A stable-index page with the position to continue from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HyperIndexPage {
    /// Starting position of this page
    pub index: usize,
    /// Starting position of the next page (not clamped to the index size)
    pub next_index: usize,
    /// Requested page size
    pub page_size: usize,
    /// One entry per position; empty records mark positions with no entry
    pub data: Vec<Record>,
}

impl HyperIndexPage {
    /// Number of placeholder entries in this page
    pub fn placeholder_count(&self) -> usize {
        self.data.iter().filter(|r| r.is_placeholder()).count()
    }
}
