//! Stable position index
//!
//! The index is materialized once from the dataset. A position keeps its
//! record for as long as the index lives; rows deleted from a live view of
//! the data show up as holes, never as shifted positions.

use crate::error::{Error, Result};
use crate::types::Record;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from load-time position to record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StableIndex {
    entries: BTreeMap<usize, Record>,
}

impl StableIndex {
    /// Index every record of the dataset by its position, starting at 0
    pub fn build(dataset: &[Record]) -> Self {
        dataset.iter().cloned().enumerate().collect()
    }

    /// Build an index from explicit `(position, record)` pairs
    ///
    /// Positions that are not given stay empty.
    pub fn from_entries(entries: impl IntoIterator<Item = (usize, Record)>) -> Self {
        entries.into_iter().collect()
    }

    /// Record stored at `position`, if that position has an entry
    pub fn get(&self, position: usize) -> Option<&Record> {
        self.entries.get(&position)
    }

    /// Check if `position` has an entry
    pub fn contains(&self, position: usize) -> bool {
        self.entries.contains_key(&position)
    }

    /// Number of populated positions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no position is populated
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate populated positions in order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Record)> {
        self.entries.iter().map(|(position, record)| (*position, record))
    }

    /// Records for positions `[start, start + page_size)`
    ///
    /// Always returns exactly `page_size` records. Positions without an entry
    /// yield the empty placeholder. A `page_size` too large to allocate is an
    /// `InvalidArgument` rather than an abort.
    pub fn page(&self, start: usize, page_size: usize) -> Result<Vec<Record>> {
        let mut page = Vec::new();
        page.try_reserve_exact(page_size).map_err(|e| {
            Error::invalid_argument("page_size", format!("{page_size} records: {e}"))
        })?;

        page.extend((0..page_size).map(|offset| {
            match start.checked_add(offset).and_then(|i| self.get(i)) {
                Some(record) => record.clone(),
                None => Record::placeholder(),
            }
        }));
        Ok(page)
    }
}

impl FromIterator<(usize, Record)> for StableIndex {
    fn from_iter<I: IntoIterator<Item = (usize, Record)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
