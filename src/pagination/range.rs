//! Offset arithmetic for range pagination

use crate::types::Record;

/// Start and end offsets for a 1-indexed page
///
/// Returns `((page - 1) * page_size, page * page_size)`. Both arguments must
/// be at least 1. No bounds checking against any dataset is done here.
/// Products saturate at `usize::MAX`.
pub fn compute_range(page: usize, page_size: usize) -> (usize, usize) {
    debug_assert!(page >= 1, "page must be >= 1");
    debug_assert!(page_size >= 1, "page_size must be >= 1");

    let start = page.saturating_sub(1).saturating_mul(page_size);
    let end = page.saturating_mul(page_size);
    (start, end)
}

/// Slice `[start, end)` out of the dataset
///
/// An out-of-range start gives an empty slice; an end past the dataset is
/// clipped to its length.
pub fn slice_page(dataset: &[Record], start: usize, end: usize) -> &[Record] {
    if start >= dataset.len() {
        return &[];
    }
    &dataset[start..end.min(dataset.len())]
}

/// Number of pages of `page_size` needed to cover `len` records
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size)
}
