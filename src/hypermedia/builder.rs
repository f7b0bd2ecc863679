//! Construction of hypermedia responses from pagination results

use super::types::{HyperIndexPage, HyperPage};
use crate::pagination::{total_pages, IndexRequest, PageRequest};
use crate::types::Record;

impl HyperPage {
    /// Wrap a range page with navigation for a dataset of `dataset_len` records
    pub fn build(request: &PageRequest, data: Vec<Record>, dataset_len: usize) -> Self {
        let total_pages = total_pages(dataset_len, request.page_size);
        let page = request.page;

        Self {
            page_size: data.len(),
            page,
            data,
            next_page: (page < total_pages).then(|| page + 1),
            prev_page: (page > 1).then(|| page - 1),
            total_pages,
        }
    }
}

impl HyperIndexPage {
    /// Wrap a stable-index page with the position to continue from
    pub fn build(request: &IndexRequest, data: Vec<Record>) -> Self {
        Self {
            index: request.start(),
            next_index: request.next_index(),
            page_size: request.page_size,
            data,
        }
    }
}
