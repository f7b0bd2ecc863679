//! Dataset paginator
//!
//! Owns the cached dataset and the stable index built from it, and serves
//! both range pages and stable-index pages.

use super::range::slice_page;
use super::stable::StableIndex;
use super::types::{IndexRequest, PageRequest};
use crate::dataset::{CachedDataset, DatasetProvider};
use crate::error::{Error, Result};
use crate::hypermedia::{HyperIndexPage, HyperPage};
use crate::types::Record;
use once_cell::sync::OnceCell;
use tracing::debug;

/// Paginates a dataset loaded once from a provider
///
/// Both the dataset and the stable index are built lazily on first use and
/// then kept, unchanged, for the lifetime of the paginator. Nothing outside
/// the paginator can mutate them.
#[derive(Debug)]
pub struct Paginator<P> {
    dataset: CachedDataset<P>,
    index: OnceCell<StableIndex>,
}

impl<P: DatasetProvider> Paginator<P> {
    /// Create a paginator; nothing is loaded until the first request
    pub fn new(provider: P) -> Self {
        Self {
            dataset: CachedDataset::new(provider),
            index: OnceCell::new(),
        }
    }

    /// Create a paginator whose stable index was built elsewhere
    ///
    /// The given index is used as-is, holes included; it is never rebuilt
    /// from the provider.
    pub fn with_stable_index(provider: P, index: StableIndex) -> Self {
        Self {
            dataset: CachedDataset::new(provider),
            index: OnceCell::with_value(index),
        }
    }

    /// The full dataset, loaded on first access
    pub fn dataset(&self) -> Result<&[Record]> {
        self.dataset.records()
    }

    /// The stable index over the full dataset, built on first access
    pub fn indexed_dataset(&self) -> Result<&StableIndex> {
        self.index.get_or_try_init(|| {
            let index = StableIndex::build(self.dataset()?);
            debug!(positions = index.len(), "Built stable index");
            Ok::<_, Error>(index)
        })
    }

    /// Records on a 1-indexed page
    ///
    /// A page past the end of the dataset is empty, not an error.
    pub fn get_page(&self, page: i64, page_size: i64) -> Result<Vec<Record>> {
        let request = PageRequest::new(page, page_size)?;
        self.page_for(&request)
    }

    /// A page of records with next/prev/total navigation
    pub fn get_hyper(&self, page: i64, page_size: i64) -> Result<HyperPage> {
        let request = PageRequest::new(page, page_size)?;
        let data = self.page_for(&request)?;
        let dataset_len = self.dataset()?.len();

        Ok(HyperPage::build(&request, data, dataset_len))
    }

    /// A page of records addressed by stable position
    ///
    /// `index` defaults to 0 and must name a position below the size of the
    /// stable index. Positions without an entry are returned as placeholders.
    /// With no `index`, an empty stable index still yields a full page of
    /// placeholders.
    pub fn get_hyper_index(&self, index: Option<i64>, page_size: i64) -> Result<HyperIndexPage> {
        let request = IndexRequest::new(index, page_size)?;
        let stable = self.indexed_dataset()?;

        if let Some(start) = request.index {
            if start >= stable.len() {
                return Err(Error::invalid_argument(
                    "index",
                    format!("{start} is out of range (0..{})", stable.len()),
                ));
            }
        }

        let data = stable.page(request.start(), request.page_size)?;
        debug!(
            index = request.start(),
            page_size = request.page_size,
            placeholders = data.iter().filter(|r| r.is_placeholder()).count(),
            "Served stable-index page"
        );

        Ok(HyperIndexPage::build(&request, data))
    }

    /// Check if the dataset has been loaded yet
    pub fn is_loaded(&self) -> bool {
        self.dataset.is_loaded()
    }

    fn page_for(&self, request: &PageRequest) -> Result<Vec<Record>> {
        let (start, end) = request.range();
        let dataset = self.dataset()?;
        let page = slice_page(dataset, start, end).to_vec();

        debug!(
            page = request.page,
            page_size = request.page_size,
            returned = page.len(),
            "Served range page"
        );
        Ok(page)
    }
}
