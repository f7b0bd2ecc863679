//! Load-once dataset cache

use super::types::DatasetProvider;
use crate::error::Result;
use crate::types::Record;
use once_cell::sync::OnceCell;
use tracing::debug;

/// Owns a provider and the records it produced on first access
///
/// The first successful load is kept forever; there is no invalidation.
/// A failed load stores nothing, so the next access retries.
#[derive(Debug)]
pub struct CachedDataset<P> {
    provider: P,
    records: OnceCell<Vec<Record>>,
}

impl<P: DatasetProvider> CachedDataset<P> {
    /// Wrap a provider; nothing is loaded until first access
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            records: OnceCell::new(),
        }
    }

    /// The cached records, loading them on first call
    pub fn records(&self) -> Result<&[Record]> {
        let records = self.records.get_or_try_init(|| {
            let records = self.provider.ordered_sequence_of_records()?;
            debug!(
                source = %self.provider.describe(),
                count = records.len(),
                "Loaded dataset"
            );
            Ok::<_, crate::error::Error>(records)
        })?;
        Ok(records)
    }

    /// Check if the dataset has been loaded yet
    pub fn is_loaded(&self) -> bool {
        self.records.get().is_some()
    }
}
