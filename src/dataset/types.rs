//! Dataset provider trait

use crate::error::Result;
use crate::types::Record;

/// Source of the full dataset
///
/// Implementations must return records in the same order on every call.
/// The first successful load fixes the position of every record for the
/// lifetime of the paginator that caches it.
pub trait DatasetProvider: Send + Sync {
    /// Return every record of the dataset, in order
    fn ordered_sequence_of_records(&self) -> Result<Vec<Record>>;

    /// Short human-readable name used in log lines
    fn describe(&self) -> String {
        "dataset".to_string()
    }
}
