//! Dataset provider implementations

use super::decoder::CsvDecoder;
use super::types::DatasetProvider;
use crate::config::PagerConfig;
use crate::error::{Error, Result};
use crate::types::Record;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// CSV File Provider
// ============================================================================

/// Reads the dataset from a delimited text file
#[derive(Debug, Clone)]
pub struct CsvFileProvider {
    path: PathBuf,
    decoder: CsvDecoder,
}

impl CsvFileProvider {
    /// Create a provider for a comma-separated file with a header row
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            decoder: CsvDecoder::default(),
        }
    }

    /// Create a provider from loaded configuration
    pub fn from_config(config: &PagerConfig) -> Self {
        Self {
            path: config.data_file.clone(),
            decoder: CsvDecoder::with_options(config.delimiter, config.has_header),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DatasetProvider for CsvFileProvider {
    fn ordered_sequence_of_records(&self) -> Result<Vec<Record>> {
        if !self.path.exists() {
            return Err(Error::FileNotFound {
                path: self.path.display().to_string(),
            });
        }

        let body = fs::read_to_string(&self.path)?;
        self.decoder.decode(&body)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

// ============================================================================
// In-Memory Provider
// ============================================================================

/// Serves a fixed, already-materialized dataset
#[derive(Debug, Clone, Default)]
pub struct InMemoryProvider {
    records: Vec<Record>,
}

impl InMemoryProvider {
    /// Create a provider over the given records
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Decode the dataset from CSV text held in memory
    pub fn from_csv_str(body: &str, decoder: &CsvDecoder) -> Result<Self> {
        Ok(Self {
            records: decoder.decode(body)?,
        })
    }
}

impl FromIterator<Record> for InMemoryProvider {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl DatasetProvider for InMemoryProvider {
    fn ordered_sequence_of_records(&self) -> Result<Vec<Record>> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory ({} records)", self.records.len())
    }
}
