//! Configuration for the paginator and its delivery layers
//!
//! Configuration is read from YAML. Every field has a default, so an empty
//! document is a valid configuration.
//!
//! ```yaml
//! data_file: Popular_Baby_Names.csv
//! delimiter: ","
//! has_header: true
//! default_page_size: 10
//! max_page_size: 10000
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Paginator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PagerConfig {
    /// CSV file holding the dataset
    pub data_file: PathBuf,

    /// CSV field delimiter
    pub delimiter: char,

    /// Whether the first row of the file is a header
    pub has_header: bool,

    /// Page size used when a request does not give one
    pub default_page_size: usize,

    /// Largest page size the CLI and HTTP server accept
    pub max_page_size: usize,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            delimiter: ',',
            has_header: true,
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
        }
    }
}

/// Dataset file used when none is configured
pub const DEFAULT_DATA_FILE: &str = "Popular_Baby_Names.csv";

/// Page size used when none is configured
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Page size ceiling used when none is configured
pub const DEFAULT_MAX_PAGE_SIZE: usize = 10_000;

impl PagerConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration is usable
    pub fn validate(&self) -> Result<()> {
        if self.default_page_size == 0 {
            return Err(Error::config("default_page_size must be at least 1"));
        }
        if self.max_page_size < self.default_page_size {
            return Err(Error::config(format!(
                "max_page_size ({}) is smaller than default_page_size ({})",
                self.max_page_size, self.default_page_size
            )));
        }
        if self.delimiter == '"' || self.delimiter == '\n' || self.delimiter == '\r' {
            return Err(Error::config(format!(
                "{:?} cannot be used as a delimiter",
                self.delimiter
            )));
        }
        Ok(())
    }

    /// Override the data file
    #[must_use]
    pub fn with_data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = path.into();
        self
    }

    /// Reject page sizes above the configured ceiling
    ///
    /// Non-positive sizes are left for the pagination core to reject.
    pub fn check_page_size(&self, page_size: i64) -> Result<()> {
        match usize::try_from(page_size) {
            Ok(size) if size > self.max_page_size => Err(Error::invalid_argument(
                "page_size",
                format!("must not exceed {}, got {size}", self.max_page_size),
            )),
            Err(_) if page_size > 0 => Err(Error::invalid_argument(
                "page_size",
                format!("must not exceed {}, got {page_size}", self.max_page_size),
            )),
            _ => Ok(()),
        }
    }
}
