//! Common types used throughout hyperpage
//!
//! This module contains the row type shared by the dataset, pagination
//! and hypermedia modules.

use serde::{Deserialize, Serialize};
use std::ops::Index;

// ============================================================================
// Record
// ============================================================================

/// A single dataset row: an ordered sequence of string fields
///
/// The paginator never looks inside a record. The empty record doubles as
/// the placeholder returned for stable positions that have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Vec<String>);

impl Record {
    /// Create a record from its fields
    pub fn new(fields: Vec<String>) -> Self {
        Self(fields)
    }

    /// The empty record substituted for missing stable positions
    pub fn placeholder() -> Self {
        Self(Vec::new())
    }

    /// Check if this record is an empty placeholder
    pub fn is_placeholder(&self) -> bool {
        self.0.is_empty()
    }

    /// Get a field by column position
    pub fn get(&self, column: usize) -> Option<&str> {
        self.0.get(column).map(String::as_str)
    }

    /// All fields in column order
    pub fn fields(&self) -> &[String] {
        &self.0
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the record has no fields
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for Record {
    fn from(fields: Vec<String>) -> Self {
        Self(fields)
    }
}

impl From<Vec<&str>> for Record {
    fn from(fields: Vec<&str>) -> Self {
        Self(fields.into_iter().map(String::from).collect())
    }
}

impl Index<usize> for Record {
    type Output = str;

    fn index(&self, column: usize) -> &str {
        &self.0[column]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_is_empty() {
        let record = Record::placeholder();
        assert!(record.is_placeholder());
        assert!(record.is_empty());
        assert_eq!(record, Record::default());
    }

    #[test]
    fn test_record_fields() {
        let record = Record::from(vec!["2016", "FEMALE", "ASIAN AND PACIFIC ISLANDER", "Olivia"]);
        assert!(!record.is_placeholder());
        assert_eq!(record.len(), 4);
        assert_eq!(record.get(3), Some("Olivia"));
        assert_eq!(record.get(4), None);
        assert_eq!(&record[1], "FEMALE");
    }

    #[test]
    fn test_record_serializes_as_array() {
        let record = Record::from(vec!["a", "b"]);
        assert_eq!(serde_json::to_string(&record).unwrap(), r#"["a","b"]"#);
        assert_eq!(serde_json::to_string(&Record::placeholder()).unwrap(), "[]");

        let back: Record = serde_json::from_str(r#"["a","b"]"#).unwrap();
        assert_eq!(back, record);
    }
}
