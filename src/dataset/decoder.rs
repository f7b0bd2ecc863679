//! CSV decoder
//!
//! Turns delimited text into records. Fields are kept verbatim: no trimming
//! and no type coercion, since the paginator treats rows as opaque.

use crate::error::{Error, Result};
use crate::types::Record;

/// CSV decoder with configurable delimiter and header handling
#[derive(Debug, Clone)]
pub struct CsvDecoder {
    /// Field delimiter
    delimiter: char,
    /// Whether the first row is a header
    has_header: bool,
}

impl Default for CsvDecoder {
    fn default() -> Self {
        Self {
            delimiter: ',',
            has_header: true,
        }
    }
}

impl CsvDecoder {
    /// Create a new CSV decoder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a CSV decoder with custom settings
    pub fn with_options(delimiter: char, has_header: bool) -> Self {
        Self {
            delimiter,
            has_header,
        }
    }

    /// Decode a CSV body into records, skipping the header row if configured
    ///
    /// Every line is a row, so positions match line order after the header.
    /// A blank line decodes to a record with no fields; it still occupies a
    /// position, and on the wire it looks the same as a stable-index
    /// placeholder.
    pub fn decode(&self, body: &str) -> Result<Vec<Record>> {
        let mut lines = body.lines().enumerate();
        if self.has_header {
            lines.next();
        }

        lines
            .map(|(line_num, line)| {
                if line.is_empty() {
                    return Ok(Record::new(Vec::new()));
                }
                parse_csv_line(line, self.delimiter, line_num + 1).map(Record::new)
            })
            .collect()
    }
}

/// Parse a CSV line into fields
///
/// A quote only opens a quoted field at the start of that field; `""` inside
/// a quoted field is an escaped quote.
fn parse_csv_line(line: &str, delimiter: char, line_num: usize) -> Result<Vec<String>> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut field_start = true;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                // Check for escaped quote
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(c);
            }
        } else if c == '"' && field_start {
            in_quotes = true;
            field_start = false;
        } else if c == delimiter {
            fields.push(std::mem::take(&mut current));
            field_start = true;
        } else {
            current.push(c);
            field_start = false;
        }
    }

    if in_quotes {
        return Err(Error::csv_parse(line_num, "unterminated quoted field"));
    }

    fields.push(current);
    Ok(fields)
}
