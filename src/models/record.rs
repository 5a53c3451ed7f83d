//! Raw tabular records.
//!
//! A [`Table`] is the reader's output: the header row plus one
//! [`RawRecord`] per data row. Records are ordered association lists
//! rather than hash maps so that header order survives a round trip —
//! lookup is by column name, iteration is by column position.

use serde::{Deserialize, Serialize};

/// One data row, as (column name, cell value) pairs in header order.
///
/// Cell values are already trimmed and unquoted by the reader. A row
/// shorter than the header is padded with empty strings at read time,
/// so every header name resolves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    fields: Vec<(String, String)>,
}

impl RawRecord {
    /// Creates a record from (column, value) pairs.
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    /// Value of the named column, if the header declared it.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Value of the named column, or `""` when the header did not declare it.
    pub fn get_or_empty(&self, column: &str) -> &str {
        self.get(column).unwrap_or("")
    }

    /// Value at a column position, if present.
    pub fn value_at(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(|(_, value)| value.as_str())
    }

    /// The (column, value) pairs in header order.
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no columns.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A parsed table: header names plus data records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Column names from the header row, trimmed and unquoted, in file order.
    pub headers: Vec<String>,
    /// Data records, one per non-blank data line, in file order.
    pub records: Vec<RawRecord>,
}

impl Table {
    /// Whether the named column appears in the header.
    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|h| h == column)
    }
}
