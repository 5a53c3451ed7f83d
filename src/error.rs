//! Pipeline error types.
//!
//! The only fatal condition in the pipeline is a structurally unusable
//! input file. Individually invalid rows are dropped silently during
//! normalization — lenient best-effort ingestion is deliberate.

/// A table could not be turned into a usable model.
///
/// Surfaced to the caller of the parse attempt; the pipeline itself does
/// not retry or log it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataFormatError {
    /// The schedule header lacks one or more required columns.
    #[error("schedule file is missing required columns: {}", missing.join(", "))]
    MissingColumns {
        /// The required column names that were not found, in canonical order.
        missing: Vec<String>,
    },

    /// The roster file has data rows, but none yields a (id, name) pair.
    ///
    /// An entirely empty roster is *not* an error — it produces an empty
    /// directory and every teacher id falls back to a synthesized label.
    #[error("roster file contains rows but no usable teacher entries (need non-empty id and name columns)")]
    NoUsableTeachers,
}
