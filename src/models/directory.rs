//! Teacher roster directory.
//!
//! Built once per roster file; resolves teacher ids to display names
//! during normalization and conflict reporting.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One roster row: a teacher id and display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherEntry {
    /// Roster teacher id (first column, positional).
    pub id: String,
    /// Teacher display name (second column, positional).
    pub name: String,
}

impl TeacherEntry {
    /// Creates an entry.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// The id → name lookup derived from a roster table.
///
/// Keeps every roster row (for name enumeration) alongside the lookup
/// map. When a roster repeats an id, the last row wins in the map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherDirectory {
    entries: Vec<TeacherEntry>,
    by_id: HashMap<String, String>,
}

impl TeacherDirectory {
    /// Creates an empty directory (every lookup falls back to a label).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a directory from roster entries, last duplicate id winning.
    pub fn from_entries(entries: Vec<TeacherEntry>) -> Self {
        let by_id = entries
            .iter()
            .map(|e| (e.id.clone(), e.name.clone()))
            .collect();
        Self { entries, by_id }
    }

    /// Display name for an id, if the roster listed it.
    pub fn name_for(&self, id: &str) -> Option<&str> {
        self.by_id.get(id).map(String::as_str)
    }

    /// Display label for an id: the roster name, or `Teacher ID: <id>`.
    pub fn label_for(&self, id: &str) -> String {
        match self.name_for(id) {
            Some(name) => name.to_string(),
            None => format!("Teacher ID: {id}"),
        }
    }

    /// All roster rows, in file order.
    pub fn entries(&self) -> &[TeacherEntry] {
        &self.entries
    }

    /// All roster names, sorted. Drives the "every teacher" grid views.
    pub fn sorted_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.iter().map(|e| e.name.clone()).collect();
        names.sort();
        names
    }

    /// Number of roster rows.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the roster listed no teachers.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_directory() -> TeacherDirectory {
        TeacherDirectory::from_entries(vec![
            TeacherEntry::new("G001", "Budi"),
            TeacherEntry::new("G002", "Sari"),
        ])
    }

    #[test]
    fn test_name_lookup() {
        let dir = sample_directory();
        assert_eq!(dir.name_for("G001"), Some("Budi"));
        assert_eq!(dir.name_for("G999"), None);
    }

    #[test]
    fn test_label_falls_back_for_unknown_id() {
        let dir = sample_directory();
        assert_eq!(dir.label_for("G002"), "Sari");
        assert_eq!(dir.label_for("G999"), "Teacher ID: G999");
    }

    #[test]
    fn test_duplicate_id_last_wins() {
        let dir = TeacherDirectory::from_entries(vec![
            TeacherEntry::new("G001", "Budi"),
            TeacherEntry::new("G001", "Budi Santoso"),
        ]);
        assert_eq!(dir.name_for("G001"), Some("Budi Santoso"));
        // Both rows remain visible for enumeration.
        assert_eq!(dir.len(), 2);
    }

    #[test]
    fn test_sorted_names() {
        let dir = TeacherDirectory::from_entries(vec![
            TeacherEntry::new("G002", "Sari"),
            TeacherEntry::new("G001", "Budi"),
        ]);
        assert_eq!(dir.sorted_names(), vec!["Budi", "Sari"]);
    }
}
