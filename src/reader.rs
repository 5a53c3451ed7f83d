//! Delimiter-sniffing tabular reader.
//!
//! Turns loosely delimited text (comma, semicolon, or tab separated)
//! into header-keyed records. The split is deliberately naive: one
//! leading and one trailing double-quote are stripped per cell, but
//! embedded delimiters inside quoted fields are not honored — this is
//! not an RFC 4180 parser, it mirrors what the source spreadsheets
//! actually export.

use crate::models::{RawRecord, Table};

/// Sniffing priority for schedule tables: semicolon, comma, tab.
pub const SCHEDULE_DELIMITERS: [char; 3] = [';', ',', '\t'];

/// Sniffing priority for roster tables: comma, tab, semicolon.
pub const ROSTER_DELIMITERS: [char; 3] = [',', '\t', ';'];

/// Picks the candidate delimiter occurring most often in the header line.
///
/// Ties (including the no-delimiter case) resolve to the earliest
/// candidate in the slice, so the two priority orders above give the
/// schedule and roster readers their distinct tie-breaks.
fn sniff_delimiter(header: &str, candidates: &[char]) -> char {
    let mut best = candidates.first().copied().unwrap_or(',');
    let mut max_count = 0;
    for &candidate in candidates {
        let count = header.matches(candidate).count();
        if count > max_count {
            max_count = count;
            best = candidate;
        }
    }
    best
}

/// Trims a cell and strips one surrounding double-quote pair, if both ends
/// carry one.
fn clean_cell(cell: &str) -> &str {
    let cell = cell.trim();
    if cell.len() >= 2 && cell.starts_with('"') && cell.ends_with('"') {
        &cell[1..cell.len() - 1]
    } else {
        cell
    }
}

/// Reads delimited text into a [`Table`].
///
/// The first line is the header; each later non-blank line becomes one
/// [`RawRecord`] by zipping header names with split cells. Short rows
/// pad missing trailing columns with empty strings; surplus cells beyond
/// the header are dropped. Text with fewer than two non-empty lines
/// yields a table with no records (the header, when present, is still
/// captured so callers can run column checks).
pub fn read_table(text: &str, delimiters: &[char]) -> Table {
    let text = text.trim();
    let mut lines = text.lines();

    let Some(header_line) = lines.next() else {
        return Table::default();
    };

    let delimiter = sniff_delimiter(header_line, delimiters);
    let headers: Vec<String> = header_line
        .split(delimiter)
        .map(|h| clean_cell(h).to_string())
        .collect();

    let mut records = Vec::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let values: Vec<&str> = line.split(delimiter).map(clean_cell).collect();
        let fields = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.clone(), values.get(i).copied().unwrap_or("").to_string()))
            .collect();
        records.push(RawRecord::new(fields));
    }

    Table { headers, records }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sniff_picks_most_frequent() {
        assert_eq!(sniff_delimiter("a;b;c,d", &SCHEDULE_DELIMITERS), ';');
        assert_eq!(sniff_delimiter("a,b,c;d", &SCHEDULE_DELIMITERS), ',');
        assert_eq!(sniff_delimiter("a\tb\tc", &ROSTER_DELIMITERS), '\t');
    }

    #[test]
    fn test_sniff_tie_break_follows_priority_order() {
        // One semicolon, one comma: schedule order prefers the semicolon,
        // roster order prefers the comma.
        assert_eq!(sniff_delimiter("a;b,c", &SCHEDULE_DELIMITERS), ';');
        assert_eq!(sniff_delimiter("a;b,c", &ROSTER_DELIMITERS), ',');
    }

    #[test]
    fn test_sniff_defaults_when_no_delimiter_found() {
        assert_eq!(sniff_delimiter("single-column", &SCHEDULE_DELIMITERS), ';');
        assert_eq!(sniff_delimiter("single-column", &ROSTER_DELIMITERS), ',');
    }

    #[test]
    fn test_read_table_basic() {
        let table = read_table("a,b,c\n1,2,3\n4,5,6", &ROSTER_DELIMITERS);
        assert_eq!(table.headers, vec!["a", "b", "c"]);
        assert_eq!(table.records.len(), 2);
        assert_eq!(table.records[0].get("a"), Some("1"));
        assert_eq!(table.records[1].get("c"), Some("6"));
    }

    #[test]
    fn test_read_table_crlf_and_blank_lines() {
        let table = read_table("a,b\r\n1,2\r\n\r\n3,4\r\n", &ROSTER_DELIMITERS);
        assert_eq!(table.records.len(), 2);
        assert_eq!(table.records[1].get("b"), Some("4"));
    }

    #[test]
    fn test_read_table_short_row_pads_empty() {
        let table = read_table("a,b,c\n1,2", &ROSTER_DELIMITERS);
        assert_eq!(table.records[0].get("b"), Some("2"));
        assert_eq!(table.records[0].get("c"), Some(""));
    }

    #[test]
    fn test_read_table_surplus_cells_dropped() {
        let table = read_table("a,b\n1,2,3,4", &ROSTER_DELIMITERS);
        assert_eq!(table.records[0].len(), 2);
        assert_eq!(table.records[0].get("b"), Some("2"));
    }

    #[test]
    fn test_quote_stripping_requires_both_ends() {
        let table = read_table("\"a\",b\n\"1\",\"2", &ROSTER_DELIMITERS);
        assert_eq!(table.headers[0], "a");
        assert_eq!(table.records[0].get("a"), Some("1"));
        // Lone leading quote is kept as-is.
        assert_eq!(table.records[0].get("b"), Some("\"2"));
    }

    #[test]
    fn test_cells_trimmed() {
        let table = read_table("a ; b\n 1 ; 2 ", &SCHEDULE_DELIMITERS);
        assert_eq!(table.headers, vec!["a", "b"]);
        assert_eq!(table.records[0].get("a"), Some("1"));
        assert_eq!(table.records[0].get("b"), Some("2"));
    }

    #[test]
    fn test_header_only_keeps_headers_no_records() {
        let table = read_table("a,b,c", &ROSTER_DELIMITERS);
        assert_eq!(table.headers, vec!["a", "b", "c"]);
        assert!(table.records.is_empty());
    }

    #[test]
    fn test_empty_text_yields_empty_table() {
        let table = read_table("", &ROSTER_DELIMITERS);
        assert!(table.headers.is_empty());
        assert!(table.records.is_empty());

        let table = read_table("  \n \n", &ROSTER_DELIMITERS);
        assert!(table.records.is_empty());
    }

    #[test]
    fn test_semicolon_schedule_shape() {
        let table = read_table(
            "Hari;Jam Ke;Kelas;Mata Pelajaran;waktu;idGuru;Guru\nSenin;1;10-A;Matematika;07:00 - 07:45;G001;Budi",
            &SCHEDULE_DELIMITERS,
        );
        assert_eq!(table.records[0].get("Mata Pelajaran"), Some("Matematika"));
        assert_eq!(table.records[0].get("idGuru"), Some("G001"));
    }
}
