//! Raw tables and where they came from.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Provenance of a loaded dataset, as shown by `inspect` and `/api/source`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    pub path: PathBuf,
    /// `sha256:`-prefixed digest of the raw bytes, to tell reloads apart.
    pub hash: String,
    pub size_bytes: u64,
    /// `csv`, `tsv`, `csv-semicolon` or `psv`.
    pub format: String,
    /// Header names in file order.
    pub columns: Vec<String>,
    /// Data rows read, before decoding into records.
    pub row_count: usize,
    pub loaded_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Describe `table`, parsed from the `contents` of the file at `path`.
    pub fn describe(path: PathBuf, contents: &[u8], table: &DataTable) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path,
            hash: format!("sha256:{:x}", Sha256::digest(contents)),
            size_bytes: contents.len() as u64,
            format: table.format().to_string(),
            columns: table.headers.clone(),
            row_count: table.row_count(),
            loaded_at: Utc::now(),
        }
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

/// Parsed tabular data, still as raw strings.
///
/// Every row is padded to the header width.
#[derive(Debug, Clone)]
pub struct DataTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub delimiter: u8,
}

impl DataTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>, delimiter: u8) -> Self {
        Self {
            headers,
            rows,
            delimiter,
        }
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Number of rows, excluding the header.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Format name for the detected delimiter.
    pub fn format(&self) -> &'static str {
        match self.delimiter {
            b'\t' => "tsv",
            b',' => "csv",
            b';' => "csv-semicolon",
            b'|' => "psv",
            _ => "delimited",
        }
    }

    /// Position of a column by header name, ignoring surrounding whitespace.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h.trim() == name)
    }

    /// Data rows with their 1-based row numbers, as used in error messages.
    pub fn numbered_rows(&self) -> impl Iterator<Item = (usize, &[String])> {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| (i + 1, row.as_slice()))
    }
}

/// Whether a cell holds no usable value (blank, `NA`, `NaN`, `null`, ...).
pub fn is_missing(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty()
        || ["na", "n/a", "nan", "null", "none"]
            .iter()
            .any(|token| trimmed.eq_ignore_ascii_case(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(delimiter: u8) -> DataTable {
        DataTable::new(
            vec!["dteday".into(), "count_cr".into()],
            vec![
                vec!["2011-01-01".into(), "985".into()],
                vec!["2011-01-02".into(), "801".into()],
            ],
            delimiter,
        )
    }

    #[test]
    fn test_describe_file() {
        let contents = b"dteday,count_cr\n2011-01-01,985\n2011-01-02,801\n";
        let source = SourceMetadata::describe("data/day.csv".into(), contents, &table(b','));

        assert_eq!(source.file, "day.csv");
        assert_eq!(source.size_bytes, contents.len() as u64);
        assert_eq!(source.format, "csv");
        assert_eq!(source.columns, vec!["dteday", "count_cr"]);
        assert_eq!(source.column_count(), 2);
        assert_eq!(source.row_count, 2);
        assert!(source.hash.starts_with("sha256:"));
        assert_eq!(source.hash.len(), "sha256:".len() + 64);
    }

    #[test]
    fn test_hash_tracks_contents() {
        let a = SourceMetadata::describe("day.csv".into(), b"a", &table(b','));
        let b = SourceMetadata::describe("day.csv".into(), b"b", &table(b','));
        assert_ne!(a.hash, b.hash);
    }

    #[test]
    fn test_format_names() {
        assert_eq!(table(b'\t').format(), "tsv");
        assert_eq!(table(b';').format(), "csv-semicolon");
        assert_eq!(table(b'|').format(), "psv");
    }

    #[test]
    fn test_numbered_rows_start_at_one() {
        let t = table(b',');
        let numbers: Vec<usize> = t.numbered_rows().map(|(n, _)| n).collect();
        assert_eq!(numbers, vec![1, 2]);
        assert_eq!(t.column_index(" count_cr"), None);
        assert_eq!(t.column_index("count_cr"), Some(1));
    }

    #[test]
    fn test_missing_values() {
        assert!(is_missing(""));
        assert!(is_missing("  NA "));
        assert!(is_missing("NaN"));
        assert!(is_missing("null"));
        assert!(!is_missing("0"));
        assert!(!is_missing("nah"));
    }
}
