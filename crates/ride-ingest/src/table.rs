use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{IngestError, Result};

/// A loaded table: trimmed headers plus string rows, no schema assumed.
///
/// Cells are trimmed; the empty string means null. Rows are padded or
/// truncated to the header width at load time.
#[derive(Debug, Default, Clone)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Index of a column by exact, case-sensitive header match.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Reads a delimited file into a [`RawTable`].
///
/// The first non-blank row is the header. An unnamed leading header cell
/// marks a row-index column (pandas `to_csv` keeps one) and that column is
/// dropped. An empty file yields an empty table, not an error.
pub fn read_csv_table(path: &Path) -> Result<RawTable> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|err| to_parse_error(path, &err))?;
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|err| to_parse_error(path, &err))?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(String::is_empty) {
            continue;
        }
        raw_rows.push(row);
    }
    if raw_rows.is_empty() {
        return Ok(RawTable::default());
    }

    let mut headers: Vec<String> = raw_rows[0].iter().map(|value| normalize_header(value)).collect();
    let drop_index = headers.first().is_some_and(String::is_empty);
    if drop_index {
        headers.remove(0);
    }

    let mut rows = Vec::with_capacity(raw_rows.len() - 1);
    for record in raw_rows.iter().skip(1) {
        let source: &[String] = if drop_index {
            record.get(1..).unwrap_or(&[])
        } else {
            record.as_slice()
        };
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            row.push(source.get(idx).cloned().unwrap_or_default());
        }
        rows.push(row);
    }
    debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        dropped_index_column = drop_index,
        "loaded csv table"
    );
    Ok(RawTable { headers, rows })
}

fn to_parse_error(path: &Path, err: &csv::Error) -> IngestError {
    match err.kind() {
        csv::ErrorKind::Io(io) => IngestError::FileRead {
            path: path.to_path_buf(),
            source: std::io::Error::new(io.kind(), io.to_string()),
        },
        _ => IngestError::CsvParse {
            path: path.to_path_buf(),
            message: err.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_collapse_inner_whitespace() {
        assert_eq!(normalize_header("  start   station  "), "start station");
        assert_eq!(normalize_header("\u{feff}date"), "date");
    }

    #[test]
    fn cells_are_trimmed() {
        assert_eq!(normalize_cell("  5.0 "), "5.0");
        assert_eq!(normalize_cell("   "), "");
    }

    #[test]
    fn column_lookup_is_case_sensitive() {
        let table = RawTable {
            headers: vec!["date".to_string(), "TAVG".to_string()],
            rows: Vec::new(),
        };
        assert_eq!(table.column_index("TAVG"), Some(1));
        assert_eq!(table.column_index("tavg"), None);
    }
}
