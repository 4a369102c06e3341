//! Error types for normalization.

use std::fmt;

use thiserror::Error;

use crate::schema::SchemaSearch;

/// Errors raised while resolving a table against the known schema variants.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// A mandatory column is absent. There is no fallback source for it.
    #[error("required column `{}` not found; columns present: {}", .field, list_columns(.columns))]
    MissingField {
        field: &'static str,
        columns: Vec<String>,
    },

    /// No known schema variant matches the table's column set.
    ///
    /// The message names which candidate search failed and lists the columns
    /// that were actually present, so the caller can correct upstream data.
    #[error(
        "no {} column found (tried: {}); columns present: {}",
        .search,
        .search.candidates().join(", "),
        list_columns(.columns)
    )]
    SchemaMismatch {
        search: SchemaSearch,
        columns: Vec<String>,
    },
}

fn list_columns(columns: &[String]) -> ColumnList<'_> {
    ColumnList(columns)
}

struct ColumnList<'a>(&'a [String]);

impl fmt::Display for ColumnList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("(none)");
        }
        for (idx, column) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{column}")?;
        }
        Ok(())
    }
}

/// Result type for normalization operations.
pub type Result<T> = std::result::Result<T, NormalizeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_lists_columns() {
        let err = NormalizeError::MissingField {
            field: "date",
            columns: vec!["foo".to_string(), "bar".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "required column `date` not found; columns present: foo, bar"
        );
    }

    #[test]
    fn schema_mismatch_names_failed_search() {
        let err = NormalizeError::SchemaMismatch {
            search: SchemaSearch::Temperature,
            columns: vec!["foo".to_string()],
        };
        let message = err.to_string();
        assert!(message.starts_with("no temperature column found"));
        assert!(message.contains("TAVG, avgTemp, avg_temp"));
        assert!(message.contains("columns present: foo"));
    }

    #[test]
    fn empty_column_set_renders_placeholder() {
        let err = NormalizeError::MissingField {
            field: "date",
            columns: Vec::new(),
        };
        assert!(err.to_string().ends_with("columns present: (none)"));
    }
}
