//! Column hints for loaded tables.

use std::collections::{BTreeMap, BTreeSet};

use ride_model::ColumnHint;

use crate::table::RawTable;

/// Builds per-column shape hints for a table.
///
/// Analyzes each column to determine whether its values are numeric, the
/// ratio of distinct values, and the ratio of empty cells.
pub fn build_column_hints(table: &RawTable) -> BTreeMap<String, ColumnHint> {
    let mut hints = BTreeMap::new();
    let row_count = table.rows.len();
    for (col_idx, header) in table.headers.iter().enumerate() {
        let mut non_null = 0usize;
        let mut numeric = 0usize;
        let mut uniques = BTreeSet::new();
        for row in &table.rows {
            let value = row.get(col_idx).map(String::as_str).unwrap_or("");
            if value.is_empty() {
                continue;
            }
            non_null += 1;
            uniques.insert(value);
            if value.parse::<f64>().is_ok() {
                numeric += 1;
            }
        }
        let null_ratio = if row_count == 0 {
            1.0
        } else {
            (row_count - non_null) as f64 / row_count as f64
        };
        let unique_ratio = if non_null == 0 {
            0.0
        } else {
            uniques.len() as f64 / non_null as f64
        };
        let is_numeric = non_null > 0 && numeric == non_null;
        hints.insert(
            header.clone(),
            ColumnHint {
                is_numeric,
                unique_ratio,
                null_ratio,
            },
        );
    }
    hints
}
