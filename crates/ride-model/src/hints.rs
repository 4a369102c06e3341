//! Column-level diagnostics gathered during ingestion.

use serde::{Deserialize, Serialize};

/// Shape summary for one column of a loaded table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnHint {
    /// Every non-empty cell parses as a number.
    pub is_numeric: bool,
    /// Distinct non-empty values over non-empty cells.
    pub unique_ratio: f64,
    /// Empty cells over total rows.
    pub null_ratio: f64,
}
