//! Schema-variant resolution.
//!
//! Variant resolution is strictly priority-ordered and deterministic: the
//! matchers below are tried once, in order, and the first match wins. Exact
//! column presence is the only signal; there is no scoring and no merging
//! across variants.

use ride_ingest::RawTable;
use ride_model::{DATE_COLUMN, NormalizeError, Result, SchemaSearch, SchemaVariant};

/// A pre-aggregated daily naming pair.
struct DailySchema {
    variant: SchemaVariant,
    trips: &'static str,
    temperature: &'static str,
}

const DAILY_SCHEMAS: [DailySchema; 2] = [
    DailySchema {
        variant: SchemaVariant::DailyCounts,
        trips: "trip_count",
        temperature: "avgTemp",
    },
    DailySchema {
        variant: SchemaVariant::DailyCountsAlt,
        trips: "trips",
        temperature: "avg_temp",
    },
];

/// A resolved schema: the concrete column indices one variant will read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaMatch {
    /// Pre-aggregated one-row-per-day table; passed through.
    Daily {
        variant: SchemaVariant,
        date: usize,
        trips: usize,
        temperature: usize,
    },
    /// One-row-per-trip table; grouped by calendar date.
    TripLevel {
        date: usize,
        trip_id: usize,
        temperature: usize,
    },
}

impl SchemaMatch {
    pub fn variant(&self) -> SchemaVariant {
        match self {
            SchemaMatch::Daily { variant, .. } => *variant,
            SchemaMatch::TripLevel { .. } => SchemaVariant::TripLevel,
        }
    }
}

/// First candidate column present for a search, in fallback priority order.
///
/// Picks the first hit even when a later candidate also exists in the table.
pub fn find_candidate(table: &RawTable, search: SchemaSearch) -> Option<usize> {
    search
        .candidates()
        .iter()
        .find_map(|name| table.column_index(name))
}

/// Resolves a table against the known schema variants.
///
/// The mandatory `date` column is checked before any variant is tried; there
/// is no fallback date source.
pub fn resolve_schema(table: &RawTable) -> Result<SchemaMatch> {
    let date = table
        .column_index(DATE_COLUMN)
        .ok_or_else(|| NormalizeError::MissingField {
            field: DATE_COLUMN,
            columns: table.headers.clone(),
        })?;

    for schema in &DAILY_SCHEMAS {
        if let (Some(trips), Some(temperature)) = (
            table.column_index(schema.trips),
            table.column_index(schema.temperature),
        ) {
            return Ok(SchemaMatch::Daily {
                variant: schema.variant,
                date,
                trips,
                temperature,
            });
        }
    }

    let trip_id =
        find_candidate(table, SchemaSearch::TripId).ok_or_else(|| NormalizeError::SchemaMismatch {
            search: SchemaSearch::TripId,
            columns: table.headers.clone(),
        })?;
    let temperature = find_candidate(table, SchemaSearch::Temperature).ok_or_else(|| {
        NormalizeError::SchemaMismatch {
            search: SchemaSearch::Temperature,
            columns: table.headers.clone(),
        }
    })?;
    Ok(SchemaMatch::TripLevel {
        date,
        trip_id,
        temperature,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str]) -> RawTable {
        RawTable {
            headers: headers.iter().map(|h| (*h).to_string()).collect(),
            rows: Vec::new(),
        }
    }

    #[test]
    fn daily_counts_wins_over_trip_level() {
        // Both naming pairs and a ride_id present: the first daily pair wins.
        let resolved =
            resolve_schema(&table(&["date", "trip_count", "avgTemp", "ride_id", "TAVG"]))
                .expect("resolve");
        assert_eq!(resolved.variant(), SchemaVariant::DailyCounts);
    }

    #[test]
    fn alternate_daily_pair_is_second() {
        let resolved = resolve_schema(&table(&["date", "trips", "avg_temp"])).expect("resolve");
        assert_eq!(resolved.variant(), SchemaVariant::DailyCountsAlt);
    }

    #[test]
    fn partial_daily_pair_falls_through() {
        // `trips` without `avg_temp` is not a daily match; trip-level picks
        // up `started_at` + `avgTemp` instead.
        let resolved =
            resolve_schema(&table(&["date", "trips", "started_at", "avgTemp"])).expect("resolve");
        assert_eq!(resolved.variant(), SchemaVariant::TripLevel);
    }

    #[test]
    fn first_present_candidate_is_selected() {
        let resolved = resolve_schema(&table(&["date", "started_at", "ride_id", "avg_temp", "TAVG"]))
            .expect("resolve");
        match resolved {
            SchemaMatch::TripLevel {
                trip_id,
                temperature,
                ..
            } => {
                // ride_id outranks started_at, TAVG outranks avg_temp,
                // regardless of header order in the file.
                assert_eq!(trip_id, 2);
                assert_eq!(temperature, 4);
            }
            other => panic!("expected trip-level match, got {other:?}"),
        }
    }

    #[test]
    fn missing_date_is_checked_first() {
        let err = resolve_schema(&table(&["trip_count", "avgTemp"])).expect_err("no date");
        assert!(matches!(
            err,
            NormalizeError::MissingField { field: "date", .. }
        ));
    }

    #[test]
    fn unrecognized_columns_report_failed_search() {
        let err = resolve_schema(&table(&["date", "foo", "bar"])).expect_err("no schema");
        match err {
            NormalizeError::SchemaMismatch { search, columns } => {
                assert_eq!(search, SchemaSearch::TripId);
                assert_eq!(columns, vec!["date", "foo", "bar"]);
            }
            other => panic!("expected schema mismatch, got {other:?}"),
        }
    }

    #[test]
    fn trip_id_without_temperature_reports_temperature_search() {
        let err = resolve_schema(&table(&["date", "ride_id"])).expect_err("no temperature");
        assert!(matches!(
            err,
            NormalizeError::SchemaMismatch {
                search: SchemaSearch::Temperature,
                ..
            }
        ));
    }
}
