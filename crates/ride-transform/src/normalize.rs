//! The schema normalizer: raw tables to canonical daily series.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use ride_ingest::RawTable;
use ride_model::{DailyRecord, Result};

use crate::date::parse_date;
use crate::numeric::{parse_count, parse_f64};
use crate::schema::{SchemaMatch, resolve_schema};

pub(crate) fn cell<'a>(row: &'a [String], idx: usize) -> &'a str {
    row.get(idx).map(String::as_str).unwrap_or("")
}

/// Normalizes a raw table into the canonical daily series.
///
/// Resolves the table against the known schema variants (first match wins),
/// drops rows whose date fails to parse, and returns one record per calendar
/// date in ascending order. A table with no surviving rows yields an empty
/// series, not an error.
///
/// Pure transform: the input is never mutated and no state is kept across
/// calls, so concurrent callers on independent tables need no locking.
pub fn normalize(table: &RawTable) -> Result<Vec<DailyRecord>> {
    let schema = resolve_schema(table)?;
    debug!(variant = %schema.variant(), "resolved schema variant");
    let records = match schema {
        SchemaMatch::Daily {
            date, trips, temperature, ..
        } => passthrough(table, date, trips, temperature),
        SchemaMatch::TripLevel {
            date, trip_id, temperature,
        } => aggregate(table, date, trip_id, temperature),
    };
    Ok(records)
}

/// Pre-aggregated input: parse-filter, sort by date, rename into canonical
/// form. No aggregation; row count is preserved exactly.
fn passthrough(table: &RawTable, date_idx: usize, trips_idx: usize, temp_idx: usize) -> Vec<DailyRecord> {
    let mut dropped = 0usize;
    let mut records = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let Some(date) = parse_date(cell(row, date_idx)) else {
            dropped += 1;
            continue;
        };
        records.push(DailyRecord {
            date,
            trip_count: parse_count(cell(row, trips_idx)).unwrap_or(0),
            avg_temp: parse_f64(cell(row, temp_idx)),
        });
    }
    if dropped > 0 {
        debug!(dropped, "dropped rows with unparseable dates");
    }
    // Stable sort: equal-date rows (malformed upstream) keep file order.
    records.sort_by_key(|record| record.date);
    records
}

#[derive(Default)]
struct DayAccum {
    trips: u64,
    temp_sum: f64,
    temp_count: u32,
}

/// Trip-level input: group by calendar date, count non-null trip ids,
/// average the parseable temperature readings per group.
fn aggregate(table: &RawTable, date_idx: usize, id_idx: usize, temp_idx: usize) -> Vec<DailyRecord> {
    let mut days: BTreeMap<NaiveDate, DayAccum> = BTreeMap::new();
    let mut dropped = 0usize;
    for row in &table.rows {
        let Some(date) = parse_date(cell(row, date_idx)) else {
            dropped += 1;
            continue;
        };
        let day = days.entry(date).or_default();
        if !cell(row, id_idx).is_empty() {
            day.trips += 1;
        }
        if let Some(temp) = parse_f64(cell(row, temp_idx)) {
            day.temp_sum += temp;
            day.temp_count += 1;
        }
    }
    if dropped > 0 {
        debug!(dropped, "dropped rows with unparseable dates");
    }
    days.into_iter()
        .map(|(date, day)| DailyRecord {
            date,
            trip_count: day.trips,
            // A day with no parseable reading is missing, never zero.
            avg_temp: (day.temp_count > 0).then(|| day.temp_sum / f64::from(day.temp_count)),
        })
        .collect()
}
