//! Derived insights: weekday profile, dataset summary, row filtering.

use std::collections::BTreeSet;

use chrono::{Datelike, Weekday};

use ride_ingest::RawTable;
use ride_model::{
    DATE_COLUMN, DatasetSummary, NormalizeError, Result, STATION_COLUMN, SchemaSearch,
    WeekdayCount,
};

use crate::date::{parse_date, parse_datetime};
use crate::normalize::cell;
use crate::numeric::parse_f64;
use crate::schema::find_candidate;

const TRIP_MINUTES_COLUMN: &str = "trip_minutes";
const TRIP_START_COLUMN: &str = "started_at";
const TRIP_END_COLUMN: &str = "ended_at";

const WEEKDAY_ORDER: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Counts rows per day of week, Monday through Sunday.
///
/// All seven days are emitted, zero-filled. Rows with unparseable dates are
/// skipped, as in the daily normalization.
pub fn trips_by_weekday(table: &RawTable) -> Result<Vec<WeekdayCount>> {
    let date_idx = table
        .column_index(DATE_COLUMN)
        .ok_or_else(|| NormalizeError::MissingField {
            field: DATE_COLUMN,
            columns: table.headers.clone(),
        })?;
    let mut counts = [0u64; 7];
    for row in &table.rows {
        if let Some(date) = parse_date(cell(row, date_idx)) {
            counts[date.weekday().num_days_from_monday() as usize] += 1;
        }
    }
    Ok(WEEKDAY_ORDER
        .iter()
        .zip(counts)
        .map(|(&weekday, trips)| WeekdayCount { weekday, trips })
        .collect())
}

/// Produces headline figures for a table.
///
/// Never fails: each figure is `None` when its backing columns are absent,
/// so any loaded table can be summarized.
pub fn summarize(table: &RawTable) -> DatasetSummary {
    let unique_start_stations = table.column_index(STATION_COLUMN).map(|idx| {
        table
            .rows
            .iter()
            .map(|row| cell(row, idx))
            .filter(|station| !station.is_empty())
            .collect::<BTreeSet<_>>()
            .len()
    });
    let avg_temperature = find_candidate(table, SchemaSearch::Temperature).and_then(|idx| {
        average(
            table
                .rows
                .iter()
                .filter_map(|row| parse_f64(cell(row, idx))),
        )
    });
    DatasetSummary {
        rows: table.rows.len(),
        unique_start_stations,
        avg_trip_minutes: avg_trip_minutes(table),
        avg_temperature,
    }
}

/// Keeps only rows whose cell in `column` equals one of `keep`.
///
/// A table without the column is returned unchanged: the filter is disabled
/// rather than failing.
pub fn filter_rows(table: &RawTable, column: &str, keep: &[String]) -> RawTable {
    let Some(idx) = table.column_index(column) else {
        return table.clone();
    };
    RawTable {
        headers: table.headers.clone(),
        rows: table
            .rows
            .iter()
            .filter(|row| keep.iter().any(|value| value == cell(row, idx)))
            .cloned()
            .collect(),
    }
}

fn avg_trip_minutes(table: &RawTable) -> Option<f64> {
    if let Some(idx) = table.column_index(TRIP_MINUTES_COLUMN) {
        return average(
            table
                .rows
                .iter()
                .filter_map(|row| parse_f64(cell(row, idx))),
        );
    }
    let start_idx = table.column_index(TRIP_START_COLUMN)?;
    let end_idx = table.column_index(TRIP_END_COLUMN)?;
    average(table.rows.iter().filter_map(|row| {
        let start = parse_datetime(cell(row, start_idx))?;
        let end = parse_datetime(cell(row, end_idx))?;
        let minutes = (end - start).num_seconds() as f64 / 60.0;
        // Clock skew in the exports occasionally yields negative durations.
        (minutes >= 0.0).then_some(minutes)
    }))
}

fn average(values: impl Iterator<Item = f64>) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0u32;
    for value in values {
        sum += value;
        count += 1;
    }
    (count > 0).then(|| sum / f64::from(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> RawTable {
        RawTable {
            headers: headers.iter().map(|h| (*h).to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|v| (*v).to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn weekday_profile_is_zero_filled_monday_first() {
        // 2022-01-03 was a Monday.
        let input = table(
            &["date"],
            &[&["2022-01-03"], &["2022-01-03"], &["2022-01-09"]],
        );
        let profile = trips_by_weekday(&input).expect("profile");
        assert_eq!(profile.len(), 7);
        assert_eq!(profile[0].weekday, Weekday::Mon);
        assert_eq!(profile[0].trips, 2);
        assert_eq!(profile[6].weekday, Weekday::Sun);
        assert_eq!(profile[6].trips, 1);
        assert_eq!(profile[3].trips, 0);
    }

    #[test]
    fn weekday_profile_requires_date_column() {
        let err = trips_by_weekday(&table(&["ride_id"], &[])).expect_err("no date");
        assert!(matches!(err, NormalizeError::MissingField { field: "date", .. }));
    }

    #[test]
    fn summary_derives_trip_minutes_from_timestamps() {
        let input = table(
            &["started_at", "ended_at", "start_station_name", "TAVG"],
            &[
                &["2022-01-01 08:00:00", "2022-01-01 08:30:00", "A", "4.0"],
                &["2022-01-01 09:00:00", "2022-01-01 09:10:00", "B", "6.0"],
                // ended before started; skipped
                &["2022-01-01 10:00:00", "2022-01-01 09:00:00", "A", ""],
            ],
        );
        let summary = summarize(&input);
        assert_eq!(summary.rows, 3);
        assert_eq!(summary.unique_start_stations, Some(2));
        assert_eq!(summary.avg_trip_minutes, Some(20.0));
        assert_eq!(summary.avg_temperature, Some(5.0));
    }

    #[test]
    fn summary_prefers_precomputed_trip_minutes() {
        let input = table(
            &["trip_minutes", "started_at", "ended_at"],
            &[&["12.0", "2022-01-01 08:00:00", "2022-01-01 10:00:00"]],
        );
        assert_eq!(summarize(&input).avg_trip_minutes, Some(12.0));
    }

    #[test]
    fn summary_of_alien_table_is_all_none() {
        let summary = summarize(&table(&["foo", "bar"], &[&["1", "2"]]));
        assert_eq!(summary.rows, 1);
        assert_eq!(summary.unique_start_stations, None);
        assert_eq!(summary.avg_trip_minutes, None);
        assert_eq!(summary.avg_temperature, None);
    }

    #[test]
    fn filter_keeps_matching_rows() {
        let input = table(
            &["ride_id", "member_casual"],
            &[&["a", "member"], &["b", "casual"], &["c", "member"]],
        );
        let filtered = filter_rows(&input, "member_casual", &["member".to_string()]);
        assert_eq!(filtered.rows.len(), 2);
    }

    #[test]
    fn filter_without_column_is_disabled() {
        let input = table(&["ride_id"], &[&["a"], &["b"]]);
        let filtered = filter_rows(&input, "member_casual", &["member".to_string()]);
        assert_eq!(filtered.rows.len(), 2);
    }
}
