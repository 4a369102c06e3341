//! Canonical output records.

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// One normalized day of ridership: the canonical output unit.
///
/// Produced in strictly ascending date order with no duplicate dates.
/// `avg_temp` is `None` when no temperature reading survived for the day;
/// missing is never represented as zero or a sentinel number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub trip_count: u64,
    pub avg_temp: Option<f64>,
}

/// One ranked start station with its trip total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationCount {
    pub station: String,
    pub trips: u64,
}

/// Trip total for one day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdayCount {
    pub weekday: Weekday,
    pub trips: u64,
}

/// Headline figures for a loaded dataset.
///
/// Each optional field is `None` when the backing column set is absent, so
/// a summary can always be produced for any table.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub rows: usize,
    pub unique_start_stations: Option<usize>,
    pub avg_trip_minutes: Option<f64>,
    pub avg_temperature: Option<f64>,
}

/// A tail portion of the date range where temperature data is absent while
/// trip data continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageGap {
    /// Last date with a non-missing temperature, `None` when the whole
    /// series is missing.
    pub temperature_end: Option<NaiveDate>,
    /// Last date of the series overall.
    pub series_end: NaiveDate,
}

impl CoverageGap {
    /// Number of trailing days without a temperature reading, `None` when
    /// the series never had one.
    pub fn gap_days(&self) -> Option<i64> {
        self.temperature_end
            .map(|end| (self.series_end - end).num_days())
    }
}
