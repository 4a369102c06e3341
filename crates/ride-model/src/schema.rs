//! Schema vocabulary: recognized upstream naming conventions.
//!
//! Upstream exports arrive in a handful of known shapes. The column names
//! below are the full vocabulary the normalizer matches against; resolution
//! is by exact, case-sensitive header match only.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The mandatory date-bearing column. Every recognized shape carries it.
pub const DATE_COLUMN: &str = "date";

/// Start-station column shared by the trip-level exports and the pre-ranked
/// popularity export.
pub const STATION_COLUMN: &str = "start_station_name";

/// Trip total column in the pre-ranked popularity export.
pub const STATION_VALUE_COLUMN: &str = "value";

/// Rider-type column used for the optional row filter.
pub const RIDER_TYPE_COLUMN: &str = "member_casual";

/// A recognized schema variant, in resolution priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SchemaVariant {
    /// Pre-aggregated daily export: `trip_count` + `avgTemp`.
    DailyCounts,
    /// Pre-aggregated daily export, alternate naming: `trips` + `avg_temp`.
    DailyCountsAlt,
    /// One row per trip; counts and means are derived by grouping on date.
    TripLevel,
}

impl SchemaVariant {
    /// All variants, in the order the resolver tries them.
    pub const ALL: [SchemaVariant; 3] = [
        SchemaVariant::DailyCounts,
        SchemaVariant::DailyCountsAlt,
        SchemaVariant::TripLevel,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SchemaVariant::DailyCounts => "daily-counts",
            SchemaVariant::DailyCountsAlt => "daily-counts-alt",
            SchemaVariant::TripLevel => "trip-level",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SchemaVariant::DailyCounts => {
                "one row per day with `trip_count` and `avgTemp`; passed through"
            }
            SchemaVariant::DailyCountsAlt => {
                "one row per day with `trips` and `avg_temp`; passed through"
            }
            SchemaVariant::TripLevel => {
                "one row per trip; grouped by date, counting trip ids and averaging temperature"
            }
        }
    }
}

impl fmt::Display for SchemaVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A candidate-column search performed during trip-level resolution.
///
/// Each search walks its candidate list in order and selects the first name
/// present in the table, even when a later candidate also exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SchemaSearch {
    TripId,
    Temperature,
    Station,
}

impl SchemaSearch {
    /// Candidate column names, in fallback priority order.
    pub fn candidates(self) -> &'static [&'static str] {
        match self {
            SchemaSearch::TripId => &["ride_id", "started_at"],
            SchemaSearch::Temperature => &["TAVG", "avgTemp", "avg_temp"],
            SchemaSearch::Station => &[STATION_COLUMN],
        }
    }
}

impl fmt::Display for SchemaSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SchemaSearch::TripId => "trip identifier",
            SchemaSearch::Temperature => "temperature",
            SchemaSearch::Station => "start station",
        };
        f.write_str(label)
    }
}
