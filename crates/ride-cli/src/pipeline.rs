//! Load-and-normalize pipeline shared by the CLI commands.

use std::path::Path;

use anyhow::Result;
use tracing::{debug, warn};

use ride_ingest::{RawTable, read_csv_table};
use ride_model::{
    CoverageGap, DailyRecord, DatasetSummary, RIDER_TYPE_COLUMN, StationCount, WeekdayCount,
};
use ride_transform::{
    filter_rows, normalize, rank_stations, summarize, temperature_coverage, trips_by_weekday,
};

/// Everything the full report renders.
#[derive(Debug)]
pub struct ReportData {
    pub summary: DatasetSummary,
    pub records: Vec<DailyRecord>,
    pub coverage: Option<CoverageGap>,
    /// `None` when the trips file cannot supply a station ranking and no
    /// separate station export was given.
    pub stations: Option<Vec<StationCount>>,
    pub weekdays: Vec<WeekdayCount>,
}

/// Loads a trips file and applies the optional rider-type filter.
pub fn load_table(path: &Path, rider_types: &[String]) -> Result<RawTable> {
    let table = read_csv_table(path)?;
    if rider_types.is_empty() {
        return Ok(table);
    }
    let filtered = filter_rows(&table, RIDER_TYPE_COLUMN, rider_types);
    debug!(
        kept = filtered.rows.len(),
        total = table.rows.len(),
        "applied rider-type filter"
    );
    Ok(filtered)
}

/// Builds the full report from a loaded trips table.
///
/// An explicit station export must rank cleanly; without one, a trips file
/// that cannot supply a ranking just leaves the station section out.
pub fn build_report(
    trips: &RawTable,
    stations_source: Option<&RawTable>,
    top: usize,
) -> Result<ReportData> {
    let records = normalize(trips)?;
    let coverage = temperature_coverage(&records);
    if let Some(gap) = &coverage {
        warn!(series_end = %gap.series_end, "temperature series has a tail coverage gap");
    }
    let stations = match stations_source {
        Some(table) => Some(rank_stations(table, top)?),
        None => match rank_stations(trips, top) {
            Ok(ranked) => Some(ranked),
            Err(err) => {
                warn!(%err, "station ranking unavailable from trips file");
                None
            }
        },
    };
    let weekdays = trips_by_weekday(trips)?;
    Ok(ReportData {
        summary: summarize(trips),
        records,
        coverage,
        stations,
        weekdays,
    })
}
