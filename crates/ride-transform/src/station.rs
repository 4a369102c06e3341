//! Start-station popularity ranking.

use std::collections::BTreeMap;

use tracing::debug;

use ride_ingest::RawTable;
use ride_model::{
    NormalizeError, Result, STATION_COLUMN, STATION_VALUE_COLUMN, SchemaSearch, StationCount,
};

use crate::normalize::cell;
use crate::numeric::parse_count;

/// Ranks start stations by trip count, keeping at most `top` entries.
///
/// Two shapes are recognized, in priority order:
/// 1. a pre-ranked export carrying `start_station_name` + `value`, which is
///    passed through in file order;
/// 2. a trip-level table, where rows are counted per station and ordered by
///    count descending, then name ascending.
pub fn rank_stations(table: &RawTable, top: usize) -> Result<Vec<StationCount>> {
    if let (Some(station_idx), Some(value_idx)) = (
        table.column_index(STATION_COLUMN),
        table.column_index(STATION_VALUE_COLUMN),
    ) {
        debug!("ranking from pre-ranked station export");
        return Ok(table
            .rows
            .iter()
            .take(top)
            .map(|row| StationCount {
                station: cell(row, station_idx).to_string(),
                trips: parse_count(cell(row, value_idx)).unwrap_or(0),
            })
            .collect());
    }

    let station_idx =
        table
            .column_index(STATION_COLUMN)
            .ok_or_else(|| NormalizeError::SchemaMismatch {
                search: SchemaSearch::Station,
                columns: table.headers.clone(),
            })?;
    debug!("ranking from trip-level rows");
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for row in &table.rows {
        let station = cell(row, station_idx);
        if station.is_empty() {
            continue;
        }
        *counts.entry(station).or_insert(0) += 1;
    }
    let mut ranked: Vec<StationCount> = counts
        .into_iter()
        .map(|(station, trips)| StationCount {
            station: station.to_string(),
            trips,
        })
        .collect();
    ranked.sort_by(|a, b| b.trips.cmp(&a.trips).then_with(|| a.station.cmp(&b.station)));
    ranked.truncate(top);
    Ok(ranked)
}
