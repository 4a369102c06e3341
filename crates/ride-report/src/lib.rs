//! Terminal tables and advisories for normalized ridership data.

use std::collections::BTreeMap;

use chrono::Weekday;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use ride_model::{ColumnHint, CoverageGap, DailyRecord, DatasetSummary, StationCount, WeekdayCount};

/// Daily series table: date, trips, average temperature, with a totals row.
pub fn daily_table(records: &[DailyRecord]) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        header_cell("Date"),
        header_cell("Trips"),
        header_cell("Avg Temp"),
    ]);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    let mut total_trips = 0u64;
    for record in records {
        total_trips += record.trip_count;
        table.add_row(vec![
            Cell::new(record.date.format("%Y-%m-%d")),
            Cell::new(record.trip_count),
            temperature_cell(record.avg_temp),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_trips).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    table
}

/// Station ranking table.
pub fn station_table(stations: &[StationCount]) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Start Station"),
        header_cell("Trips"),
    ]);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for (rank, station) in stations.iter().enumerate() {
        table.add_row(vec![
            dim_cell(rank + 1),
            Cell::new(&station.station),
            Cell::new(station.trips),
        ]);
    }
    table
}

/// Day-of-week profile table, Monday through Sunday.
pub fn weekday_table(profile: &[WeekdayCount]) -> Table {
    let mut table = new_table();
    table.set_header(vec![header_cell("Day"), header_cell("Trips")]);
    align_column(&mut table, 1, CellAlignment::Right);
    for entry in profile {
        table.add_row(vec![
            Cell::new(weekday_name(entry.weekday)),
            Cell::new(entry.trips),
        ]);
    }
    table
}

/// Headline figures table.
pub fn summary_table(summary: &DatasetSummary) -> Table {
    let mut table = new_table();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Rows"), Cell::new(summary.rows)]);
    table.add_row(vec![
        Cell::new("Unique start stations"),
        count_or_dash(summary.unique_start_stations),
    ]);
    table.add_row(vec![
        Cell::new("Avg trip minutes"),
        float_or_dash(summary.avg_trip_minutes),
    ]);
    table.add_row(vec![
        Cell::new("Avg temperature"),
        float_or_dash(summary.avg_temperature),
    ]);
    table
}

/// Column hints table for the inspect command.
pub fn hints_table(hints: &BTreeMap<String, ColumnHint>) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Numeric"),
        header_cell("Unique"),
        header_cell("Null"),
    ]);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for (name, hint) in hints {
        table.add_row(vec![
            Cell::new(name),
            if hint.is_numeric {
                Cell::new("yes").fg(Color::Green)
            } else {
                dim_cell("no")
            },
            Cell::new(format!("{:.0}%", hint.unique_ratio * 100.0)),
            Cell::new(format!("{:.0}%", hint.null_ratio * 100.0)),
        ]);
    }
    table
}

/// One-line advisory describing a temperature coverage gap.
pub fn coverage_advisory(gap: &CoverageGap) -> String {
    match (gap.temperature_end, gap.gap_days()) {
        (Some(end), Some(days)) => format!(
            "temperature coverage ends {end}, {days} day(s) before the series end {series_end}",
            series_end = gap.series_end
        ),
        _ => format!(
            "no temperature readings anywhere in the series (ends {})",
            gap.series_end
        ),
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn temperature_cell(temp: Option<f64>) -> Cell {
    match temp {
        Some(value) => Cell::new(format!("{value:.1}")),
        None => dim_cell("-"),
    }
}

fn count_or_dash(value: Option<usize>) -> Cell {
    match value {
        Some(count) => Cell::new(count),
        None => dim_cell("-"),
    }
}

fn float_or_dash(value: Option<f64>) -> Cell {
    match value {
        Some(float) => Cell::new(format!("{float:.1}")),
        None => dim_cell("-"),
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
