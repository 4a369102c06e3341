//! Command implementations.

use anyhow::Result;

use ride_cli::pipeline::{build_report, load_table};
use ride_ingest::{build_column_hints, read_csv_table};
use ride_model::SchemaVariant;
use ride_report::{
    coverage_advisory, daily_table, hints_table, station_table, summary_table, weekday_table,
};
use ride_transform::{normalize, rank_stations, resolve_schema, temperature_coverage};

use crate::cli::{ReportArgs, StationArgs, TableArgs};

pub fn run_report(args: &ReportArgs) -> Result<()> {
    let trips = load_table(&args.trips_csv, &args.rider_types)?;
    let stations_source = args
        .stations_csv
        .as_deref()
        .map(read_csv_table)
        .transpose()?;
    let report = build_report(&trips, stations_source.as_ref(), args.top)?;

    println!("Summary");
    println!("{}", summary_table(&report.summary));
    println!();
    println!("Daily trips vs temperature");
    println!("{}", daily_table(&report.records));
    if let Some(gap) = &report.coverage {
        println!("note: {}", coverage_advisory(gap));
    }
    if let Some(stations) = &report.stations {
        println!();
        println!("Top {} start stations", stations.len());
        println!("{}", station_table(stations));
    }
    println!();
    println!("Trips by day of week");
    println!("{}", weekday_table(&report.weekdays));
    Ok(())
}

pub fn run_daily(args: &TableArgs) -> Result<()> {
    let table = read_csv_table(&args.csv)?;
    let records = normalize(&table)?;
    println!("{}", daily_table(&records));
    if let Some(gap) = temperature_coverage(&records) {
        println!("note: {}", coverage_advisory(&gap));
    }
    Ok(())
}

pub fn run_stations(args: &StationArgs) -> Result<()> {
    let table = read_csv_table(&args.csv)?;
    let ranked = rank_stations(&table, args.top)?;
    println!("{}", station_table(&ranked));
    Ok(())
}

pub fn run_inspect(args: &TableArgs) -> Result<()> {
    let table = read_csv_table(&args.csv)?;
    println!("File: {}", args.csv.display());
    println!("Columns: {}", table.headers.len());
    println!("Rows: {}", table.rows.len());
    println!("{}", hints_table(&build_column_hints(&table)));
    match resolve_schema(&table) {
        Ok(resolved) => println!("Schema variant: {}", resolved.variant()),
        Err(err) => println!("Schema variant: none ({err})"),
    }
    Ok(())
}

pub fn run_variants() {
    for variant in SchemaVariant::ALL {
        println!("{:<18} {}", variant.name(), variant.description());
    }
}
