//! Print a quick overview of a climate store file.

use anyhow::{bail, Context};
use clap::Parser;
use std::path::PathBuf;

use climate_api::store::{self, Store};
use climate_api::ReferenceDates;

#[derive(Parser, Debug)]
#[command(name = "inspect_store", about = "Summarize a climate SQLite store")]
struct Args {
    /// Path to the SQLite file
    #[arg(default_value = "Resources/hawaii.sqlite")]
    database: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let store = Store::new(&args.database)
        .with_context(|| format!("cannot open {}", args.database.display()))?;
    let conn = store.open()?;

    println!("Inspecting store: {}", store.path().display());

    let summary = store::summary(&conn)?;
    println!("\n=== TABLES ===");
    println!("  station     {} rows", summary.station_count);
    println!("  measurement {} rows", summary.measurement_count);

    let (Some(first), Some(last)) = (&summary.first_date, &summary.last_date) else {
        bail!("measurement table is empty");
    };
    let dates = ReferenceDates::from_most_recent(last)?;
    println!("\n=== DATES ===");
    println!("  first observation   {}", first);
    println!("  last observation    {}", last);
    println!("  one year before     {}", dates.one_year_before_iso());

    println!("\n=== STATIONS ===");
    for station in store::station_records(&conn)? {
        println!(
            "  {:<12} {:<40} lat={:>8.4} lon={:>9.4} elev={:>6.1}",
            station.station, station.name, station.latitude, station.longitude, station.elevation
        );
    }

    println!("\n=== LATEST MEASUREMENTS ===");
    for m in store::latest_measurements(&conn, 5)? {
        println!(
            "  {} {:<12} prcp={:<6} tobs={}",
            m.date,
            m.station,
            m.prcp.map_or_else(|| "null".to_string(), |p| p.to_string()),
            m.tobs
        );
    }

    if let Some((station, count)) = store::most_active_station(&conn)? {
        println!("\nMost active station: {} ({} rows)", station, count);
    }

    let stats = store::temperature_stats(&conn, &dates.one_year_before_iso(), last)?;
    println!(
        "Last year temperatures: min={:?} avg={:?} max={:?}",
        stats.min, stats.avg, stats.max
    );

    Ok(())
}
