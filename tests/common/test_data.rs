//! Test data generation utilities.
//!
//! Builds small SQLite stores with the same schema as the Hawaii climate
//! dataset and hand-picked rows, so expected query results can be worked
//! out by hand.

use rusqlite::{params, Connection};
use std::path::Path;

type Result<T> = std::result::Result<T, rusqlite::Error>;

/// Busiest station in [`create_hawaii_store`]
pub const MOST_ACTIVE_STATION: &str = "USC00519281";

/// Latest date in [`create_hawaii_store`]
pub const LAST_DATE: &str = "2017-08-23";

/// `LAST_DATE` minus 365 days
pub const ONE_YEAR_BEFORE: &str = "2016-08-23";

/// (code, name, latitude, longitude, elevation)
pub const STATIONS: &[(&str, &str, f64, f64, f64)] = &[
    ("USC00519397", "WAIKIKI 717.2, HI US", 21.2716, -157.8168, 3.0),
    ("USC00513117", "KANEOHE 838.1, HI US", 21.4234, -157.8015, 14.6),
    ("USC00519281", "WAIHEE 837.5, HI US", 21.45167, -157.84889, 32.9),
    ("USC00517948", "PEARL CITY, HI US", 21.3934, -157.9751, 11.9),
];

/// (station, date, prcp, tobs); PEARL CITY has no measurements
pub const MEASUREMENTS: &[(&str, &str, Option<f64>, f64)] = &[
    ("USC00519281", "2016-08-22", Some(0.40), 75.0),
    ("USC00519281", "2016-08-23", Some(1.79), 77.0),
    ("USC00519397", "2016-08-23", Some(0.00), 81.0),
    ("USC00513117", "2016-08-23", Some(0.15), 76.0),
    ("USC00513117", "2016-08-24", Some(0.05), 80.0),
    ("USC00519281", "2016-12-25", None, 70.0),
    ("USC00519397", "2017-02-14", Some(0.00), 66.0),
    ("USC00519281", "2017-04-01", Some(0.02), 72.0),
    ("USC00519281", "2017-08-18", Some(0.06), 79.0),
    ("USC00519397", "2017-08-22", Some(0.00), 82.0),
    ("USC00519281", "2017-08-23", Some(0.00), 76.0),
    ("USC00519397", "2017-08-23", None, 81.0),
];

/// Measurement rows with `start <= date <= end`
pub fn measurements_between<'a>(
    start: &'a str,
    end: &'a str,
) -> impl Iterator<Item = &'static (&'static str, &'static str, Option<f64>, f64)> + 'a {
    MEASUREMENTS
        .iter()
        .filter(move |(_, date, _, _)| *date >= start && *date <= end)
}

/// Creates the two-table store at `path`
pub fn create_hawaii_store(path: &Path) -> Result<()> {
    let mut conn = Connection::open(path)?;

    conn.execute_batch(
        "CREATE TABLE station (
            id INTEGER PRIMARY KEY,
            station TEXT,
            name TEXT,
            latitude FLOAT,
            longitude FLOAT,
            elevation FLOAT
        );
        CREATE TABLE measurement (
            id INTEGER PRIMARY KEY,
            station TEXT,
            date TEXT,
            prcp FLOAT,
            tobs FLOAT
        );",
    )?;

    let tx = conn.transaction()?;
    for (code, name, latitude, longitude, elevation) in STATIONS {
        tx.execute(
            "INSERT INTO station (station, name, latitude, longitude, elevation)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![code, name, latitude, longitude, elevation],
        )?;
    }
    for (station, date, prcp, tobs) in MEASUREMENTS {
        tx.execute(
            "INSERT INTO measurement (station, date, prcp, tobs) VALUES (?1, ?2, ?3, ?4)",
            params![station, date, prcp, tobs],
        )?;
    }
    tx.commit()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_shape() {
        let last = MEASUREMENTS.iter().map(|m| m.1).max().unwrap();
        assert_eq!(last, LAST_DATE);
        assert_eq!(measurements_between(ONE_YEAR_BEFORE, LAST_DATE).count(), 11);
    }
}
