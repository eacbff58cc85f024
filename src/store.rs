//! Read-only query layer over the SQLite climate store.
//!
//! Every query takes a borrowed [`Connection`]; [`Store::run`] opens one per
//! call on the blocking pool and drops it when the query returns, whether it
//! succeeded or not. Dates are ISO `YYYY-MM-DD` text, so range filters are
//! plain string comparisons.

use rusqlite::{params, Connection, OpenFlags, OptionalExtension};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{ClimateError, Result};
use crate::models::{Measurement, Station, StoreSummary, TemperatureStats};

/// Handle to the store file; cheap to clone, holds no open connection
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Create a handle after checking the file exists
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.exists() {
            return Err(ClimateError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database file not found: {}", path.display()),
            )));
        }
        Ok(Self { path })
    }

    /// Path of the underlying SQLite file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flags for every store connection; paths are never parsed as URIs
    pub fn open_flags() -> OpenFlags {
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX
    }

    /// Open a fresh read-only connection
    pub fn open(&self) -> Result<Connection> {
        let conn = Connection::open_with_flags(&self.path, Self::open_flags())?;
        debug!(path = %self.path.display(), "Opened read-only store connection");
        Ok(conn)
    }

    /// Run `f` against a connection scoped to this call, off the async runtime
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let store = self.clone();
        tokio::task::spawn_blocking(move || {
            let conn = store.open()?;
            f(&conn)
        })
        .await
        .map_err(|e| ClimateError::Server {
            message: format!("Store task failed: {}", e),
        })?
    }
}

/// (date, precipitation) for every row on or after `start_date`, all stations
pub fn precipitation_since(
    conn: &Connection,
    start_date: &str,
) -> Result<Vec<(String, Option<f64>)>> {
    let mut stmt = conn.prepare("SELECT date, prcp FROM measurement WHERE date >= ?1")?;
    let rows = stmt
        .query_map(params![start_date], |row| Ok((row.get(0)?, row.get(1)?)))?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
}

/// Distinct station codes known to either table
pub fn list_stations(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt =
        conn.prepare("SELECT station FROM station UNION SELECT station FROM measurement")?;
    let rows = stmt
        .query_map([], |row| row.get(0))?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
}

/// Full station records, in table order
pub fn station_records(conn: &Connection) -> Result<Vec<Station>> {
    let mut stmt =
        conn.prepare("SELECT station, name, latitude, longitude, elevation FROM station")?;
    let rows = stmt
        .query_map([], Station::from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
}

/// Most recent `limit` measurements, newest first, same-day rows by station
pub fn latest_measurements(conn: &Connection, limit: usize) -> Result<Vec<Measurement>> {
    let mut stmt = conn.prepare(
        "SELECT station, date, prcp, tobs FROM measurement ORDER BY date DESC, station LIMIT ?1",
    )?;
    let rows = stmt
        .query_map(params![limit as i64], Measurement::from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
}

/// Station with the most measurement rows, and that row count.
///
/// Exact ties resolve to whichever station SQLite emits first under the
/// descending count ordering.
pub fn most_active_station(conn: &Connection) -> Result<Option<(String, usize)>> {
    let station = conn
        .query_row(
            "SELECT station, COUNT(station) FROM measurement \
             GROUP BY station ORDER BY COUNT(station) DESC LIMIT 1",
            [],
            |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?)),
        )
        .optional()?;
    Ok(station.map(|(code, count)| (code, count as usize)))
}

/// (station, temperature) rows of one station on or after `start_date`
pub fn station_temps_since(
    conn: &Connection,
    station: &str,
    start_date: &str,
) -> Result<Vec<(String, f64)>> {
    let mut stmt = conn.prepare(
        "SELECT station, tobs FROM measurement WHERE station = ?1 AND date >= ?2",
    )?;
    let rows = stmt
        .query_map(params![station, start_date], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
}

/// Temperatures of the most active station on or after `start_date`.
///
/// Empty when the measurement table has no rows at all.
pub fn most_active_station_temps(
    conn: &Connection,
    start_date: &str,
) -> Result<Vec<(String, f64)>> {
    match most_active_station(conn)? {
        Some((station, count)) => {
            debug!(station = %station, count = count, "Most active station");
            station_temps_since(conn, &station, start_date)
        }
        None => Ok(Vec::new()),
    }
}

/// Min/avg/max temperature over `start_date <= date <= end_date`
pub fn temperature_stats(
    conn: &Connection,
    start_date: &str,
    end_date: &str,
) -> Result<TemperatureStats> {
    let stats = conn.query_row(
        "SELECT MIN(tobs), AVG(tobs), MAX(tobs) FROM measurement \
         WHERE date >= ?1 AND date <= ?2",
        params![start_date, end_date],
        |row| {
            Ok(TemperatureStats {
                min: row.get(0)?,
                avg: row.get(1)?,
                max: row.get(2)?,
            })
        },
    )?;
    Ok(stats)
}

/// Latest observation date in the store, `None` for an empty table
pub fn most_recent_date(conn: &Connection) -> Result<Option<String>> {
    let date = conn.query_row("SELECT MAX(date) FROM measurement", [], |row| row.get(0))?;
    Ok(date)
}

/// Row counts and date range, for startup logging and the heartbeat
pub fn summary(conn: &Connection) -> Result<StoreSummary> {
    let station_count: i64 =
        conn.query_row("SELECT COUNT(*) FROM station", [], |row| row.get(0))?;
    let (measurement_count, first_date, last_date) = conn.query_row(
        "SELECT COUNT(*), MIN(date), MAX(date) FROM measurement",
        [],
        |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, Option<String>>(1)?,
                row.get::<_, Option<String>>(2)?,
            ))
        },
    )?;

    Ok(StoreSummary {
        station_count: station_count as usize,
        measurement_count: measurement_count as usize,
        first_date,
        last_date,
    })
}
