//! Record types for the two tables in the climate store.
//!
//! The schema is fixed, so both tables are declared here rather than
//! discovered from the database at runtime.

use rusqlite::Row;
use serde::{Deserialize, Serialize};

/// A weather-observation site, one row of the `station` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Station code, e.g. "USC00519281"
    pub station: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

impl Station {
    /// Map a `SELECT station, name, latitude, longitude, elevation` row
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            station: row.get(0)?,
            name: row.get(1)?,
            latitude: row.get(2)?,
            longitude: row.get(3)?,
            elevation: row.get(4)?,
        })
    }
}

/// One daily observation, one row of the `measurement` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Code of the owning station
    pub station: String,
    /// Observation date as ISO `YYYY-MM-DD` text
    pub date: String,
    /// Precipitation, absent on some days
    pub prcp: Option<f64>,
    /// Observed temperature
    pub tobs: f64,
}

impl Measurement {
    /// Map a `SELECT station, date, prcp, tobs` row
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            station: row.get(0)?,
            date: row.get(1)?,
            prcp: row.get(2)?,
            tobs: row.get(3)?,
        })
    }
}

/// Minimum, average and maximum temperature over a date range.
///
/// All three are `None` when no rows fall inside the range.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TemperatureStats {
    pub min: Option<f64>,
    pub avg: Option<f64>,
    pub max: Option<f64>,
}

impl TemperatureStats {
    /// Whether the range matched no rows
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.avg.is_none() && self.max.is_none()
    }
}

/// Row counts and date bounds of the loaded store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSummary {
    pub station_count: usize,
    pub measurement_count: usize,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
}
