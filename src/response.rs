//! JSON shapes returned by the API.
//!
//! Precipitation and tobs rows become arrays of single-key objects, one per
//! row, so rows that share a key (the same date reported by two stations, or
//! every row of one station) all survive serialization.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::TemperatureStats;
use crate::state::ReferenceDates;

/// One `{key: value}` object per row, in row order
pub fn keyed_rows<K, V>(rows: impl IntoIterator<Item = (K, V)>) -> Vec<Value>
where
    K: Into<String>,
    V: Into<Value>,
{
    rows.into_iter()
        .map(|(key, value)| {
            let mut object = Map::with_capacity(1);
            object.insert(key.into(), value.into());
            Value::Object(object)
        })
        .collect()
}

/// `[{date: prcp}, ...]`, `prcp` is `null` where the store has none
pub fn precipitation_json(rows: Vec<(String, Option<f64>)>) -> Vec<Value> {
    keyed_rows(rows)
}

/// `[{station: tobs}, ...]`
pub fn tobs_json(rows: Vec<(String, f64)>) -> Vec<Value> {
    keyed_rows(rows)
}

/// Aggregate temperatures as served by the temp routes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TempStatsResponse {
    #[serde(rename = "Min Temp")]
    pub min: Option<f64>,
    #[serde(rename = "Avg Temp")]
    pub avg: Option<f64>,
    #[serde(rename = "Max Temp")]
    pub max: Option<f64>,
}

impl From<TemperatureStats> for TempStatsResponse {
    fn from(stats: TemperatureStats) -> Self {
        Self {
            min: stats.min,
            avg: stats.avg,
            max: stats.max,
        }
    }
}

/// The single-element array the temp routes return
pub fn temp_stats_json(stats: TemperatureStats) -> Vec<TempStatsResponse> {
    vec![stats.into()]
}

/// HTML index listing the routes
pub fn index_html(dates: &ReferenceDates) -> String {
    format!(
        "Available Routes for Hawaii Weather Data:<br/><br/>\
         -- Daily Precipitation Totals for Last Year: \
         <a href=\"/api/v1.0/precipitation\">/api/v1.0/precipitation</a><br/>\
         -- Active Weather Stations: \
         <a href=\"/api/v1.0/stations\">/api/v1.0/stations</a><br/>\
         -- Daily Temperature Observations of the Most Active Station for Last Year: \
         <a href=\"/api/v1.0/tobs\">/api/v1.0/tobs</a><br/>\
         -- Min, Average &amp; Max Temperatures for Date Range (yyyy-mm-dd): \
         /api/v1.0/temp/&lt;start&gt;/&lt;end&gt;<br/>\
         NOTE: If no end-date is provided, the temp api calculates stats through {}<br/>",
        dates.one_year_before_iso()
    )
}
