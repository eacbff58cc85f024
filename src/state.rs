//! Application state management for climate-api.
//!
//! This module defines the shared state that is passed to all handlers: the
//! configuration, a handle to the store, and the reference dates computed
//! once while the application starts.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::{ClimateError, Result};
use crate::models::StoreSummary;
use crate::store::{self, Store};

/// Storage format of `measurement.date`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Dates the default API ranges are anchored to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceDates {
    /// Latest observation date in the store
    pub most_recent: NaiveDate,
    /// `most_recent` minus 365 days
    pub one_year_before: NaiveDate,
}

impl ReferenceDates {
    /// Derive the reference dates from the latest stored date
    pub fn from_most_recent(date: &str) -> Result<Self> {
        let most_recent = NaiveDate::parse_from_str(date, DATE_FORMAT)?;
        Ok(Self {
            most_recent,
            one_year_before: most_recent - Duration::days(365),
        })
    }

    /// `one_year_before` in the store's text format
    pub fn one_year_before_iso(&self) -> String {
        self.one_year_before.format(DATE_FORMAT).to_string()
    }

    /// `most_recent` in the store's text format
    pub fn most_recent_iso(&self) -> String {
        self.most_recent.format(DATE_FORMAT).to_string()
    }
}

/// The main application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Configuration
    pub config: Config,
    /// Store handle, connections are opened per request
    pub store: Store,
    /// Computed at startup, never refreshed
    pub dates: ReferenceDates,
    /// Counts and date range observed at startup
    pub summary: StoreSummary,
}

impl AppState {
    /// Create a new AppState
    pub fn new(config: Config, store: Store, dates: ReferenceDates, summary: StoreSummary) -> Self {
        Self {
            config,
            store,
            dates,
            summary,
        }
    }

    /// Open the configured store and compute the reference dates
    pub fn load(config: Config) -> Result<Self> {
        let store = Store::new(&config.store.database_path)?;
        let conn = store.open()?;

        let summary = store::summary(&conn)?;
        let most_recent = store::most_recent_date(&conn)?.ok_or_else(|| {
            ClimateError::DataNotFound {
                message: format!(
                    "No measurements found in {}",
                    config.store.database_path.display()
                ),
            }
        })?;
        let dates = ReferenceDates::from_most_recent(&most_recent)?;

        info!(
            most_recent = %dates.most_recent,
            one_year_before = %dates.one_year_before,
            "Computed reference dates"
        );

        Ok(Self::new(config, store, dates, summary))
    }

    /// Load and wrap in an Arc for shared ownership
    pub fn load_shared(config: Config) -> Result<Arc<Self>> {
        Ok(Arc::new(Self::load(config)?))
    }

    /// Validate that the application state is consistent and ready for use
    pub fn validate(&self) -> Result<()> {
        // Still servable: station codes also come from the measurement table
        if self.summary.station_count == 0 {
            warn!("Station table is empty");
        }

        if self.summary.last_date.as_deref() != Some(self.dates.most_recent_iso().as_str()) {
            return Err(ClimateError::DataNotFound {
                message: format!(
                    "Reference date {} does not match the store's last date {:?}",
                    self.dates.most_recent, self.summary.last_date
                ),
            });
        }

        Ok(())
    }
}
