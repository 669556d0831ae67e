//! Raw weather sample entity

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single raw forecast point at sub-daily granularity (typically 3-hourly)
///
/// Produced by the weather integration from upstream JSON, consumed only by
/// the daily aggregator. Never mutated or persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSample {
    /// When this sample applies
    pub timestamp: DateTime<Utc>,
    /// Instantaneous temperature
    pub temperature: f64,
    /// Minimum temperature for this sample's window
    pub temperature_min: f64,
    /// Maximum temperature for this sample's window
    pub temperature_max: f64,
    /// Free-text condition description
    pub description: String,
    /// Relative humidity in percent, when reported
    pub humidity: Option<u8>,
}

impl WeatherSample {
    /// Calendar date of this sample, used as the aggregation grouping key
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }
}
