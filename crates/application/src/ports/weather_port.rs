//! Weather provider port
//!
//! Defines the interface for weather data retrieval. Implementations must
//! keep "unknown location" distinguishable from "service unavailable" when
//! mapping provider failures.

use async_trait::async_trait;
use domain::WeatherSample;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Unit system used for temperatures and wind speeds
///
/// One system is used consistently across the display and insights paths;
/// the choice is a configuration option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Fahrenheit and miles per hour
    #[default]
    Imperial,
    /// Celsius and metres per second
    Metric,
}

impl Units {
    /// Temperature unit suffix for display
    #[must_use]
    pub const fn temperature_suffix(&self) -> &'static str {
        match self {
            Self::Imperial => "°F",
            Self::Metric => "°C",
        }
    }

    /// Wind speed unit suffix for display
    ///
    /// Matches what the provider reports per unit system: miles per hour
    /// for imperial, metres per second for metric. Wind values are passed
    /// through unconverted, so the label must follow the provider.
    #[must_use]
    pub const fn wind_speed_suffix(&self) -> &'static str {
        match self {
            Self::Imperial => "mph",
            Self::Metric => "m/s",
        }
    }
}

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Imperial => write!(f, "imperial"),
            Self::Metric => write!(f, "metric"),
        }
    }
}

/// Current weather conditions for a resolved location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Location name as resolved by the provider
    pub location_name: String,
    /// Resolved latitude in degrees
    pub latitude: f64,
    /// Resolved longitude in degrees
    pub longitude: f64,
    /// Current temperature
    pub temperature: f64,
    /// Apparent/feels-like temperature
    pub feels_like: f64,
    /// Weather condition description
    pub description: String,
    /// Relative humidity in percent (0-100)
    pub humidity: u8,
    /// Wind speed
    pub wind_speed: f64,
    /// Wind direction in degrees
    pub wind_direction: u16,
}

/// Port for weather provider operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Resolve a location string to its current conditions
    async fn current_conditions(
        &self,
        location: &str,
    ) -> Result<CurrentConditions, ApplicationError>;

    /// Fetch the raw sub-daily forecast samples for a location
    ///
    /// The returned sequence is time-ordered and spans at least the
    /// configured forecast horizon.
    async fn forecast_samples(
        &self,
        location: &str,
    ) -> Result<Vec<WeatherSample>, ApplicationError>;

    /// Check if the weather provider is available
    async fn is_available(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn WeatherPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn WeatherPort>();
    }

    #[test]
    fn units_suffixes() {
        assert_eq!(Units::Imperial.temperature_suffix(), "°F");
        assert_eq!(Units::Imperial.wind_speed_suffix(), "mph");
        assert_eq!(Units::Metric.temperature_suffix(), "°C");
        assert_eq!(Units::Metric.wind_speed_suffix(), "m/s");
    }

    #[test]
    fn units_default_is_imperial() {
        assert_eq!(Units::default(), Units::Imperial);
    }

    #[test]
    fn units_deserialize_lowercase() {
        let units: Units = serde_json::from_str("\"metric\"").expect("deserialize");
        assert_eq!(units, Units::Metric);
    }
}
