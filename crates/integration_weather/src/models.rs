//! Response models for the OpenWeatherMap API

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Unit system requested from the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherUnits {
    /// Fahrenheit, miles per hour
    #[default]
    Imperial,
    /// Celsius, metres per second
    Metric,
}

impl WeatherUnits {
    /// Value for the `units` query parameter
    #[must_use]
    pub const fn query_value(&self) -> &'static str {
        match self {
            Self::Imperial => "imperial",
            Self::Metric => "metric",
        }
    }
}

/// Resolved coordinates
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

/// One entry in the `weather` array
#[derive(Debug, Clone, Deserialize)]
pub struct ConditionEntry {
    pub description: String,
}

/// The `main` block: temperatures and humidity
#[derive(Debug, Clone, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity: u8,
}

/// The `wind` block
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Wind {
    #[serde(default)]
    pub speed: f64,
    #[serde(default)]
    pub deg: u16,
}

/// Response body of the current weather endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeatherResponse {
    pub coord: Coord,
    pub weather: Vec<ConditionEntry>,
    pub main: MainReadings,
    #[serde(default)]
    pub wind: Wind,
    pub name: String,
}

impl CurrentWeatherResponse {
    /// Title-cased description of the leading condition, if any
    #[must_use]
    pub fn primary_description(&self) -> Option<String> {
        self.weather.first().map(|c| title_case(&c.description))
    }
}

/// One 3-hour slot in the forecast feed
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastEntry {
    /// Unix timestamp of the slot
    pub dt: i64,
    pub main: MainReadings,
    pub weather: Vec<ConditionEntry>,
    #[serde(default)]
    pub wind: Wind,
}

impl ForecastEntry {
    /// Slot timestamp as UTC, `None` for out-of-range values
    #[must_use]
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.dt, 0).single()
    }

    /// Title-cased description of the leading condition, if any
    #[must_use]
    pub fn primary_description(&self) -> Option<String> {
        self.weather.first().map(|c| title_case(&c.description))
    }
}

/// The `city` block of the forecast response
#[derive(Debug, Clone, Deserialize)]
pub struct City {
    pub name: String,
    pub coord: Coord,
}

/// Response body of the forecast endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub list: Vec<ForecastEntry>,
    pub city: City,
}

/// Title-case a provider description ("light rain" -> "Light Rain")
#[must_use]
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + chars.as_str()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
