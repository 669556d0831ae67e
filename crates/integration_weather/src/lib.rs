//! OpenWeatherMap integration
//!
//! Client for the OpenWeatherMap API (<https://openweathermap.org/api>).
//! Provides current conditions and the 5-day/3-hour forecast feed. An API
//! key is required and is injected at construction time.

pub mod client;
pub mod models;

pub use client::{OpenWeatherMapClient, WeatherClient, WeatherConfig, WeatherError};
pub use models::{
    City, ConditionEntry, Coord, CurrentWeatherResponse, ForecastEntry, ForecastResponse,
    MainReadings, WeatherUnits, Wind,
};
