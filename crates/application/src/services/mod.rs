//! Application services
//!
//! - [`forecast_service`]: forecast assembly from raw provider samples
//! - [`insight_service`]: narrative generation with degraded fallback
//! - [`weather_tools`]: the three user-facing tool operations

mod forecast_service;
mod insight_service;
mod weather_tools;

pub use forecast_service::ForecastService;
pub use insight_service::InsightService;
pub use weather_tools::WeatherToolService;
