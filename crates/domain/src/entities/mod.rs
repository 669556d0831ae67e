//! Domain entities for weather data

mod daily_summary;
mod forecast;
mod weather_sample;

pub use daily_summary::DailySummary;
pub use forecast::Forecast;
pub use weather_sample::WeatherSample;
