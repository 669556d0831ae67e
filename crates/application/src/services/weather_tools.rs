//! Weather tool operations
//!
//! The three user-facing operations exposed by the server. Each returns a
//! plain-text answer and renders its own failures as text, so transport
//! layers never have to translate application errors.

use std::sync::Arc;

use tracing::{error, info, instrument};

use crate::error::ApplicationError;
use crate::ports::{Units, WeatherPort};
use crate::services::{ForecastService, InsightService};

/// Facade over the forecast and insight services for tool-style callers
pub struct WeatherToolService {
    weather: Arc<dyn WeatherPort>,
    forecasts: ForecastService,
    insights: InsightService,
    units: Units,
}

impl std::fmt::Debug for WeatherToolService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherToolService")
            .field("forecasts", &self.forecasts)
            .field("units", &self.units)
            .finish_non_exhaustive()
    }
}

impl WeatherToolService {
    /// Create the tool service
    pub fn new(
        weather: Arc<dyn WeatherPort>,
        forecasts: ForecastService,
        insights: InsightService,
        units: Units,
    ) -> Self {
        Self {
            weather,
            forecasts,
            insights,
            units,
        }
    }

    /// Current weather for a location, formatted for display
    #[instrument(skip(self))]
    pub async fn current_weather(&self, location: &str) -> String {
        info!("Getting current weather");
        match self.current_weather_inner(location).await {
            Ok(text) => text,
            Err(err) => {
                error!(error = %err, "Weather request failed");
                format!("Unable to get weather for {location}: {err}")
            }
        }
    }

    /// Multi-day forecast for a location, one line per day
    #[instrument(skip(self))]
    pub async fn weather_forecast(&self, location: &str) -> String {
        info!("Getting forecast");
        match self.weather_forecast_inner(location).await {
            Ok(text) => text,
            Err(err) => {
                error!(error = %err, "Forecast request failed");
                format!("Unable to get forecast for {location}: {err}")
            }
        }
    }

    /// Model-generated insights and recommendations for a location
    #[instrument(skip(self))]
    pub async fn weather_insights(&self, location: &str) -> String {
        info!("Getting weather insights");
        match self.weather_insights_inner(location).await {
            Ok(text) => text,
            Err(err) => {
                error!(error = %err, "Insights request failed");
                format!("Unable to generate insights for {location}: {err}")
            }
        }
    }

    async fn current_weather_inner(&self, location: &str) -> Result<String, ApplicationError> {
        let current = self.weather.current_conditions(location).await?;
        Ok(format!(
            "Current weather in {location}:\n\
             Temperature: {:.0}{}\n\
             Condition: {}\n\
             Humidity: {}%\n\
             Wind: {:.0} {}",
            current.temperature,
            self.units.temperature_suffix(),
            current.description,
            current.humidity,
            current.wind_speed,
            self.units.wind_speed_suffix(),
        ))
    }

    async fn weather_forecast_inner(&self, location: &str) -> Result<String, ApplicationError> {
        let summaries = self.forecasts.daily_summaries(location).await?;

        let mut text = format!("{}-day forecast for {location}:\n", self.forecasts.horizon());
        for day in &summaries {
            text.push_str(&format!(
                "\n{}: {:.0}°/{:.0}° - {}",
                day.date(),
                day.max_temperature(),
                day.min_temperature(),
                day.conditions_summary()
            ));
        }
        Ok(text)
    }

    async fn weather_insights_inner(&self, location: &str) -> Result<String, ApplicationError> {
        let current = self.weather.current_conditions(location).await?;
        let forecast = self
            .forecasts
            .assemble_with_current(&current, location)
            .await?;

        let narrative = self
            .insights
            .compose(location, &current, forecast.daily_summaries())
            .await;
        Ok(format!("Weather insights for {location}:\n{narrative}"))
    }
}
