//! Weather adapter - Implements `WeatherPort` using `integration_weather`
//!
//! Maps provider responses into application types and wraps calls in the
//! retry policy. "Unknown location" stays distinguishable from "service
//! unavailable" through the whole mapping.

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::{CurrentConditions, WeatherPort};
use async_trait::async_trait;
use domain::WeatherSample;
use integration_weather::{CurrentWeatherResponse, ForecastResponse, WeatherClient, WeatherError};
use tracing::{debug, instrument, warn};

use crate::retry::{RetryConfig, retry};

/// Adapter for the weather provider
pub struct WeatherAdapter {
    client: Arc<dyn WeatherClient>,
    retry: RetryConfig,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}

impl WeatherAdapter {
    /// Create a new adapter around a provider client
    pub fn new(client: Arc<dyn WeatherClient>, retry: RetryConfig) -> Self {
        Self { client, retry }
    }

    /// Map a provider error to the application error taxonomy
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::LocationNotFound(location) => {
                ApplicationError::LocationNotFound(location)
            },
            WeatherError::RateLimitExceeded => ApplicationError::RateLimited,
            WeatherError::ServiceUnavailable(e) => ApplicationError::WeatherUnavailable(e),
            WeatherError::ConnectionFailed(e) | WeatherError::RequestFailed(e) => {
                ApplicationError::WeatherUnavailable(e)
            },
            WeatherError::ParseError(e) => ApplicationError::Internal(e),
        }
    }

    /// Map the current weather response to application conditions
    fn map_current(current: CurrentWeatherResponse) -> CurrentConditions {
        let description = current.primary_description().unwrap_or_default();
        CurrentConditions {
            location_name: current.name,
            latitude: current.coord.lat,
            longitude: current.coord.lon,
            temperature: current.main.temp,
            feels_like: current.main.feels_like,
            description,
            humidity: current.main.humidity,
            wind_speed: current.wind.speed,
            wind_direction: current.wind.deg,
        }
    }

    /// Map the forecast feed to time-ordered samples
    ///
    /// Slots with out-of-range timestamps or no condition entry are
    /// dropped with a warning instead of failing the whole feed. An
    /// empty description would otherwise poison the daily condition
    /// summaries downstream.
    fn map_samples(forecast: ForecastResponse) -> Vec<WeatherSample> {
        forecast
            .list
            .into_iter()
            .filter_map(|entry| {
                let Some(timestamp) = entry.timestamp() else {
                    warn!(dt = entry.dt, "Dropping forecast slot with invalid timestamp");
                    return None;
                };
                let Some(description) = entry.primary_description() else {
                    warn!(dt = entry.dt, "Dropping forecast slot without condition entry");
                    return None;
                };
                Some(WeatherSample {
                    timestamp,
                    temperature: entry.main.temp,
                    temperature_min: entry.main.temp_min,
                    temperature_max: entry.main.temp_max,
                    description,
                    humidity: Some(entry.main.humidity),
                })
            })
            .collect()
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self))]
    async fn current_conditions(
        &self,
        location: &str,
    ) -> Result<CurrentConditions, ApplicationError> {
        let current = retry(&self.retry, || async {
            self.client.get_current(location).await.map_err(Self::map_error)
        })
        .await?;

        debug!(
            name = %current.name,
            temperature = current.main.temp,
            "Retrieved current weather"
        );

        Ok(Self::map_current(current))
    }

    #[instrument(skip(self))]
    async fn forecast_samples(
        &self,
        location: &str,
    ) -> Result<Vec<WeatherSample>, ApplicationError> {
        let forecast = retry(&self.retry, || async {
            self.client.get_forecast(location).await.map_err(Self::map_error)
        })
        .await?;

        debug!(slots = forecast.list.len(), "Retrieved forecast feed");

        Ok(Self::map_samples(forecast))
    }

    #[instrument(skip(self))]
    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}
