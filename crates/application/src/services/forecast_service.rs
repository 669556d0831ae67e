//! Forecast assembly service
//!
//! Orchestrates the weather provider and the pure daily aggregator into a
//! bounded [`Forecast`].

use std::sync::Arc;

use domain::{DailySummary, Forecast, GeoLocation, aggregate_daily};
use tracing::{debug, instrument};

use crate::error::ApplicationError;
use crate::ports::{CurrentConditions, WeatherPort};

/// Default narrative style tag attached to assembled forecasts
const DEFAULT_STYLE: &str = "professional";

/// Service that assembles bounded forecasts from raw provider samples
pub struct ForecastService {
    weather: Arc<dyn WeatherPort>,
    horizon: usize,
    style: String,
}

impl std::fmt::Debug for ForecastService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForecastService")
            .field("horizon", &self.horizon)
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

impl ForecastService {
    /// Create a new forecast service
    pub fn new(weather: Arc<dyn WeatherPort>, horizon: usize) -> Self {
        Self {
            weather,
            horizon,
            style: DEFAULT_STYLE.to_string(),
        }
    }

    /// Override the narrative style tag
    #[must_use]
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    /// The configured forecast horizon in days
    #[must_use]
    pub const fn horizon(&self) -> usize {
        self.horizon
    }

    /// Aggregate the provider's raw samples into at most `horizon` daily
    /// summaries, ascending by date
    #[instrument(skip(self), fields(horizon = self.horizon))]
    pub async fn daily_summaries(
        &self,
        location: &str,
    ) -> Result<Vec<DailySummary>, ApplicationError> {
        let samples = self.weather.forecast_samples(location).await?;
        debug!(samples = samples.len(), "Aggregating forecast samples");
        Ok(aggregate_daily(&samples, self.horizon)?)
    }

    /// Assemble a complete forecast for a location string
    ///
    /// Resolves current conditions and raw samples via the weather provider,
    /// runs the daily aggregator, and requires the summary count to equal
    /// the horizon exactly. Sparse upstream data is a hard failure, never
    /// silently padded.
    #[instrument(skip(self), fields(horizon = self.horizon))]
    pub async fn assemble(&self, location: &str) -> Result<Forecast, ApplicationError> {
        let current = self.weather.current_conditions(location).await?;
        self.assemble_with_current(&current, location).await
    }

    /// Assemble a forecast when current conditions were already resolved
    ///
    /// Avoids a second provider round-trip for callers that need the current
    /// conditions themselves (the insights path).
    pub async fn assemble_with_current(
        &self,
        current: &CurrentConditions,
        location: &str,
    ) -> Result<Forecast, ApplicationError> {
        let summaries = self.daily_summaries(location).await?;
        let geo = GeoLocation::new(current.latitude, current.longitude)?;

        let forecast = Forecast::new(geo, summaries, self.horizon, self.style.clone(), None)?;
        debug!(days = forecast.daily_summaries().len(), "Assembled forecast");
        Ok(forecast)
    }
}
