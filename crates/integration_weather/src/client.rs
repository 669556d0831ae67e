//! OpenWeatherMap HTTP client

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{CurrentWeatherResponse, ForecastResponse, WeatherUnits};

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from the weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The provider does not know the requested location
    #[error("Location '{0}' not found")]
    LocationNotFound(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// OpenWeatherMap API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Unit system for temperatures and wind speeds
    #[serde(default)]
    pub units: WeatherUnits,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            units: WeatherUnits::default(),
        }
    }
}

/// Weather client trait for fetching provider data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get current weather for a location string
    async fn get_current(&self, location: &str) -> Result<CurrentWeatherResponse, WeatherError>;

    /// Get the 3-hourly forecast feed for a location string
    async fn get_forecast(&self, location: &str) -> Result<ForecastResponse, WeatherError>;

    /// Check if the weather service is reachable
    async fn is_healthy(&self) -> bool;
}

/// OpenWeatherMap HTTP client implementation
pub struct OpenWeatherMapClient {
    client: Client,
    config: WeatherConfig,
    api_key: String,
}

impl std::fmt::Debug for OpenWeatherMapClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherMapClient")
            .field("base_url", &self.config.base_url)
            .field("units", &self.config.units)
            .finish_non_exhaustive()
    }
}

impl OpenWeatherMapClient {
    /// Create a new client with an API key retrieved at startup
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig, api_key: String) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    fn endpoint(&self, name: &str) -> String {
        format!("{}/{name}", self.config.base_url.trim_end_matches('/'))
    }

    /// Map an error status to the client error taxonomy
    fn map_error_status(location: &str, status: StatusCode) -> WeatherError {
        match status {
            StatusCode::NOT_FOUND => WeatherError::LocationNotFound(location.to_string()),
            StatusCode::TOO_MANY_REQUESTS => WeatherError::RateLimitExceeded,
            s if s.is_server_error() => WeatherError::ServiceUnavailable(format!("HTTP {s}")),
            s => WeatherError::RequestFailed(format!("HTTP {s}")),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        location: &str,
    ) -> Result<T, WeatherError> {
        let response = self
            .client
            .get(self.endpoint(endpoint))
            .query(&[
                ("q", location),
                ("appid", &self.api_key),
                ("units", self.config.units.query_value()),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    WeatherError::ConnectionFailed(e.to_string())
                } else {
                    WeatherError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::map_error_status(location, status));
        }

        response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl WeatherClient for OpenWeatherMapClient {
    #[instrument(skip(self))]
    async fn get_current(&self, location: &str) -> Result<CurrentWeatherResponse, WeatherError> {
        debug!("Fetching current weather");
        self.get_json("weather", location).await
    }

    #[instrument(skip(self))]
    async fn get_forecast(&self, location: &str) -> Result<ForecastResponse, WeatherError> {
        debug!("Fetching forecast feed");
        self.get_json("forecast", location).await
    }

    async fn is_healthy(&self) -> bool {
        // Any authenticated response from the current weather endpoint
        // proves key and connectivity.
        self.get_current("London").await.is_ok()
    }
}
