//! Application configuration
//!
//! Layered loading: built-in defaults, then an optional `config.toml`,
//! then `STRATUS_*` environment variables. All collaborator endpoints
//! and tuning knobs live here; nothing is hardcoded at call sites.

use ai_core::InferenceConfig;
use application::ports::Units;
use integration_weather::{WeatherConfig, WeatherUnits};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::adapters::VaultConfig;
use crate::retry::RetryConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Unit system used consistently across all tools
    #[serde(default)]
    pub units: Units,

    /// Forecast assembly configuration
    #[serde(default)]
    pub forecast: ForecastAppConfig,

    /// Weather provider configuration
    #[serde(default)]
    pub weather: WeatherAppConfig,

    /// Chat completion engine configuration
    #[serde(default)]
    pub inference: InferenceConfig,

    /// Vault secret store configuration
    #[serde(default)]
    pub vault: VaultAppConfig,

    /// Retry configuration for external service calls
    #[serde(default)]
    pub retry: RetryConfig,

    /// Telemetry configuration
    #[serde(default)]
    pub telemetry: TelemetryAppConfig,
}

/// Forecast assembly configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastAppConfig {
    /// Number of days covered by a forecast
    #[serde(default = "default_horizon")]
    pub horizon_days: usize,

    /// Narrative style tag attached to assembled forecasts
    #[serde(default = "default_style")]
    pub style: String,
}

const fn default_horizon() -> usize {
    5
}

fn default_style() -> String {
    "professional".to_string()
}

impl Default for ForecastAppConfig {
    fn default() -> Self {
        Self {
            horizon_days: default_horizon(),
            style: default_style(),
        }
    }
}

/// Weather provider configuration (endpoint and timeout; units are global)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherAppConfig {
    /// OpenWeatherMap API base URL
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds
    #[serde(default = "default_weather_timeout")]
    pub timeout_secs: u64,
}

fn default_weather_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

const fn default_weather_timeout() -> u64 {
    30
}

impl Default for WeatherAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_base_url(),
            timeout_secs: default_weather_timeout(),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryAppConfig {
    /// Log format: "json" for structured JSON logs, "text" for human-readable
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Default for TelemetryAppConfig {
    fn default() -> Self {
        Self {
            log_format: default_log_format(),
        }
    }
}

/// Vault secret store configuration
///
/// When enabled, API keys are read from HashiCorp Vault at startup.
/// With `env_fallback`, missing secrets fall through to environment
/// variables, which keeps local development vault-free.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultAppConfig {
    /// Enable Vault secret store integration
    #[serde(default)]
    pub enabled: bool,

    /// Vault server address
    #[serde(default = "default_vault_address")]
    pub address: String,

    /// Authentication token (prefer env var `STRATUS_VAULT_TOKEN`)
    #[serde(default, skip_serializing)]
    pub token: Option<SecretString>,

    /// KV v2 mount path
    #[serde(default = "default_mount_path")]
    pub mount_path: String,

    /// Connection timeout in seconds
    #[serde(default = "default_vault_timeout")]
    pub timeout_secs: u64,

    /// Enable environment variable fallback via `ChainedSecretStore`
    #[serde(default = "default_true")]
    pub env_fallback: bool,

    /// Environment variable prefix for fallback lookups
    #[serde(default = "default_env_prefix")]
    pub env_prefix: Option<String>,
}

fn default_vault_address() -> String {
    "http://127.0.0.1:8200".to_string()
}

fn default_mount_path() -> String {
    "secret".to_string()
}

const fn default_vault_timeout() -> u64 {
    5
}

const fn default_true() -> bool {
    true
}

#[allow(clippy::unnecessary_wraps)]
fn default_env_prefix() -> Option<String> {
    Some(String::from("STRATUS"))
}

impl Default for VaultAppConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            address: default_vault_address(),
            token: None,
            mount_path: default_mount_path(),
            timeout_secs: default_vault_timeout(),
            env_fallback: true,
            env_prefix: default_env_prefix(),
        }
    }
}

impl VaultAppConfig {
    /// Convert to the adapter-level `VaultConfig`
    #[must_use]
    pub fn to_vault_config(&self) -> VaultConfig {
        let mut config = VaultConfig::new(&self.address);
        config.mount_path.clone_from(&self.mount_path);
        config.timeout_secs = self.timeout_secs;

        if let Some(ref token) = self.token {
            config.token = Some(token.expose_secret().to_string());
        }

        config
    }
}

impl AppConfig {
    /// Load configuration from environment and optional file
    ///
    /// # Errors
    ///
    /// Returns an error if a source fails to parse or a value has the
    /// wrong type.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration with an explicit config file path
    ///
    /// # Errors
    ///
    /// Returns an error if the named file is missing or any source fails
    /// to parse.
    pub fn load_from(path: Option<&str>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        builder = match path {
            Some(p) => builder.add_source(config::File::with_name(p)),
            None => builder.add_source(config::File::with_name("config").required(false)),
        };

        // Override with environment variables (e.g., STRATUS_FORECAST_HORIZON_DAYS)
        let builder = builder.add_source(
            config::Environment::with_prefix("STRATUS")
                .separator("_")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Build the provider-level weather client configuration
    #[must_use]
    pub fn weather_client_config(&self) -> WeatherConfig {
        WeatherConfig {
            base_url: self.weather.base_url.clone(),
            timeout_secs: self.weather.timeout_secs,
            units: match self.units {
                Units::Imperial => WeatherUnits::Imperial,
                Units::Metric => WeatherUnits::Metric,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = AppConfig::default();
        assert_eq!(config.units, Units::Imperial);
        assert_eq!(config.forecast.horizon_days, 5);
        assert_eq!(config.forecast.style, "professional");
        assert_eq!(
            config.weather.base_url,
            "https://api.openweathermap.org/data/2.5"
        );
        assert_eq!(config.inference.model, "gpt-4o-mini");
        assert!(!config.vault.enabled);
        assert_eq!(config.retry.max_retries, 3);
        assert_eq!(config.telemetry.log_format, "text");
    }

    #[test]
    fn toml_overrides_defaults() {
        let toml_str = r#"
            units = "metric"

            [forecast]
            horizon_days = 3

            [weather]
            base_url = "http://localhost:9090"

            [vault]
            enabled = true
            address = "http://vault:8200"
        "#;

        let config: AppConfig = toml::from_str(toml_str).expect("valid config");
        assert_eq!(config.units, Units::Metric);
        assert_eq!(config.forecast.horizon_days, 3);
        assert_eq!(config.weather.base_url, "http://localhost:9090");
        assert!(config.vault.enabled);
        assert_eq!(config.vault.address, "http://vault:8200");
        // Untouched sections keep their defaults.
        assert_eq!(config.forecast.style, "professional");
        assert_eq!(config.vault.mount_path, "secret");
    }

    #[test]
    fn units_flow_into_weather_client_config() {
        let config = AppConfig {
            units: Units::Metric,
            ..AppConfig::default()
        };
        let weather = config.weather_client_config();
        assert_eq!(weather.units, WeatherUnits::Metric);
        assert_eq!(weather.base_url, "https://api.openweathermap.org/data/2.5");
    }

    #[test]
    fn vault_config_conversion() {
        let config = VaultAppConfig {
            enabled: true,
            address: "http://vault:8200".to_string(),
            token: Some(SecretString::from("test-token")),
            mount_path: "kv".to_string(),
            timeout_secs: 10,
            ..Default::default()
        };

        let vault_config = config.to_vault_config();
        assert_eq!(vault_config.address, "http://vault:8200");
        assert_eq!(vault_config.mount_path, "kv");
        assert_eq!(vault_config.timeout_secs, 10);
        assert_eq!(vault_config.token.as_deref(), Some("test-token"));
    }

    #[test]
    fn vault_token_is_not_serialized() {
        let config = VaultAppConfig {
            token: Some(SecretString::from("super-secret")),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).expect("serialize");
        assert!(!json.contains("super-secret"));
    }
}
