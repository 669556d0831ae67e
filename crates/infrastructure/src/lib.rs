//! Infrastructure layer - Adapters and technical concerns
//!
//! Implements the application ports against real backends: the weather
//! provider, the chat completion API, and the secret stores. Also owns
//! configuration loading, retry policy, and telemetry setup.

pub mod adapters;
pub mod config;
pub mod retry;
pub mod telemetry;

pub use adapters::{
    ChainedSecretStore, EnvSecretStore, OpenAiInferenceAdapter, VaultConfig, VaultSecretStore,
    WeatherAdapter,
};
pub use config::{AppConfig, ForecastAppConfig, TelemetryAppConfig, VaultAppConfig};
pub use retry::{RetryConfig, Retryable, retry, with_retry};
pub use telemetry::init_telemetry;
