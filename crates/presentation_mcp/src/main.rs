//! Stratus MCP server
//!
//! Wires configuration, secret stores, and the provider adapters into
//! the weather tool service, then serves MCP over stdin/stdout.

use std::sync::Arc;

use ai_core::OpenAiChatEngine;
use anyhow::Context;
use application::ports::{
    InferencePort, OPENAI_API_KEY_SECRET, OPENWEATHER_API_KEY_SECRET, SecretStorePort, WeatherPort,
};
use application::{ForecastService, InsightService, WeatherToolService};
use clap::Parser;
use infrastructure::{
    AppConfig, ChainedSecretStore, EnvSecretStore, OpenAiInferenceAdapter, VaultSecretStore,
    WeatherAdapter, init_telemetry,
};
use integration_weather::OpenWeatherMapClient;
use presentation_mcp::McpServer;
use tokio::io::{BufReader, stdin, stdout};
use tracing::info;

/// Weather tools over the Model Context Protocol
#[derive(Parser)]
#[command(name = "stratus-mcp")]
#[command(author, version, about = "Weather MCP server", long_about = None)]
struct Cli {
    /// Path to a TOML config file (defaults to ./config.toml if present)
    #[arg(short, long)]
    config: Option<String>,

    /// Verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config =
        AppConfig::load_from(cli.config.as_deref()).context("Failed to load configuration")?;

    // Logs go to stderr; stdout belongs to the protocol.
    init_telemetry(&config.telemetry, cli.verbose)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        horizon_days = config.forecast.horizon_days,
        model = %config.inference.model,
        "stratus-mcp starting"
    );

    let secrets = build_secret_store(&config)?;

    // Both API keys are resolved once at startup so a missing secret
    // fails fast instead of surfacing on the first tool call.
    let owm_key = secrets
        .get_secret(OPENWEATHER_API_KEY_SECRET)
        .await
        .context("OpenWeatherMap API key unavailable")?;
    let openai_key = secrets
        .get_secret(OPENAI_API_KEY_SECRET)
        .await
        .context("OpenAI API key unavailable")?;

    let weather_client = OpenWeatherMapClient::new(config.weather_client_config(), owm_key)
        .context("Failed to initialize weather client")?;
    let weather: Arc<dyn WeatherPort> = Arc::new(WeatherAdapter::new(
        Arc::new(weather_client),
        config.retry.clone(),
    ));

    let engine = OpenAiChatEngine::new(config.inference.clone(), openai_key)
        .context("Failed to initialize inference engine")?;
    let inference: Arc<dyn InferencePort> =
        Arc::new(OpenAiInferenceAdapter::new(Arc::new(engine), config.retry.clone()));

    let forecasts = ForecastService::new(Arc::clone(&weather), config.forecast.horizon_days)
        .with_style(config.forecast.style.clone());
    let insights = InsightService::new(inference, config.units);
    let tools = WeatherToolService::new(weather, forecasts, insights, config.units);

    let server = McpServer::new(Arc::new(tools));
    server
        .run(BufReader::new(stdin()), stdout())
        .await
        .context("MCP transport failed")?;

    info!("stratus-mcp shutdown complete");
    Ok(())
}

/// Build the secret store chain from configuration
///
/// Vault first when enabled, with environment variables as fallback
/// unless the fallback is switched off.
fn build_secret_store(config: &AppConfig) -> anyhow::Result<Arc<dyn SecretStorePort>> {
    let env_store = || match config.vault.env_prefix.as_deref() {
        Some(prefix) => EnvSecretStore::with_prefix(prefix),
        None => EnvSecretStore::new(),
    };

    if config.vault.enabled {
        let vault = VaultSecretStore::new(config.vault.to_vault_config())
            .context("Failed to connect to Vault")?;

        if config.vault.env_fallback {
            Ok(Arc::new(ChainedSecretStore::new(vec![
                Arc::new(vault),
                Arc::new(env_store()),
            ])))
        } else {
            Ok(Arc::new(vault))
        }
    } else {
        Ok(Arc::new(env_store()))
    }
}
