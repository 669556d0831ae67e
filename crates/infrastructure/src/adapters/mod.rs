//! Adapters implementing the application ports

mod env_secret_store;
mod openai_inference_adapter;
mod vault_secret_store;
mod weather_adapter;

pub use env_secret_store::EnvSecretStore;
pub use openai_inference_adapter::OpenAiInferenceAdapter;
pub use vault_secret_store::{ChainedSecretStore, VaultConfig, VaultSecretStore};
pub use weather_adapter::WeatherAdapter;
