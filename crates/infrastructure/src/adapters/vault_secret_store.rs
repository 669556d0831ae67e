//! HashiCorp Vault secret store adapter
//!
//! Retrieves API keys from HashiCorp Vault using the KV v2 secrets engine
//! with token-based authentication. Each secret lives at
//! `{mount}/{name}` with the value stored under a `value` key.

use std::sync::Arc;

use application::{error::ApplicationError, ports::SecretStorePort};
use async_trait::async_trait;
use tracing::{debug, error, info, instrument, warn};
use vaultrs::{
    client::{VaultClient, VaultClientSettingsBuilder},
    kv2,
};

/// Configuration for Vault connection
#[derive(Debug, Clone)]
pub struct VaultConfig {
    /// Vault server address (e.g., "<https://vault.example.com:8200>")
    pub address: String,
    /// Authentication token
    pub token: Option<String>,
    /// KV v2 mount path (default: "secret")
    pub mount_path: String,
    /// Connection timeout in seconds
    pub timeout_secs: u64,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            address: "http://127.0.0.1:8200".to_string(),
            token: None,
            mount_path: "secret".to_string(),
            timeout_secs: 5,
        }
    }
}

impl VaultConfig {
    /// Create a new Vault configuration with the given address
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Default::default()
        }
    }

    /// Set the authentication token
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the KV mount path
    #[must_use]
    pub fn with_mount_path(mut self, path: impl Into<String>) -> Self {
        self.mount_path = path.into();
        self
    }
}

/// Secret store that reads from HashiCorp Vault
pub struct VaultSecretStore {
    client: VaultClient,
    mount_path: String,
}

impl std::fmt::Debug for VaultSecretStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaultSecretStore")
            .field("mount_path", &self.mount_path)
            .field("client", &"VaultClient { ... }")
            .finish()
    }
}

impl VaultSecretStore {
    /// Create a new Vault secret store with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the Vault client cannot be created.
    pub fn new(config: VaultConfig) -> Result<Self, ApplicationError> {
        let mut settings_builder = VaultClientSettingsBuilder::default();
        settings_builder.address(&config.address);

        if let Some(token) = &config.token {
            settings_builder.token(token);
        }

        let settings = settings_builder
            .build()
            .map_err(|e| ApplicationError::Configuration(format!("Invalid Vault config: {e}")))?;

        let client = VaultClient::new(settings).map_err(|e| {
            ApplicationError::SecretStore(format!("Failed to create Vault client: {e}"))
        })?;

        info!(address = %config.address, "Connected to Vault");

        Ok(Self {
            client,
            mount_path: config.mount_path,
        })
    }
}

#[async_trait]
impl SecretStorePort for VaultSecretStore {
    #[instrument(skip(self))]
    async fn get_secret(&self, name: &str) -> Result<String, ApplicationError> {
        debug!(mount = %self.mount_path, "Fetching secret from Vault");

        let secret: std::collections::HashMap<String, String> =
            kv2::read(&self.client, &self.mount_path, name)
                .await
                .map_err(|e| {
                    if e.to_string().contains("404") || e.to_string().contains("not found") {
                        ApplicationError::SecretStore(format!("Secret not found: {name}"))
                    } else {
                        error!(error = %e, "Failed to read secret from Vault");
                        ApplicationError::SecretStore(format!("Vault read failed: {e}"))
                    }
                })?;

        secret
            .get("value")
            .or_else(|| secret.values().next())
            .cloned()
            .ok_or_else(|| {
                ApplicationError::SecretStore(format!("Secret has no value field: {name}"))
            })
    }

    async fn is_healthy(&self) -> bool {
        match vaultrs::sys::health(&self.client).await {
            Ok(health) => {
                if health.sealed {
                    warn!("Vault is sealed");
                    false
                } else {
                    true
                }
            },
            Err(e) => {
                error!(error = %e, "Vault health check failed");
                false
            },
        }
    }
}

/// Combined secret store that tries multiple backends
///
/// First tries Vault, then falls back to environment variables. Useful
/// for development where Vault may not be available.
pub struct ChainedSecretStore {
    stores: Vec<Arc<dyn SecretStorePort>>,
}

impl std::fmt::Debug for ChainedSecretStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainedSecretStore")
            .field("stores_count", &self.stores.len())
            .finish()
    }
}

impl ChainedSecretStore {
    /// Create a new chained secret store with the given backends
    pub fn new(stores: Vec<Arc<dyn SecretStorePort>>) -> Self {
        Self { stores }
    }
}

#[async_trait]
impl SecretStorePort for ChainedSecretStore {
    async fn get_secret(&self, name: &str) -> Result<String, ApplicationError> {
        let mut last_error = None;

        for store in &self.stores {
            match store.get_secret(name).await {
                Ok(value) => return Ok(value),
                Err(e) => {
                    last_error = Some(e);
                },
            }
        }

        Err(last_error.unwrap_or_else(|| {
            ApplicationError::SecretStore(format!("Secret not found in any store: {name}"))
        }))
    }

    async fn is_healthy(&self) -> bool {
        // Healthy if at least one store is healthy
        for store in &self.stores {
            if store.is_healthy().await {
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vault_config_builder() {
        let config = VaultConfig::new("https://vault.example.com:8200")
            .with_token("my-token")
            .with_mount_path("kv");

        assert_eq!(config.address, "https://vault.example.com:8200");
        assert_eq!(config.token, Some("my-token".to_string()));
        assert_eq!(config.mount_path, "kv");
    }

    #[tokio::test]
    async fn chained_store_tries_fallback() {
        #[derive(Debug)]
        struct FailingStore;

        #[async_trait]
        impl SecretStorePort for FailingStore {
            async fn get_secret(&self, name: &str) -> Result<String, ApplicationError> {
                Err(ApplicationError::SecretStore(format!("Not found: {name}")))
            }
            async fn is_healthy(&self) -> bool {
                false
            }
        }

        #[derive(Debug)]
        struct SucceedingStore;

        #[async_trait]
        impl SecretStorePort for SucceedingStore {
            async fn get_secret(&self, name: &str) -> Result<String, ApplicationError> {
                if name == "OWM-API-KEY" {
                    Ok("owm-key".to_string())
                } else {
                    Err(ApplicationError::SecretStore(format!("Not found: {name}")))
                }
            }
            async fn is_healthy(&self) -> bool {
                true
            }
        }

        let chained =
            ChainedSecretStore::new(vec![Arc::new(FailingStore), Arc::new(SucceedingStore)]);

        let value = chained.get_secret("OWM-API-KEY").await.expect("fallback");
        assert_eq!(value, "owm-key");

        let err = chained.get_secret("MISSING").await.unwrap_err();
        assert!(matches!(err, ApplicationError::SecretStore(_)));
    }

    #[tokio::test]
    async fn chained_store_is_healthy_if_any_healthy() {
        #[derive(Debug)]
        struct UnhealthyStore;

        #[async_trait]
        impl SecretStorePort for UnhealthyStore {
            async fn get_secret(&self, _name: &str) -> Result<String, ApplicationError> {
                Err(ApplicationError::SecretStore(String::new()))
            }
            async fn is_healthy(&self) -> bool {
                false
            }
        }

        #[derive(Debug)]
        struct HealthyStore;

        #[async_trait]
        impl SecretStorePort for HealthyStore {
            async fn get_secret(&self, _name: &str) -> Result<String, ApplicationError> {
                Err(ApplicationError::SecretStore(String::new()))
            }
            async fn is_healthy(&self) -> bool {
                true
            }
        }

        let chained =
            ChainedSecretStore::new(vec![Arc::new(UnhealthyStore), Arc::new(HealthyStore)]);

        assert!(chained.is_healthy().await);
    }
}
