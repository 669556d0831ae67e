//! Port for secret retrieval
//!
//! Implementations can retrieve secrets from various backends: a managed
//! vault in production, environment variables for local development.

use async_trait::async_trait;

use crate::error::ApplicationError;

/// Secret name for the weather provider API key (fixed, not configurable)
pub const OPENWEATHER_API_KEY_SECRET: &str = "OWM-API-KEY";

/// Secret name for the language-model provider API key (fixed, not configurable)
pub const OPENAI_API_KEY_SECRET: &str = "OPENAI-API-KEY";

/// Port for secret storage operations
#[async_trait]
pub trait SecretStorePort: Send + Sync {
    /// Retrieve a secret by name
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::SecretStore` when the store is unreachable
    /// or the secret is missing.
    async fn get_secret(&self, name: &str) -> Result<String, ApplicationError>;

    /// Check if the secret store is healthy and accessible
    async fn is_healthy(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct InMemoryStore {
        secrets: HashMap<String, String>,
    }

    #[async_trait]
    impl SecretStorePort for InMemoryStore {
        async fn get_secret(&self, name: &str) -> Result<String, ApplicationError> {
            self.secrets
                .get(name)
                .cloned()
                .ok_or_else(|| ApplicationError::SecretStore(format!("secret not found: {name}")))
        }

        async fn is_healthy(&self) -> bool {
            true
        }
    }

    fn _assert_object_safe(_: &dyn SecretStorePort) {}

    #[tokio::test]
    async fn secret_lookup_by_fixed_name() {
        let store = InMemoryStore {
            secrets: HashMap::from([(
                OPENWEATHER_API_KEY_SECRET.to_string(),
                "owm-key".to_string(),
            )]),
        };

        let value = store
            .get_secret(OPENWEATHER_API_KEY_SECRET)
            .await
            .expect("secret exists");
        assert_eq!(value, "owm-key");
    }

    #[tokio::test]
    async fn missing_secret_is_secret_store_error() {
        let store = InMemoryStore {
            secrets: HashMap::new(),
        };

        let err = store.get_secret(OPENAI_API_KEY_SECRET).await.unwrap_err();
        assert!(matches!(err, ApplicationError::SecretStore(_)));
    }
}
