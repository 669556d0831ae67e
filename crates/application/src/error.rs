//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error (validation or aggregation invariant violation)
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Required configuration missing or invalid at startup
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Secret retrieval failed (vault unreachable or secret missing)
    #[error("Secret store error: {0}")]
    SecretStore(String),

    /// The weather provider does not know the requested location
    #[error("Location not found: {0}")]
    LocationNotFound(String),

    /// The weather provider is reachable but failing
    #[error("Weather service unavailable: {0}")]
    WeatherUnavailable(String),

    /// Language-model call failed
    #[error("Inference error: {0}")]
    Inference(String),

    /// Rate limit exceeded at an upstream provider
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error is retryable
    ///
    /// Transient transport failures (rate limits, upstream 5xx) may be
    /// retried with backoff; everything else surfaces immediately.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ApplicationError::RateLimited | ApplicationError::WeatherUnavailable(_)
        )
    }
}
