//! Inference errors

use thiserror::Error;

/// Errors that can occur during inference
#[derive(Debug, Error)]
pub enum InferenceError {
    /// Failed to connect to the API
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the API failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// API key rejected
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Response parsing failed
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Timeout during inference
    #[error("Inference request timed out")]
    Timeout,

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Server error (5xx)
    #[error("Server error: {0}")]
    ServerError(String),
}

impl From<reqwest::Error> for InferenceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            InferenceError::Timeout
        } else if err.is_connect() {
            InferenceError::ConnectionFailed(err.to_string())
        } else {
            InferenceError::RequestFailed(err.to_string())
        }
    }
}

impl InferenceError {
    /// Whether a retry with backoff might succeed
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            InferenceError::RateLimited
                | InferenceError::ServerError(_)
                | InferenceError::Timeout
                | InferenceError::ConnectionFailed(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_classification() {
        assert!(InferenceError::RateLimited.is_retryable());
        assert!(InferenceError::ServerError("502".into()).is_retryable());
        assert!(InferenceError::Timeout.is_retryable());
        assert!(!InferenceError::AuthenticationFailed("bad key".into()).is_retryable());
        assert!(!InferenceError::InvalidResponse("no choices".into()).is_retryable());
    }
}
