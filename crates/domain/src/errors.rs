//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Input validation failed (bad coordinates, malformed structured input)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// An aggregation invariant was violated, which signals corrupted or
    /// insufficient upstream data. Never recoverable locally.
    #[error("Data processing failed: {0}")]
    DataProcessing(String),
}

impl DomainError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a data processing error
    pub fn data_processing(message: impl Into<String>) -> Self {
        Self::DataProcessing(message.into())
    }
}
