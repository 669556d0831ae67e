//! Inference adapter - Implements `InferencePort` using `ai_core`

use std::sync::Arc;
use std::time::Instant;

use ai_core::{InferenceEngine, InferenceError, InferenceRequest};
use application::error::ApplicationError;
use application::ports::{InferencePort, InferenceResult};
use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::retry::{RetryConfig, retry};

/// Adapter bridging the chat completion engine into the application layer
pub struct OpenAiInferenceAdapter {
    engine: Arc<dyn InferenceEngine>,
    retry: RetryConfig,
}

impl std::fmt::Debug for OpenAiInferenceAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiInferenceAdapter")
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}

impl OpenAiInferenceAdapter {
    /// Create a new adapter around a chat completion engine
    pub fn new(engine: Arc<dyn InferenceEngine>, retry: RetryConfig) -> Self {
        Self { engine, retry }
    }

    /// Map an engine error to the application error taxonomy
    fn map_error(err: InferenceError) -> ApplicationError {
        match err {
            InferenceError::RateLimited => ApplicationError::RateLimited,
            other => ApplicationError::Inference(other.to_string()),
        }
    }
}

#[async_trait]
impl InferencePort for OpenAiInferenceAdapter {
    #[instrument(skip_all)]
    async fn generate_with_system(
        &self,
        system_prompt: &str,
        message: &str,
    ) -> Result<InferenceResult, ApplicationError> {
        let start = Instant::now();

        let response = retry(&self.retry, || async {
            let request = InferenceRequest::with_system(system_prompt, message);
            self.engine.generate(request).await
        })
        .await
        .map_err(Self::map_error)?;

        let latency_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        debug!(model = %response.model, latency_ms, "Inference completed");

        Ok(InferenceResult {
            content: response.content,
            model: response.model,
            tokens_used: response.usage.map(|u| u.total_tokens),
            latency_ms,
        })
    }

    async fn is_healthy(&self) -> bool {
        self.engine.health_check().await.unwrap_or(false)
    }
}
