//! AI Core - Chat completion engine for narrative generation
//!
//! Talks to an OpenAI-compatible chat completions API. The engine is
//! transport-only: prompt construction and fallback handling live in the
//! application layer.

pub mod config;
pub mod error;
pub mod openai;
pub mod ports;

pub use config::InferenceConfig;
pub use error::InferenceError;
pub use openai::OpenAiChatEngine;
pub use ports::{InferenceEngine, InferenceRequest, InferenceResponse, TokenUsage};
