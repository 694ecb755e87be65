//! Generative model invocation
//!
//! The model is an opaque text source: a prompt goes in, unconstrained text
//! comes out. Failures of the call itself are [`ModelError`]s and are fatal
//! to the request; the shape of the returned text is the parser's problem.

use async_trait::async_trait;
use thiserror::Error;

mod openai_compatible;

pub use openai_compatible::OpenAiCompatibleModel;

/// Model invocation errors
#[derive(Debug, Error)]
pub enum ModelError {
    /// Connection refused, DNS failure, timeout, ...
    #[error("Model endpoint unreachable: {0}")]
    Transport(String),

    /// Endpoint answered with a non-2xx status (bad key, unknown model, ...)
    #[error("Model endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body was not a chat completion
    #[error("Could not decode model response: {0}")]
    Decode(String),

    /// Completion had no choices or no message text
    #[error("Model returned no text")]
    EmptyResponse,
}

/// Single-shot text completion
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Model identifier, for logs
    fn model_name(&self) -> &str;

    async fn complete(&self, prompt: &str) -> Result<String, ModelError>;
}
