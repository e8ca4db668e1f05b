// src/services/provider.rs
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request to completion provider failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("completion provider returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not decode completion response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("completion response contained no text")]
    EmptyCompletion,
}

/// Anything that can turn a persona and a user message into generated text.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn generate(&self, persona: &str, message: &str) -> Result<String, ProviderError>;
}
