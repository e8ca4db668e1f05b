// src/services/openai.rs
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::provider::{CompletionProvider, ProviderError};

pub const MODEL: &str = "gpt-4o-mini";
const COMPLETIONS_PATH: &str = "/chat/completions";

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: [PromptMessage<'a>; 2],
}

#[derive(Serialize)]
struct PromptMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Chat-completions client for OpenAI and compatible endpoints.
pub struct OpenAiClient {
    client: reqwest::Client,
    api_key: String,
    url: String,
}

impl OpenAiClient {
    pub fn new(api_key: impl Into<String>, base_url: &str) -> Self {
        let url = format!("{}{}", base_url.trim_end_matches('/'), COMPLETIONS_PATH);
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            url,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// First choice's text, or `EmptyCompletion` if there is none.
fn first_completion(body: &str) -> Result<String, ProviderError> {
    let parsed: CompletionResponse = serde_json::from_str(body)?;
    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or(ProviderError::EmptyCompletion)
}

#[async_trait]
impl CompletionProvider for OpenAiClient {
    async fn generate(&self, persona: &str, message: &str) -> Result<String, ProviderError> {
        let request = CompletionRequest {
            model: MODEL,
            messages: [
                PromptMessage { role: "system", content: persona },
                PromptMessage { role: "user", content: message },
            ],
        };

        debug!(url = %self.url, model = MODEL, "sending completion request");
        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            warn!(%status, "completion provider rejected request");
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        first_completion(&body)
    }
}
