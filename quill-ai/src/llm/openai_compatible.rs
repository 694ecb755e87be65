//! OpenAI-compatible chat completions client
//!
//! Works against any endpoint exposing `POST {base_url}/chat/completions`
//! (Ollama, vLLM, LocalAI, hosted APIs). One user message per call, no
//! streaming, no retries.

use async_trait::async_trait;
use quill_common::config::ModelSettings;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

use super::{ChatModel, ModelError};

/// Connection timeout; generation itself is unbounded at this layer
const CONNECT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<RequestMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Chat model behind an OpenAI-compatible HTTP API
pub struct OpenAiCompatibleModel {
    http_client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl OpenAiCompatibleModel {
    pub fn new(settings: &ModelSettings) -> Result<Self, ModelError> {
        let http_client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| ModelError::Transport(e.to_string()))?;

        Ok(Self {
            http_client,
            endpoint: format!("{}/chat/completions", settings.base_url.trim_end_matches('/')),
            model: settings.name.clone(),
            api_key: settings.api_key.clone().filter(|k| !k.is_empty()),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ChatModel for OpenAiCompatibleModel {
    fn model_name(&self) -> &str {
        &self.model
    }

    #[instrument(skip(self, prompt), fields(model = %self.model, prompt_len = prompt.len()))]
    async fn complete(&self, prompt: &str) -> Result<String, ModelError> {
        let body = CompletionRequest {
            model: &self.model,
            messages: vec![RequestMessage {
                role: "user",
                content: prompt,
            }],
        };

        let mut request = self.http_client.post(&self.endpoint).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ModelError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ModelError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(|e| ModelError::Decode(e.to_string()))?;

        let text = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(ModelError::EmptyResponse)?;

        debug!(response_len = text.len(), "Model completion received");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(base_url: &str, api_key: Option<&str>) -> ModelSettings {
        ModelSettings {
            base_url: base_url.to_string(),
            name: "llama3.1".to_string(),
            api_key: api_key.map(str::to_string),
        }
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        let model = OpenAiCompatibleModel::new(&settings("http://localhost:11434/v1/", None)).unwrap();
        assert_eq!(model.endpoint(), "http://localhost:11434/v1/chat/completions");
        assert_eq!(model.model_name(), "llama3.1");
    }

    #[test]
    fn test_empty_api_key_treated_as_absent() {
        let model = OpenAiCompatibleModel::new(&settings("http://x/v1", Some(""))).unwrap();
        assert!(model.api_key.is_none());
    }

    #[test]
    fn test_request_body_shape() {
        let body = CompletionRequest {
            model: "m",
            messages: vec![RequestMessage { role: "user", content: "hi" }],
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "model": "m", "messages": [{ "role": "user", "content": "hi" }] })
        );
    }
}
