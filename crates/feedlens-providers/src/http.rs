//! Reqwest-backed provider for OpenAI-compatible chat-completion endpoints.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::error::ProviderError;
use crate::family::detect_model_family;
use crate::types::{GenerationOutcome, ModelConfig, TokenUsage};
use crate::ModelProvider;

/// HTTP provider speaking the `/v1/chat/completions` wire format.
#[derive(Debug, Clone)]
pub struct HttpProvider {
    client: reqwest::Client,
    name: String,
    url: String,
    api_key: Option<String>,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    temperature: f64,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
    #[serde(default)]
    usage: Option<ChatUsage>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize, Default)]
struct ChatUsage {
    #[serde(default)]
    prompt_tokens: u64,
    #[serde(default)]
    completion_tokens: u64,
    #[serde(default)]
    total_tokens: u64,
}

impl HttpProvider {
    /// Create a provider named `name` pointing at `base_url`.
    #[must_use]
    pub fn new(name: impl Into<String>, base_url: &str, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            name: name.into(),
            url: format!("{}/v1/chat/completions", base_url.trim_end_matches('/')),
            api_key,
        }
    }
}

impl ModelProvider for HttpProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn generate(
        &self,
        prompt: &str,
        config: &ModelConfig,
    ) -> Result<GenerationOutcome, ProviderError> {
        let request = ChatRequest {
            model: &config.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        };

        let started = Instant::now();

        let mut builder = self.client.post(&self.url).json(&request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }
        let response = builder.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Malformed(format!("chat response parse error: {e}")))?;

        let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        let content = parsed
            .choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .ok_or(ProviderError::MissingContent)?
            .to_owned();

        let usage = parsed.usage.unwrap_or_default();

        tracing::debug!(
            provider = %self.name,
            model = %config.model,
            latency_ms,
            output_tokens = usage.completion_tokens,
            "generation complete"
        );

        Ok(GenerationOutcome {
            content,
            provider: self.name.clone(),
            model: config.model.clone(),
            latency_ms,
            usage: TokenUsage {
                input_tokens: usage.prompt_tokens,
                output_tokens: usage.completion_tokens,
                total_tokens: usage.total_tokens,
            },
            model_family: detect_model_family(&config.model).to_owned(),
        })
    }
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
