use serde::{Deserialize, Serialize};

/// Per-request model configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl ModelConfig {
    /// Config for `model` with the standard defaults (temperature 0.7,
    /// 4000 max tokens).
    #[must_use]
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            temperature: 0.7,
            max_tokens: 4000,
        }
    }
}

/// Token accounting reported by the backend. Zeroed when the backend omits
/// usage data.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub total_tokens: u64,
}

/// A successful generation: the raw model text plus call metadata.
///
/// `model_family` is the prose-register tag (`claude`, `nova`, `llama`,
/// `unknown`) the response normalizer dispatches on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationOutcome {
    pub content: String,
    pub provider: String,
    pub model: String,
    pub latency_ms: u64,
    pub usage: TokenUsage,
    pub model_family: String,
}

/// Default model for a named provider backend. Empty string for unknown
/// backends — callers must supply an explicit model in that case.
#[must_use]
pub fn default_model(provider: &str) -> &'static str {
    match provider {
        "anthropic" => "claude-3-5-sonnet-20241022",
        "bedrock" => "anthropic.claude-3-5-sonnet-20241022-v2:0",
        "nova" => "us.amazon.nova-micro-v1:0",
        "llama" => "meta.llama3-1-8b-instruct-v1:0",
        _ => "",
    }
}
