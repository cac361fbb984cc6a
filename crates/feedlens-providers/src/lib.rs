//! Model provider abstraction for feedlens.
//!
//! Exposes a single [`ModelProvider`] capability — `generate(prompt, config)`
//! returning generated text plus latency and token usage — behind which any
//! concrete LLM backend can sit. Ships one reqwest-backed implementation for
//! OpenAI-compatible chat endpoints, plus model-family detection and the
//! per-family cost/capability metadata the analysis layer stamps into results.

pub mod config;
pub mod error;
pub mod family;
pub mod http;
pub mod types;

use std::future::Future;

pub use config::ProviderConfig;
pub use error::ProviderError;
pub use family::{detect_model_family, FamilyProfile};
pub use http::HttpProvider;
pub use types::{GenerationOutcome, ModelConfig, TokenUsage};

/// A text-generation capability.
///
/// Implementations are stateless with respect to requests: each `generate`
/// call is independent, which is what allows the analysis layer to fan out
/// multiple arms concurrently over the same provider set.
pub trait ModelProvider {
    /// Provider name used in result metadata and logs.
    fn name(&self) -> &str;

    /// Generate a completion for `prompt` under `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] when the backend is unreachable, rejects the
    /// request, or returns a body the client cannot interpret. Provider
    /// failures are surfaced loudly — no retry or substitution happens here.
    fn generate(
        &self,
        prompt: &str,
        config: &ModelConfig,
    ) -> impl Future<Output = Result<GenerationOutcome, ProviderError>> + Send;
}
