//! Model-family detection and per-family metadata.
//!
//! A "family" is a cluster of models sharing prose conventions: Claude models
//! write concise bulleted sections, Nova models verbose markdown, Llama models
//! numbered lists. The tag drives parser dispatch downstream; the cost tier
//! and capability list are fixed per family and stamped into result metadata.

/// Detect the model family from a model identifier.
///
/// Matches on case-insensitive substrings, the same way the ids appear in
/// Bedrock-style model strings (`us.amazon.nova-micro-v1:0`,
/// `meta.llama3-1-8b-instruct-v1:0`, `anthropic.claude-...`).
#[must_use]
pub fn detect_model_family(model_id: &str) -> &'static str {
    let lower = model_id.to_lowercase();
    if lower.contains("nova") {
        "nova"
    } else if lower.contains("llama") {
        "llama"
    } else if lower.contains("claude") || lower.contains("anthropic") {
        "claude"
    } else {
        "unknown"
    }
}

/// Fixed cost/capability metadata for a model family.
#[derive(Debug, Clone, Copy)]
pub struct FamilyProfile {
    pub family: &'static str,
    pub cost_tier: &'static str,
    pub capabilities: &'static [&'static str],
}

impl FamilyProfile {
    /// Profile for the family a model id belongs to.
    #[must_use]
    pub fn for_model(model_id: &str) -> Self {
        match detect_model_family(model_id) {
            "nova" => Self {
                family: "nova",
                cost_tier: "very_low",
                capabilities: &["text", "multimodal"],
            },
            "llama" => Self {
                family: "llama",
                cost_tier: "low",
                capabilities: &["text"],
            },
            "claude" => Self {
                family: "claude",
                cost_tier: "high",
                capabilities: &["text", "vision", "reasoning"],
            },
            _ => Self {
                family: "unknown",
                cost_tier: "medium",
                capabilities: &["text"],
            },
        }
    }
}
