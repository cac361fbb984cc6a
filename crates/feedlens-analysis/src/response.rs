//! Response normalization: raw model prose in, strict [`AnalysisResult`] out.
//!
//! The input can never be trusted structurally — each model family writes in
//! a different register, and even the payload envelope varies. The pipeline
//! here is linear: content extraction, family dispatch, section splitting,
//! section routing, shared goal/pattern/insight extraction, assembly. Any
//! internal failure discards partial work and returns the fallback result;
//! this function never fails.

use serde::Deserialize;

use crate::error::AnalysisError;
use crate::extract::{
    extract_goals, extract_insights, extract_patterns, generic_goal_area,
};
use crate::sections::{classify_section, title_percentage, ModelFamily, SectionKind};
use crate::types::{
    AnalysisResult, BehavioralPattern, CostTier, EvidenceLevel, Goal, GoalArea, GoalPotential,
    GoalTerm, InterestDistribution, ModelInfo,
};

/// Raw provider output plus the passthrough metadata the result needs.
///
/// `cost_tier` stays a string here; anything unrecognized parses to medium
/// at assembly time rather than failing the run.
#[derive(Debug, Clone)]
pub struct RawModelResponse {
    pub content: String,
    pub provider: String,
    pub model: String,
    pub model_family: String,
    pub latency_ms: u64,
    pub cost_tier: String,
    pub capabilities: Vec<String>,
}

/// Provider payloads are sometimes a serialized chat envelope rather than
/// plain prose. The discriminator is explicit so downstream code never does
/// ambient dynamic access.
#[derive(Debug, PartialEq, Eq)]
enum ParsedContent {
    /// Strict envelope parse succeeded; holds the inner text.
    Structured(String),
    /// Payload treated as already-plain text.
    Plain(String),
}

#[derive(Deserialize)]
struct ContentEnvelope {
    #[serde(default)]
    #[allow(dead_code)]
    role: Option<String>,
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

/// Normalize a raw model response into an [`AnalysisResult`].
///
/// Total: any parse failure, unexpected structure, or internal error yields
/// the fallback result with the error description embedded in
/// `raw_model_output`. At least one goal area is always present.
#[must_use]
pub fn normalize(raw: &RawModelResponse, original_post_count: usize) -> AnalysisResult {
    match normalize_inner(raw, original_post_count) {
        Ok(result) => result,
        Err(e) => {
            tracing::warn!(
                provider = %raw.provider,
                model = %raw.model,
                error = %e,
                "response normalization failed, returning fallback result"
            );
            fallback_result(raw, &e.to_string(), original_post_count)
        }
    }
}

fn normalize_inner(
    raw: &RawModelResponse,
    original_post_count: usize,
) -> Result<AnalysisResult, AnalysisError> {
    if raw.content.is_empty() {
        return Err(AnalysisError::EmptyContent);
    }

    let text = match extract_content(&raw.content) {
        ParsedContent::Structured(text) | ParsedContent::Plain(text) => text,
    };

    let family = ModelFamily::detect(&raw.model_family);
    let parsed = parse_text(family, &text);

    Ok(build_result(raw, parsed, original_post_count))
}

/// Strictly parse the chat-envelope shape; fall back to plain text.
/// Never lets a parse error escape.
fn extract_content(raw: &str) -> ParsedContent {
    if let Ok(envelope) = serde_json::from_str::<ContentEnvelope>(raw) {
        if let Some(text) = envelope
            .content
            .first()
            .and_then(|block| block.text.as_deref())
        {
            return ParsedContent::Structured(text.to_owned());
        }
    }
    ParsedContent::Plain(raw.to_owned())
}

#[derive(Debug, Default)]
struct ParsedSections {
    goal_areas: Vec<GoalArea>,
    patterns: Vec<BehavioralPattern>,
    insights: Vec<String>,
}

/// Split, route, and extract. Family differences are confined to section
/// splitting; the extraction primitives are shared.
fn parse_text(family: ModelFamily, text: &str) -> ParsedSections {
    let mut parsed = ParsedSections::default();

    for (title, body) in family.split_sections(text) {
        match classify_section(&title) {
            Some(SectionKind::Goals) => {
                // The concise family embeds percentages in section titles
                // ("Fitness Goals (50%)"); those beat in-body figures.
                let override_pct = if family == ModelFamily::Concise {
                    title_percentage(&title)
                } else {
                    None
                };
                parsed.goal_areas.extend(extract_goals(&body, override_pct));
            }
            Some(SectionKind::Patterns) => parsed.patterns.extend(extract_patterns(&body)),
            Some(SectionKind::Insights) => parsed.insights.extend(extract_insights(&body)),
            None => {}
        }
    }

    // Headerless prose (or an unknown family, which never splits): run the
    // extractors over the whole text so well-formed but unstructured output
    // still yields results.
    if parsed.goal_areas.is_empty() && parsed.patterns.is_empty() {
        parsed.goal_areas = extract_goals(text, None);
        parsed.patterns = extract_patterns(text);
        if parsed.insights.is_empty() {
            parsed.insights = extract_insights(text);
        }
    }

    // No category keyword matched anywhere: one generic area, never zero.
    if parsed.goal_areas.is_empty() {
        parsed.goal_areas.push(generic_goal_area());
    }

    parsed
}

fn build_result(
    raw: &RawModelResponse,
    parsed: ParsedSections,
    original_post_count: usize,
) -> AnalysisResult {
    if !parsed.insights.is_empty() {
        // Standalone insights are not part of the persisted schema; each
        // behavioral pattern carries its own insight string instead.
        tracing::debug!(count = parsed.insights.len(), "discarding free insights");
    }

    let interest_distribution = parsed
        .goal_areas
        .iter()
        .map(|area| InterestDistribution {
            category: area.name.clone(),
            percentage: area.percentage,
            goal_potential: GoalPotential::from_percentage(area.percentage),
        })
        .collect();

    AnalysisResult {
        total_posts: original_post_count,
        analysis_date: chrono::Utc::now().to_rfc3339(),
        content_id: uuid::Uuid::new_v4().to_string(),
        model_info: model_info(raw),
        goal_areas: parsed.goal_areas,
        behavioral_patterns: parsed.patterns,
        interest_distribution,
        raw_model_output: raw.content.clone(),
        sampling_manifest: None,
    }
}

fn model_info(raw: &RawModelResponse) -> ModelInfo {
    ModelInfo {
        provider: raw.provider.clone(),
        model: raw.model.clone(),
        latency_ms: raw.latency_ms,
        cost_tier: CostTier::parse(&raw.cost_tier),
        capabilities: raw.capabilities.clone(),
    }
}

/// Minimal valid result for total parse failure. Distinct from the generic
/// "Personal Development" area, which means "parsed fine, no categories".
fn fallback_result(raw: &RawModelResponse, error: &str, original_post_count: usize) -> AnalysisResult {
    let fallback_goal = GoalArea {
        id: "fallback".to_owned(),
        name: "General Development".to_owned(),
        icon: "🎯".to_owned(),
        evidence: EvidenceLevel::Medium,
        percentage: 50.0,
        save_count: 50,
        key_accounts: Vec::new(),
        description: "Unable to parse specific goals from model response.".to_owned(),
        goals: vec![Goal {
            term: GoalTerm::ThirtyDay,
            title: "Short-term Focus".to_owned(),
            description: "Review and plan immediate actions.".to_owned(),
        }],
    };

    AnalysisResult {
        total_posts: original_post_count,
        analysis_date: chrono::Utc::now().to_rfc3339(),
        content_id: uuid::Uuid::new_v4().to_string(),
        model_info: model_info(raw),
        goal_areas: vec![fallback_goal],
        behavioral_patterns: Vec::new(),
        interest_distribution: vec![InterestDistribution {
            category: "General".to_owned(),
            percentage: 100.0,
            goal_potential: GoalPotential::Medium,
        }],
        raw_model_output: format!("Parsing error: {error}"),
        sampling_manifest: None,
    }
}

#[cfg(test)]
#[path = "response_test.rs"]
mod tests;
