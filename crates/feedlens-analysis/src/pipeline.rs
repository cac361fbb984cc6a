//! End-to-end analysis pipeline and multi-model comparison.
//!
//! `run_analysis` wires the stages together for one provider: count, plan,
//! normalize, prompt, generate, parse, assemble. The provider call is the
//! only await point and the only stage allowed to fail the run; every
//! data-quality problem before or after it degrades instead.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use feedlens_providers::{FamilyProfile, ModelConfig, ModelProvider};

use crate::assemble;
use crate::error::AnalysisError;
use crate::posts::{count_category, extract_category_items, normalize_category};
use crate::prompt;
use crate::response::{normalize, RawModelResponse};
use crate::sampling::{plan, take_sample};
use crate::types::{AnalysisResult, CanonicalPost};

/// Run the full analysis for one provider.
///
/// `raw_data` is the parsed export JSON keyed by category name; categories
/// absent from it count as empty rather than failing.
///
/// # Errors
///
/// Returns [`AnalysisError::Provider`] when the model call itself fails.
/// Nothing else errors: unrecognized categories normalize to zero posts and
/// unparseable model output becomes the fallback result.
pub async fn run_analysis<P: ModelProvider>(
    provider: &P,
    raw_data: &Value,
    categories: &[String],
    config: &ModelConfig,
) -> Result<AnalysisResult, AnalysisError> {
    let counts: BTreeMap<String, usize> = categories
        .iter()
        .map(|category| {
            let section = raw_data.get(category).unwrap_or(&Value::Null);
            (category.clone(), count_category(category, section))
        })
        .collect();
    let manifest = plan(&counts);

    let mut posts: Vec<CanonicalPost> = Vec::new();
    for category in categories {
        let section = raw_data.get(category).unwrap_or(&Value::Null);
        let items = extract_category_items(category, section);
        let cap = manifest
            .categories
            .get(category)
            .map_or(0, |sample| sample.sampled);
        posts.extend(normalize_category(category, take_sample(&items, cap)));
    }

    tracing::info!(
        provider = provider.name(),
        model = %config.model,
        total_available = manifest.total_available,
        total_sampled = posts.len(),
        "running analysis"
    );

    let rendered = prompt::build(&posts, &manifest);
    let outcome = provider.generate(&rendered, config).await?;

    let profile = FamilyProfile::for_model(&outcome.model);
    let raw = RawModelResponse {
        content: outcome.content,
        provider: outcome.provider,
        model: outcome.model,
        model_family: outcome.model_family,
        latency_ms: outcome.latency_ms,
        cost_tier: profile.cost_tier.to_owned(),
        capabilities: profile.capabilities.iter().map(|&c| c.to_owned()).collect(),
    };

    let total_available = manifest.total_available;
    let result = normalize(&raw, total_available);
    Ok(assemble::finalize(result, manifest, total_available))
}

/// One comparison arm's result: either a full analysis or the error that
/// stopped it. Arms never abort each other.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArmOutcome {
    pub provider: String,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<AnalysisResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ArmOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.result.is_some()
    }
}

/// Aggregate statistics across comparison arms. Latency fields are absent
/// when every arm failed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonSummary {
    pub providers_tested: usize,
    pub all_successful: bool,
    pub success_by_provider: BTreeMap<String, bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fastest_provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fastest_latency_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_latency_ms: Option<f64>,
    pub latency_by_provider: BTreeMap<String, u64>,
}

/// All arms plus the cross-arm summary.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    pub arms: Vec<ArmOutcome>,
    pub summary: ComparisonSummary,
}

/// Run the same analysis once per `(provider, config)` arm, concurrently.
///
/// Each arm is independent: a failed arm is captured as an error string in
/// its [`ArmOutcome`] while the siblings proceed. The report is total.
pub async fn run_comparison<P: ModelProvider>(
    arms: &[(P, ModelConfig)],
    raw_data: &Value,
    categories: &[String],
) -> ComparisonReport {
    let runs = arms.iter().map(|(provider, config)| async move {
        let outcome = run_analysis(provider, raw_data, categories, config).await;
        match outcome {
            Ok(result) => ArmOutcome {
                provider: provider.name().to_owned(),
                model: config.model.clone(),
                result: Some(result),
                error: None,
            },
            Err(e) => {
                tracing::warn!(
                    provider = provider.name(),
                    model = %config.model,
                    error = %e,
                    "comparison arm failed"
                );
                ArmOutcome {
                    provider: provider.name().to_owned(),
                    model: config.model.clone(),
                    result: None,
                    error: Some(e.to_string()),
                }
            }
        }
    });

    let arms = futures::future::join_all(runs).await;
    let summary = summarize(&arms);
    ComparisonReport { arms, summary }
}

#[allow(clippy::cast_precision_loss)]
fn summarize(arms: &[ArmOutcome]) -> ComparisonSummary {
    let success_by_provider: BTreeMap<String, bool> = arms
        .iter()
        .map(|arm| (arm.provider.clone(), arm.is_success()))
        .collect();

    let latency_by_provider: BTreeMap<String, u64> = arms
        .iter()
        .filter_map(|arm| {
            arm.result
                .as_ref()
                .map(|r| (arm.provider.clone(), r.model_info.latency_ms))
        })
        .collect();

    let fastest = latency_by_provider
        .iter()
        .min_by_key(|(_, &latency)| latency)
        .map(|(provider, &latency)| (provider.clone(), latency));

    let average_latency_ms = if latency_by_provider.is_empty() {
        None
    } else {
        let sum: u64 = latency_by_provider.values().sum();
        Some(sum as f64 / latency_by_provider.len() as f64)
    };

    ComparisonSummary {
        providers_tested: arms.len(),
        all_successful: !arms.is_empty() && arms.iter().all(ArmOutcome::is_success),
        success_by_provider,
        fastest_provider: fastest.as_ref().map(|(p, _)| p.clone()),
        fastest_latency_ms: fastest.map(|(_, latency)| latency),
        average_latency_ms,
        latency_by_provider,
    }
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
