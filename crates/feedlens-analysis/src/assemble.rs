//! Final result assembly.
//!
//! The response normalizer produces a self-contained result; this last step
//! stamps on the run-level facts it could not know: the sampling manifest
//! and the pre-sampling post total.

use crate::types::{AnalysisResult, SamplingManifest};

/// Merge run-level metadata into a normalized result.
///
/// Pure with respect to the analysis content: goal areas, patterns, and
/// distributions pass through untouched. The timestamp and content id are
/// refreshed so they describe the assembled artifact, not the parse.
#[must_use]
pub fn finalize(
    mut result: AnalysisResult,
    manifest: SamplingManifest,
    total_posts: usize,
) -> AnalysisResult {
    result.total_posts = total_posts;
    result.sampling_manifest = Some(manifest);
    result.analysis_date = chrono::Utc::now().to_rfc3339();
    result.content_id = uuid::Uuid::new_v4().to_string();
    result
}
