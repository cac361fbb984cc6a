//! Analysis data model.
//!
//! The serialized shape of [`AnalysisResult`] is a frontend contract: field
//! names and casing must stay exactly as they are (camelCase result body,
//! snake_case `model_info` internals, `HIGH`/`Medium` enum casing asymmetry).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Media kind of a canonical post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Photo,
    Video,
    Reel,
    Comment,
    Profile,
    Unknown,
}

impl MediaType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Photo => "photo",
            Self::Video => "video",
            Self::Reel => "reel",
            Self::Comment => "comment",
            Self::Profile => "profile",
            Self::Unknown => "unknown",
        }
    }

    /// Parse a freeform media-type string from export data.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "photo" => Self::Photo,
            "video" => Self::Video,
            "reel" => Self::Reel,
            "comment" => Self::Comment,
            "profile" => Self::Profile,
            _ => Self::Unknown,
        }
    }
}

/// How the user interacted with a piece of content. Closed set — never
/// freeform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionType {
    Saved,
    Liked,
    Commented,
    Posted,
    Following,
}

impl InteractionType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Saved => "saved",
            Self::Liked => "liked",
            Self::Commented => "commented",
            Self::Posted => "posted",
            Self::Following => "following",
        }
    }
}

/// One interaction record in the unified internal shape, regardless of which
/// export category it came from. Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalPost {
    pub id: String,
    pub author: String,
    pub caption: String,
    pub media_type: MediaType,
    pub interaction_type: InteractionType,
    /// ISO-8601 timestamp, or the sentinel `"unknown"`.
    pub saved_at: String,
    pub hashtags: Vec<String>,
    pub source_category: String,
}

/// Which sampling sizing rule fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyTier {
    Fallback,
    Small,
    Medium,
    Large,
    Max,
}

/// Per-category accounting of what was available vs. actually sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySample {
    pub available: usize,
    pub sampled: usize,
}

/// Audit record of the sampling pass. Embedded verbatim into the final
/// result metadata; never mutated after computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SamplingManifest {
    pub categories: BTreeMap<String, CategorySample>,
    pub total_available: usize,
    pub total_sampled: usize,
    pub sample_per_category: usize,
    pub strategy_tier: StrategyTier,
}

/// Confidence classification for a goal area, derived from its percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EvidenceLevel {
    High,
    Medium,
    Low,
}

impl EvidenceLevel {
    /// >=40 high, >=20 medium, else low.
    #[must_use]
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 40.0 {
            Self::High
        } else if percentage >= 20.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Goal potential for charting. Thresholds deliberately differ from
/// [`EvidenceLevel`] — the frontend depends on both scales as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum GoalPotential {
    High,
    Medium,
    Low,
}

impl GoalPotential {
    /// >=30 high, >=15 medium, else low.
    #[must_use]
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 30.0 {
            Self::High
        } else if percentage >= 15.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Timeframe of a sub-goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoalTerm {
    #[serde(rename = "30-day")]
    ThirtyDay,
    #[serde(rename = "90-day")]
    NinetyDay,
    #[serde(rename = "1-year")]
    OneYear,
}

impl GoalTerm {
    /// All terms in canonical order. Every goal area carries exactly one
    /// goal per term.
    pub const ALL: [Self; 3] = [Self::ThirtyDay, Self::NinetyDay, Self::OneYear];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ThirtyDay => "30-day",
            Self::NinetyDay => "90-day",
            Self::OneYear => "1-year",
        }
    }
}

/// One timeframed sub-goal inside a goal area.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub term: GoalTerm,
    pub title: String,
    pub description: String,
}

/// One extracted behavioral/goal theme.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalArea {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub evidence: EvidenceLevel,
    pub percentage: f64,
    pub save_count: u32,
    pub key_accounts: Vec<String>,
    pub description: String,
    pub goals: Vec<Goal>,
}

/// A detected habit or trend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehavioralPattern {
    #[serde(rename = "type")]
    pub pattern_type: String,
    pub title: String,
    pub description: String,
    pub data: serde_json::Map<String, serde_json::Value>,
    pub insight: String,
}

/// Normalized view over goal areas for charting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterestDistribution {
    pub category: String,
    pub percentage: f64,
    pub goal_potential: GoalPotential,
}

/// Relative cost band of the model that produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostTier {
    VeryLow,
    Low,
    Medium,
    High,
}

impl CostTier {
    /// Parse the provider-supplied tier string, defaulting to medium for
    /// anything unrecognized.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "very_low" => Self::VeryLow,
            "low" => Self::Low,
            "high" => Self::High,
            _ => Self::Medium,
        }
    }
}

/// Provider metrics passed through untouched into the result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    pub provider: String,
    pub model: String,
    pub latency_ms: u64,
    pub cost_tier: CostTier,
    pub capabilities: Vec<String>,
}

/// The final analysis artifact. Always well-formed, even when parsing the
/// model output failed entirely (the fallback path fabricates one goal area).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub total_posts: usize,
    pub analysis_date: String,
    pub content_id: String,
    pub model_info: ModelInfo,
    pub goal_areas: Vec<GoalArea>,
    pub behavioral_patterns: Vec<BehavioralPattern>,
    pub interest_distribution: Vec<InterestDistribution>,
    /// Untouched provider text, retained for audit/debugging.
    pub raw_model_output: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sampling_manifest: Option<SamplingManifest>,
}
