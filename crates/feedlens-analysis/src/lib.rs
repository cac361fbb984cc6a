//! Analysis core for feedlens.
//!
//! Turns a raw Instagram data export into a frontend-ready behavioral
//! analysis: plans a bounded sample across data categories, normalizes the
//! heterogeneous records into canonical posts, renders one analysis prompt,
//! and — the hard part — parses the model's free-form prose back into a
//! strict [`AnalysisResult`] schema with guaranteed graceful degradation.
//! A result is always produced; only provider-capability failures propagate.

pub mod assemble;
pub mod error;
pub mod pipeline;
pub mod posts;
pub mod prompt;
pub mod response;
pub mod sampling;
pub mod types;

mod extract;
mod sections;
mod tables;

pub use error::AnalysisError;
pub use pipeline::{run_analysis, run_comparison, ArmOutcome, ComparisonReport, ComparisonSummary};
pub use response::{normalize, RawModelResponse};
pub use sampling::plan;
pub use types::{
    AnalysisResult, BehavioralPattern, CanonicalPost, CategorySample, CostTier, EvidenceLevel,
    Goal, GoalArea, GoalPotential, GoalTerm, InteractionType, InterestDistribution, MediaType,
    ModelInfo, SamplingManifest, StrategyTier,
};
