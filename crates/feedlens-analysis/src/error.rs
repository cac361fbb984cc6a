use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("provider call failed: {0}")]
    Provider(#[from] feedlens_providers::ProviderError),

    #[error("no content in model response")]
    EmptyContent,
}
