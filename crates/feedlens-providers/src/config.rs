/// Configuration for the HTTP provider backend.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub model: String,
}

impl ProviderConfig {
    /// Build config from environment variables.
    ///
    /// `FEEDLENS_PROVIDER_URL` and `FEEDLENS_MODEL` are required;
    /// `FEEDLENS_PROVIDER_API_KEY` is optional (local backends often run
    /// unauthenticated).
    ///
    /// # Errors
    ///
    /// Returns an error string listing any missing required variables.
    pub fn from_env() -> Result<Self, String> {
        let mut missing = Vec::new();

        let get = |key: &str| -> Option<String> { std::env::var(key).ok() };

        let base_url = get("FEEDLENS_PROVIDER_URL");
        let model = get("FEEDLENS_MODEL");
        let api_key = get("FEEDLENS_PROVIDER_API_KEY");

        if base_url.is_none() {
            missing.push("FEEDLENS_PROVIDER_URL");
        }
        if model.is_none() {
            missing.push("FEEDLENS_MODEL");
        }

        if !missing.is_empty() {
            return Err(format!("missing provider env vars: {}", missing.join(", ")));
        }

        Ok(Self {
            base_url: base_url.unwrap_or_default(),
            api_key,
            model: model.unwrap_or_default(),
        })
    }
}
