use serde::{Deserialize, Serialize};

/// Name of the environment variable selecting the backend.
pub const BASE_URL_ENV: &str = "ESTATE_API_BASE_URL";

/// Local development backend used when nothing is configured.
const DEFAULT_BASE_URL: &str = "http://localhost:4000";

/// Where the listing backend lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Base URL of the REST backend, held without a trailing slash.
    pub base_url: String,
}

impl GatewayConfig {
    /// Config for an explicit backend address. Trailing slashes are trimmed
    /// so path joining stays predictable.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Read the backend address from `ESTATE_API_BASE_URL`, falling back to
    /// the local development server when unset.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
