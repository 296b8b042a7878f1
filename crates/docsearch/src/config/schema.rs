use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_SUGGESTION_MIN_CHARS: usize = 2;

/// Client settings for reaching the document/search service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the API, including the `/api` prefix.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Shortest prefix, in characters, that triggers a suggestions request.
    #[serde(default = "default_suggestion_min_chars")]
    pub suggestion_min_chars: usize,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_suggestion_min_chars() -> usize {
    DEFAULT_SUGGESTION_MIN_CHARS
}

fn default_user_agent() -> String {
    format!("docsearch/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            suggestion_min_chars: default_suggestion_min_chars(),
            user_agent: default_user_agent(),
        }
    }
}

impl ClientConfig {
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Checks the same rules `load_config` enforces. Call again after
    /// overriding fields in code or from the environment.
    pub fn validate(&self) -> Result<(), ConfigError> {
        super::loader::validate_config(self)
    }

    /// Overrides the base URL from `DOCSEARCH_API_URL` when it is set and non-empty.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(super::loader::API_URL_ENV) {
            if !url.trim().is_empty() {
                log::debug!("Using API base URL from {}", super::loader::API_URL_ENV);
                self.api_base_url = url.trim().to_string();
            }
        }
    }
}
