//! Configuration data model.

use super::defaults::{
    DEFAULT_API_BASE_URL, DEFAULT_API_TIMEOUT_SECS, DEFAULT_API_VERSION, DEFAULT_DISPLAY_WIDTH,
    DEFAULT_MAX_TOKENS, DEFAULT_MODEL_ID,
};

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub api: ApiConfig,
    pub network: NetworkConfig,
    pub display: DisplayConfig,
}

/// Resolved API connection settings used by the runtime HTTP client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
    /// Value of the `anthropic-version` request header.
    pub version: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.into(),
            api_key: String::new(),
            model: DEFAULT_MODEL_ID.into(),
            max_tokens: DEFAULT_MAX_TOKENS,
            version: DEFAULT_API_VERSION.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NetworkConfig {
    pub api_timeout_secs: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            api_timeout_secs: DEFAULT_API_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DisplayConfig {
    /// Result lines longer than this are re-wrapped.
    pub width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_DISPLAY_WIDTH,
        }
    }
}
