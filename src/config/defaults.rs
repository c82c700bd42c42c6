//! Default configuration constants.
//!
//! Keeping defaults in one module lets tests and the loader share the same
//! literals.

/// Environment variable holding the required API credential.
pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";
/// Default Messages API base URL.
pub(super) const DEFAULT_API_BASE_URL: &str = "https://api.anthropic.com";
/// Default model id for analysis requests.
pub(super) const DEFAULT_MODEL_ID: &str = "claude-sonnet-4-5";
/// Upper bound on generated tokens per analysis.
pub(super) const DEFAULT_MAX_TOKENS: u32 = 2000;
/// Default timeout for the model API request.
pub(super) const DEFAULT_API_TIMEOUT_SECS: u64 = 120;
/// Wire version sent in the `anthropic-version` header.
pub(super) const DEFAULT_API_VERSION: &str = "2023-06-01";
/// Column threshold above which result lines are re-wrapped.
pub(super) const DEFAULT_DISPLAY_WIDTH: usize = 100;
