//! Configuration loading from environment variables.
//!
//! Resolution order (highest wins):
//! 1. `EMPATH_*` overrides (`EMPATH_MODEL`, `EMPATH_BASE_URL`, ...)
//! 2. Built-in defaults
//!
//! `ANTHROPIC_API_KEY` is mandatory and checked before anything else so the
//! run can fail before prompting the user.

use crate::error::ConfigError;

mod defaults;
mod env;
mod types;

pub use defaults::API_KEY_ENV;
pub use types::{ApiConfig, Config, DisplayConfig, NetworkConfig};

use env::{api_key_with, apply_runtime_env_overrides, color_enabled_with};

/// Load configuration from the process environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_with(|name| std::env::var(name).ok())
}

/// Whether status output should use ANSI color (`NO_COLOR` unset or empty).
pub fn color_enabled() -> bool {
    color_enabled_with(&|name: &str| std::env::var(name).ok())
}

/// Load configuration using an injectable environment lookup.
pub fn load_config_with<FEnv>(env_lookup: FEnv) -> Result<Config, ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    let mut config = Config::default();
    config.api.api_key = api_key_with(&env_lookup)?;
    apply_runtime_env_overrides(&mut config, &env_lookup)?;
    Ok(config)
}
