//! Environment override handling.
//!
//! The credential lives in `ANTHROPIC_API_KEY`; everything else is an optional
//! `EMPATH_*` override on top of the built-in defaults.

use crate::error::ConfigError;

use super::defaults::API_KEY_ENV;
use super::Config;

/// Resolve the required credential, treating blank values as absent.
pub(super) fn api_key_with<FEnv>(env_lookup: &FEnv) -> Result<String, ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    non_blank(env_lookup, API_KEY_ENV).ok_or(ConfigError::MissingCredential(API_KEY_ENV))
}

pub(super) fn apply_runtime_env_overrides<FEnv>(
    config: &mut Config,
    env_lookup: &FEnv,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(url) = non_blank(env_lookup, "EMPATH_BASE_URL") {
        config.api.base_url = validate_base_url(&url)?;
    }
    if let Some(model) = non_blank(env_lookup, "EMPATH_MODEL") {
        config.api.model = model;
    }
    if let Some(max_tokens) = non_blank(env_lookup, "EMPATH_MAX_TOKENS") {
        config.api.max_tokens = match max_tokens.parse::<u32>() {
            Ok(parsed) if parsed > 0 => parsed,
            _ => {
                return Err(ConfigError::Invalid(format!(
                    "invalid EMPATH_MAX_TOKENS value `{max_tokens}`: expected positive integer"
                )))
            }
        };
    }
    if let Some(timeout) = non_blank(env_lookup, "EMPATH_API_TIMEOUT_SECS") {
        // Clamp to at least 1 second to avoid "no-timeout" accidental behavior.
        let parsed = timeout.parse::<u64>().map_err(|_| {
            ConfigError::Invalid(format!(
                "invalid EMPATH_API_TIMEOUT_SECS value `{timeout}`: expected positive integer seconds"
            ))
        })?;
        config.network.api_timeout_secs = parsed.max(1);
    }
    Ok(())
}

/// Colored output unless `NO_COLOR` is set to a non-empty value.
///
/// Resolved apart from [`Config`] so errors raised while loading the config
/// are rendered consistently.
pub(super) fn color_enabled_with<FEnv>(env_lookup: &FEnv) -> bool
where
    FEnv: Fn(&str) -> Option<String>,
{
    non_blank(env_lookup, "NO_COLOR").is_none()
}

/// Accept only absolute http(s) URLs with a host.
fn validate_base_url(raw: &str) -> Result<String, ConfigError> {
    let parsed = reqwest::Url::parse(raw)
        .map_err(|err| ConfigError::Invalid(format!("invalid EMPATH_BASE_URL `{raw}`: {err}")))?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(ConfigError::Invalid(format!(
                "invalid EMPATH_BASE_URL `{raw}`: unsupported scheme `{other}` (expected http or https)"
            )));
        }
    }
    if parsed.host_str().is_none() {
        return Err(ConfigError::Invalid(format!(
            "invalid EMPATH_BASE_URL `{raw}`: missing host"
        )));
    }
    Ok(raw.trim_end_matches('/').to_string())
}

fn non_blank<FEnv>(env_lookup: &FEnv, name: &str) -> Option<String>
where
    FEnv: Fn(&str) -> Option<String>,
{
    env_lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
