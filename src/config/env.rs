//! Environment overrides.
//!
//! `OPENAI_KIT_*` variables take precedence over the config file.
//! `OPENAI_API_KEY` is accepted as a fallback key source.

use crate::error::ConfigError;

use super::defaults::{
    ENV_API_KEY, ENV_API_KEY_FALLBACK, ENV_BASE_URL, ENV_MODEL, ENV_TIMEOUT_SECS,
};
use super::ClientConfig;

pub(super) fn apply_env_overrides<FEnv>(
    config: &mut ClientConfig,
    env_lookup: &FEnv,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(key) = api_key_override_with(env_lookup) {
        config.api_key = key;
    }
    if let Some(url) = non_empty(env_lookup(ENV_BASE_URL)) {
        config.base_url = url;
    }
    if let Some(model) = non_empty(env_lookup(ENV_MODEL)) {
        // `ModelType` parsing is infallible.
        config.model = model.parse().unwrap_or_default();
    }
    if let Some(timeout) = non_empty(env_lookup(ENV_TIMEOUT_SECS)) {
        config.timeout_secs = Some(parse_timeout_secs(ENV_TIMEOUT_SECS, &timeout)?);
    }
    Ok(())
}

/// Runtime API key from env vars, canonical name first.
fn api_key_override_with<FEnv>(env_lookup: &FEnv) -> Option<String>
where
    FEnv: Fn(&str) -> Option<String>,
{
    non_empty(env_lookup(ENV_API_KEY)).or_else(|| non_empty(env_lookup(ENV_API_KEY_FALLBACK)))
}

/// Parse whole seconds, clamped to at least one second.
fn parse_timeout_secs(source: &str, raw: &str) -> Result<u64, ConfigError> {
    let parsed = raw.trim().parse::<u64>().map_err(|_| {
        ConfigError::Invalid(format!(
            "invalid {source} value `{raw}`: expected positive integer seconds"
        ))
    })?;
    Ok(parsed.max(1))
}

pub(super) fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
