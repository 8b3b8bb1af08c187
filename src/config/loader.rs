//! Top-level config loading pipeline.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::defaults::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use super::env::{apply_env_overrides, non_empty};
use super::types::FileConfig;
use super::ClientConfig;

/// Load configuration from disk and environment.
///
/// `path_override` is an explicit config file path (from --config flag).
pub fn load_config(path_override: Option<&str>) -> Result<ClientConfig, ConfigError> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
    )
}

pub(super) fn load_config_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<ClientConfig, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let (text, source) = read_config_text(path_override, &read_file, &config_root)?;
    tracing::debug!(path = ?source.path(), "config source selected");
    let parsed: FileConfig = toml::from_str(&text)?;
    let mut config = resolve_file_config(parsed, &env_lookup)?;
    apply_env_overrides(&mut config, &env_lookup)?;
    Ok(config)
}

#[derive(Debug, Clone)]
enum ConfigSource {
    /// Config loaded from explicit `--config` path.
    Explicit(PathBuf),
    /// Config loaded from `./openai-kit.toml`.
    Local,
    /// Config loaded from the global config directory.
    Global(PathBuf),
    /// No file found; built-in defaults were used.
    BuiltInDefaults,
}

impl ConfigSource {
    fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(path) | Self::Global(path) => Some(path),
            Self::Local => Some(Path::new(CONFIG_FILE_NAME)),
            Self::BuiltInDefaults => None,
        }
    }
}

/// Read config text from the highest-precedence available source.
fn read_config_text<FRead, FRoot>(
    path_override: Option<&str>,
    read_file: &FRead,
    config_root: &FRoot,
) -> Result<(String, ConfigSource), ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    // An explicit path must exist; the implicit locations are best-effort.
    if let Some(p) = path_override {
        let path = PathBuf::from(p);
        let text = read_file(&path)?;
        return Ok((text, ConfigSource::Explicit(path)));
    }
    if let Ok(text) = read_file(Path::new(CONFIG_FILE_NAME)) {
        return Ok((text, ConfigSource::Local));
    }
    if let Some(dir) = config_root() {
        let global = dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);
        if let Ok(text) = read_file(&global) {
            return Ok((text, ConfigSource::Global(global)));
        }
    }
    Ok((String::new(), ConfigSource::BuiltInDefaults))
}

fn resolve_file_config<FEnv>(parsed: FileConfig, env_lookup: &FEnv) -> Result<ClientConfig, ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    let mut config = ClientConfig::default();

    let inline_key = non_empty(parsed.api_key);
    let key_env = non_empty(parsed.api_key_env);
    match (inline_key, key_env) {
        (Some(_), Some(_)) => {
            return Err(ConfigError::Invalid(
                "api key source conflict: set only one of `api_key` or `api_key_env`".into(),
            ));
        }
        (Some(key), None) => config.api_key = key,
        (None, Some(var)) => {
            if let Some(key) = non_empty(env_lookup(&var)) {
                config.api_key = key;
            } else {
                tracing::warn!(var = %var, "api_key_env names an unset variable");
            }
        }
        (None, None) => {}
    }

    if let Some(url) = non_empty(parsed.base_url) {
        config.base_url = url;
    }
    if let Some(model) = non_empty(parsed.model) {
        config.model = model.parse().unwrap_or_default();
    }
    if let Some(secs) = parsed.timeout_secs {
        config.timeout_secs = Some(secs.max(1));
    }
    if let Some(policy) = parsed.error_bodies {
        config.error_bodies = policy;
    }
    Ok(config)
}

/// `$XDG_CONFIG_HOME`, else `~/.config`, else the platform config dir.
pub fn config_root_dir() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    dirs::home_dir()
        .map(|home| home.join(".config"))
        .or_else(dirs::config_dir)
}
