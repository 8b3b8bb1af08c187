//! Configuration data model.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::model_type::ModelType;
use crate::network::DEFAULT_BASE_URL;

/// What the service layer does with the body of a non-2xx response.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ErrorBodyPolicy {
    /// Decode the body as an API error envelope when possible.
    #[default]
    Surface,
    /// Report only the status code.
    Discard,
}

/// Resolved client settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    /// Empty when no key source was configured.
    pub api_key: String,
    pub model: ModelType,
    /// `None` inherits the HTTP client's default (no timeout).
    pub timeout_secs: Option<u64>,
    pub error_bodies: ErrorBodyPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            model: ModelType::default(),
            timeout_secs: None,
            error_bodies: ErrorBodyPolicy::default(),
        }
    }
}

impl ClientConfig {
    /// The API key, or an error naming where to set one.
    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        let key = self.api_key.trim();
        if key.is_empty() {
            return Err(ConfigError::Invalid(format!(
                "no API key configured; set `{}` (or `{}`) or `api_key` in {}",
                super::defaults::ENV_API_KEY,
                super::defaults::ENV_API_KEY_FALLBACK,
                super::defaults::CONFIG_FILE_NAME,
            )));
        }
        Ok(key)
    }
}

/// On-disk TOML shape. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct FileConfig {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    /// Name of an environment variable holding the key.
    pub api_key_env: Option<String>,
    pub model: Option<String>,
    pub timeout_secs: Option<u64>,
    pub error_bodies: Option<ErrorBodyPolicy>,
}
