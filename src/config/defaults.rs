//! Default configuration constants.

/// Local config file name, looked up in the working directory.
pub(super) const CONFIG_FILE_NAME: &str = "openai-kit.toml";
/// Directory under the config root holding the global config file.
pub(super) const CONFIG_DIR_NAME: &str = "openai-kit";

pub(super) const ENV_API_KEY: &str = "OPENAI_KIT_API_KEY";
/// Fallback key variable shared with other OpenAI tooling.
pub(super) const ENV_API_KEY_FALLBACK: &str = "OPENAI_API_KEY";
pub(super) const ENV_BASE_URL: &str = "OPENAI_KIT_BASE_URL";
pub(super) const ENV_MODEL: &str = "OPENAI_KIT_MODEL";
pub(super) const ENV_TIMEOUT_SECS: &str = "OPENAI_KIT_TIMEOUT_SECS";
