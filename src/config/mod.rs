//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. Environment variables (`OPENAI_KIT_API_KEY`, `OPENAI_KIT_BASE_URL`,
//!    `OPENAI_KIT_MODEL`, `OPENAI_KIT_TIMEOUT_SECS`), with `OPENAI_API_KEY`
//!    as a key fallback.
//! 2. TOML file specified via --config CLI flag
//! 3. ./openai-kit.toml in the current directory
//! 4. $XDG_CONFIG_HOME/openai-kit/openai-kit.toml (or
//!    ~/.config/openai-kit/openai-kit.toml)
//! 5. Built-in defaults

mod defaults;
mod env;
mod loader;
mod types;

pub use loader::{config_root_dir, load_config};
pub use types::{ClientConfig, ErrorBodyPolicy};

#[cfg(test)]
mod tests {
    use super::loader::load_config_from_sources;
    use super::*;
    use crate::error::ConfigError;
    use crate::model_type::{ChatModel, ModelType};
    use crate::testsupport::TestTempDir;
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};

    fn load_with(
        path_override: Option<&str>,
        files: &[(&str, &str)],
        env: &[(&str, &str)],
    ) -> Result<ClientConfig, ConfigError> {
        let files: HashMap<PathBuf, String> = files
            .iter()
            .map(|(p, t)| (PathBuf::from(p), t.to_string()))
            .collect();
        let env: HashMap<String, String> = env
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        load_config_from_sources(
            path_override,
            |path: &Path| {
                files.get(path).cloned().ok_or_else(|| {
                    std::io::Error::new(std::io::ErrorKind::NotFound, "missing")
                })
            },
            |name: &str| env.get(name).cloned(),
            || Some(PathBuf::from("/home/test/.config")),
        )
    }

    #[test]
    fn defaults_are_sensible() {
        let c = load_with(None, &[], &[]).unwrap();
        assert_eq!(c, ClientConfig::default());
        assert_eq!(c.base_url, "https://api.openai.com");
        assert_eq!(c.model, ModelType::Chat(ChatModel::Gpt35Turbo));
        assert_eq!(c.timeout_secs, None);
        assert_eq!(c.error_bodies, ErrorBodyPolicy::Surface);
        assert!(c.require_api_key().is_err());
    }

    #[test]
    fn local_file_wins_over_global() {
        let c = load_with(
            None,
            &[
                ("openai-kit.toml", "model = \"gpt-4\""),
                (
                    "/home/test/.config/openai-kit/openai-kit.toml",
                    "model = \"gpt-4-32k\"",
                ),
            ],
            &[],
        )
        .unwrap();
        assert_eq!(c.model, ModelType::Chat(ChatModel::Gpt4));
    }

    #[test]
    fn global_file_is_used_when_no_local_file() {
        let c = load_with(
            None,
            &[(
                "/home/test/.config/openai-kit/openai-kit.toml",
                "api_key = \"sk-global\"\nerror_bodies = \"discard\"",
            )],
            &[],
        )
        .unwrap();
        assert_eq!(c.require_api_key().unwrap(), "sk-global");
        assert_eq!(c.error_bodies, ErrorBodyPolicy::Discard);
    }

    #[test]
    fn explicit_path_must_exist() {
        let err = load_with(Some("/nope.toml"), &[], &[]).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)), "got: {err}");
    }

    #[test]
    fn env_overrides_file_values() {
        let c = load_with(
            Some("custom.toml"),
            &[(
                "custom.toml",
                "api_key = \"sk-file\"\nbase_url = \"http://file\"\nmodel = \"gpt-4\"",
            )],
            &[
                ("OPENAI_KIT_API_KEY", "sk-env"),
                ("OPENAI_KIT_BASE_URL", "http://env"),
                ("OPENAI_KIT_MODEL", "my-finetune"),
                ("OPENAI_KIT_TIMEOUT_SECS", "0"),
            ],
        )
        .unwrap();
        assert_eq!(c.api_key, "sk-env");
        assert_eq!(c.base_url, "http://env");
        assert_eq!(c.model, ModelType::Other("my-finetune".into()));
        assert_eq!(c.timeout_secs, Some(1));
    }

    #[test]
    fn openai_api_key_is_a_fallback() {
        let c = load_with(None, &[], &[("OPENAI_API_KEY", "sk-shared")]).unwrap();
        assert_eq!(c.api_key, "sk-shared");

        let c = load_with(
            None,
            &[],
            &[("OPENAI_API_KEY", "sk-shared"), ("OPENAI_KIT_API_KEY", "sk-kit")],
        )
        .unwrap();
        assert_eq!(c.api_key, "sk-kit");
    }

    #[test]
    fn api_key_env_reads_named_variable() {
        let c = load_with(
            None,
            &[("openai-kit.toml", "api_key_env = \"TEAM_KEY\"")],
            &[("TEAM_KEY", "sk-team")],
        )
        .unwrap();
        assert_eq!(c.api_key, "sk-team");
    }

    #[test]
    fn conflicting_key_sources_are_rejected() {
        let err = load_with(
            None,
            &[("openai-kit.toml", "api_key = \"a\"\napi_key_env = \"B\"")],
            &[],
        )
        .unwrap_err();
        assert!(err.to_string().contains("api key source conflict"), "got: {err}");
    }

    #[test]
    fn invalid_timeout_env_is_rejected() {
        let err = load_with(None, &[], &[("OPENAI_KIT_TIMEOUT_SECS", "soon")]).unwrap_err();
        assert!(err.to_string().contains("OPENAI_KIT_TIMEOUT_SECS"), "got: {err}");
    }

    #[test]
    fn malformed_toml_is_reported() {
        let err = load_with(None, &[("openai-kit.toml", "model = [")], &[]).unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)), "got: {err}");
    }

    #[test]
    fn load_config_reads_real_file() {
        let dir = TestTempDir::new("config");
        let path = dir.write_text("openai-kit.toml", "timeout_secs = 30\n");
        let c = load_config(Some(path.to_string_lossy().as_ref())).unwrap();
        assert_eq!(c.timeout_secs, Some(30));
    }
}
