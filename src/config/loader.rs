use crate::config::config::AppConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Prefix for structured environment overrides, e.g. `MOOD_TRACKER_LLM__MODEL`.
pub const ENV_PREFIX: &str = "MOOD_TRACKER_";

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load from the default config file path
    ///
    /// Precedence, lowest first:
    /// 1. built-in defaults
    /// 2. ./mood-tracker.toml
    /// 3. `MOOD_TRACKER_*` environment variables
    /// 4. `PORT` and `CLAUDE_API_KEY`
    pub fn load() -> Result<AppConfig, figment::Error> {
        Self::figment(&default_config_path()).extract()
    }

    /// Load from `path`
    pub fn load_from(path: PathBuf) -> Result<AppConfig, figment::Error> {
        Self::figment(&path).extract()
    }

    fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .merge(Env::raw().only(&["PORT"]).map(|_| "server.port".into()))
            .merge(
                Env::raw()
                    .only(&["CLAUDE_API_KEY"])
                    .map(|_| "llm.api_key".into()),
            )
    }

    /// Validate a loaded configuration
    pub fn validate(config: &AppConfig) -> Result<(), ConfigValidationError> {
        if config.server.port == 0 {
            return Err(ConfigValidationError::InvalidPort);
        }

        match config.storage.backend.as_str() {
            "json_file" => {
                if config.storage.data_file.as_os_str().is_empty() {
                    return Err(ConfigValidationError::MissingDataFile);
                }
            }
            "memory" => {}
            other => {
                return Err(ConfigValidationError::UnknownBackend(other.to_string()));
            }
        }

        if config.llm.max_tokens == 0 {
            return Err(ConfigValidationError::InvalidMaxTokens);
        }

        if config.llm.timeout_secs == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if config.catalog.activities.is_empty() {
            return Err(ConfigValidationError::EmptyCatalog);
        }

        let mut seen = HashSet::new();
        for activity in &config.catalog.activities {
            if activity.trim().is_empty() {
                return Err(ConfigValidationError::BlankActivity);
            }
            if !seen.insert(activity.as_str()) {
                return Err(ConfigValidationError::DuplicateActivity(activity.clone()));
            }
        }

        Ok(())
    }
}

/// Configuration validation errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigValidationError {
    #[error("server port must be greater than 0")]
    InvalidPort,

    #[error("storage.data_file is required for the json_file backend")]
    MissingDataFile,

    #[error("unknown storage backend: {0}")]
    UnknownBackend(String),

    #[error("llm.max_tokens must be greater than 0")]
    InvalidMaxTokens,

    #[error("llm.timeout_secs must be greater than 0")]
    InvalidTimeout,

    #[error("activity catalog is empty")]
    EmptyCatalog,

    #[error("activity catalog contains a blank name")]
    BlankActivity,

    #[error("activity catalog lists '{0}' more than once")]
    DuplicateActivity(String),
}

/// Default config file path
pub fn default_config_path() -> PathBuf {
    PathBuf::from("mood-tracker.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults_without_file_or_env() {
        Jail::expect_with(|_jail| {
            let config = ConfigLoader::load()?;
            assert_eq!(config.server.port, 3001);
            assert!(config.llm.credential().is_none());
            Ok(())
        });
    }

    #[test]
    fn test_file_then_env_precedence() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "mood-tracker.toml",
                r#"
                [server]
                port = 4000

                [llm]
                model = "from-file"
                "#,
            )?;
            jail.set_env("MOOD_TRACKER_LLM__MODEL", "from-env");

            let config = ConfigLoader::load()?;
            assert_eq!(config.server.port, 4000);
            assert_eq!(config.llm.model, "from-env");
            Ok(())
        });
    }

    #[test]
    fn test_legacy_port_and_key_variables() {
        Jail::expect_with(|jail| {
            jail.set_env("PORT", "5005");
            jail.set_env("CLAUDE_API_KEY", "sk-test");

            let config = ConfigLoader::load()?;
            assert_eq!(config.server.port, 5005);
            assert_eq!(config.llm.credential(), Some("sk-test"));
            Ok(())
        });
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = AppConfig::default();
        assert!(ConfigLoader::validate(&config).is_ok());

        config.storage.backend = "postgres".into();
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigValidationError::UnknownBackend(_))
        ));

        let mut config = AppConfig::default();
        config.catalog.activities.push("Exercise".into());
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigValidationError::DuplicateActivity(name)) if name == "Exercise"
        ));

        let mut config = AppConfig::default();
        config.llm.timeout_secs = 0;
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigValidationError::InvalidTimeout)
        ));
    }
}
