use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use thiserror::Error;

use crate::domain::models::config::Config;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid max_iterations: {0}. Must be at least 1")]
    InvalidMaxIterations(u32),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Model name for {0} cannot be empty")]
    EmptyModelName(&'static str),

    #[error("Ollama base URL cannot be empty")]
    EmptyBaseUrl,

    #[error("Invalid timeout: {0}. Must be at least 1 second")]
    InvalidTimeout(u64),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .sofai/config.yaml (project config)
    /// 3. .sofai/local.yaml (local overrides, optional)
    /// 4. Environment variables (SOFAI_* prefix, highest priority)
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(".sofai/config.yaml"))
            .merge(Yaml::file(".sofai/local.yaml"))
            .merge(Env::prefixed("SOFAI_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.max_iterations == 0 {
            return Err(ConfigError::InvalidMaxIterations(config.max_iterations));
        }

        if config.s1_model.is_empty() {
            return Err(ConfigError::EmptyModelName("s1_model"));
        }
        if config.s2_model.is_empty() {
            return Err(ConfigError::EmptyModelName("s2_model"));
        }

        if config.ollama.base_url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if config.ollama.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(config.ollama.timeout_secs));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.s1_model, "gemma3:1b");
        assert_eq!(config.s2_model, "deepseek-r1:1.5b");
        assert_eq!(config.max_iterations, 5);
        assert_eq!(config.memory_examples, 3);
        assert_eq!(config.ollama.base_url, "http://localhost:11434");
        ConfigLoader::validate(&config).expect("Default config should be valid");
    }

    #[test]
    fn test_load_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::with_suffix(".yaml").unwrap();
        writeln!(
            file,
            "s1_model: llama3:8b\nmax_iterations: 2\nollama:\n  base_url: http://127.0.0.1:9999\n  timeout_secs: 30\nlogging:\n  level: debug"
        )
        .unwrap();

        let config = ConfigLoader::load_from_file(file.path()).expect("config should load");
        assert_eq!(config.s1_model, "llama3:8b");
        assert_eq!(config.max_iterations, 2);
        assert_eq!(config.ollama.base_url, "http://127.0.0.1:9999");
        assert_eq!(config.ollama.timeout_secs, 30);
        assert_eq!(config.logging.level, "debug");
        // Unset fields fall back to defaults.
        assert_eq!(config.s2_model, "deepseek-r1:1.5b");
    }

    #[test]
    fn test_validate_rejects_zero_iterations() {
        let config = Config {
            max_iterations: 0,
            ..Config::default()
        };
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidMaxIterations(0))
        ));
    }

    #[test]
    fn test_validate_rejects_empty_model() {
        let config = Config {
            s1_model: String::new(),
            ..Config::default()
        };
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::EmptyModelName("s1_model"))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_log_level() {
        let mut config = Config::default();
        config.logging.level = "loud".to_string();
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidLogLevel(_))
        ));
    }
}
