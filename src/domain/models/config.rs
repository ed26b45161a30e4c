use serde::{Deserialize, Serialize};

/// Main configuration structure for the solver.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Ollama model used by the fast tier (S1)
    #[serde(default = "default_s1_model")]
    pub s1_model: String,

    /// Ollama model used by the deliberate tier (S2)
    #[serde(default = "default_s2_model")]
    pub s2_model: String,

    /// Maximum fast-tier refinement iterations per solve
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,

    /// Number of episodic memory examples used to seed prompts
    #[serde(default = "default_memory_examples")]
    pub memory_examples: usize,

    /// Ollama transport configuration
    #[serde(default)]
    pub ollama: OllamaConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_s1_model() -> String {
    "gemma3:1b".to_string()
}

fn default_s2_model() -> String {
    "deepseek-r1:1.5b".to_string()
}

const fn default_max_iterations() -> u32 {
    5
}

const fn default_memory_examples() -> usize {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            s1_model: default_s1_model(),
            s2_model: default_s2_model(),
            max_iterations: default_max_iterations(),
            memory_examples: default_memory_examples(),
            ollama: OllamaConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Ollama daemon connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct OllamaConfig {
    /// Base URL of the Ollama HTTP API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:11434".to_string()
}

const fn default_timeout_secs() -> u64 {
    300
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}
