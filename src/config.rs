//! Configuration management for HealthBot
//!
//! TOML-based configuration with defaults and validation.
//! Location: ~/.healthbot/config.toml (or `--config <path>`).
//! Every section and field may be omitted.

use crate::advice::gemini::{DEFAULT_GEMINI_MODEL, DEFAULT_GEMINI_URL};
use crate::advice::ollama::DEFAULT_OLLAMA_MODEL;
use crate::errors::{HealthBotError, Result};
use crate::triage::DEFAULT_KEYWORD_TABLE;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// Default health log database file
pub const DEFAULT_DATABASE: &str = "health_logs.db";

/// Environment variable holding the Gemini API key
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Complete configuration for HealthBot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub advice: AdviceConfig,
    pub storage: StorageConfig,
    pub triage: TriageConfig,
    pub display: DisplayConfig,
}

/// Which generative-text backend produces advice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdviceProvider {
    Gemini,
    Ollama,
}

impl FromStr for AdviceProvider {
    type Err = HealthBotError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "gemini" => Ok(AdviceProvider::Gemini),
            "ollama" => Ok(AdviceProvider::Ollama),
            other => Err(HealthBotError::ConfigError(format!(
                "Unknown advice provider: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for AdviceProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdviceProvider::Gemini => f.write_str("gemini"),
            AdviceProvider::Ollama => f.write_str("ollama"),
        }
    }
}

/// Advice service configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdviceConfig {
    pub provider: AdviceProvider,
    /// Model name; the provider's default when unset
    pub model: Option<String>,
    pub gemini_url: String,
    pub ollama_host: String,
    pub ollama_port: u16,
    pub timeout_secs: u64,
}

/// Health log storage configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub database_path: String,
}

/// Keyword table location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriageConfig {
    pub keyword_table: String,
}

/// Terminal display configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub animations: bool,
    pub color_output: bool,
    pub history_limit: usize,
}

impl Default for AdviceConfig {
    fn default() -> Self {
        Self {
            provider: AdviceProvider::Gemini,
            model: None,
            gemini_url: DEFAULT_GEMINI_URL.to_string(),
            ollama_host: "127.0.0.1".to_string(),
            ollama_port: 11434,
            timeout_secs: 30,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: DEFAULT_DATABASE.to_string(),
        }
    }
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            keyword_table: DEFAULT_KEYWORD_TABLE.to_string(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            animations: true,
            color_output: true,
            history_limit: 5,
        }
    }
}

impl AdviceConfig {
    /// Configured model, or the provider default
    pub fn model(&self) -> &str {
        match (&self.model, self.provider) {
            (Some(model), _) => model,
            (None, AdviceProvider::Gemini) => DEFAULT_GEMINI_MODEL,
            (None, AdviceProvider::Ollama) => DEFAULT_OLLAMA_MODEL,
        }
    }

    /// Get Ollama base URL
    pub fn ollama_url(&self) -> String {
        format!("http://{}:{}", self.ollama_host, self.ollama_port)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(config_path) = path {
            Self::load_from_file(config_path)
        } else {
            Self::load_default()
        }
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| HealthBotError::ConfigError(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| HealthBotError::ConfigError(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load from the standard location, or built-in defaults if absent
    pub fn load_default() -> Result<Self> {
        if let Some(config_path) = Self::default_path() {
            if config_path.exists() {
                return Self::load_from_file(&config_path);
            }
        }

        Ok(Config::default())
    }

    /// ~/.healthbot/config.toml
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".healthbot").join("config.toml"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.advice.timeout_secs == 0 {
            return Err(HealthBotError::ConfigError(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.display.history_limit == 0 {
            return Err(HealthBotError::ConfigError(
                "history_limit must be greater than 0".to_string(),
            ));
        }

        if self.storage.database_path.trim().is_empty() {
            return Err(HealthBotError::ConfigError(
                "database_path must not be empty".to_string(),
            ));
        }

        if self.triage.keyword_table.trim().is_empty() {
            return Err(HealthBotError::ConfigError(
                "keyword_table must not be empty".to_string(),
            ));
        }

        if matches!(&self.advice.model, Some(m) if m.trim().is_empty()) {
            return Err(HealthBotError::ConfigError(
                "model must not be empty when set".to_string(),
            ));
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self).map_err(|e| {
            HealthBotError::ConfigError(format!("Failed to serialize config: {}", e))
        })?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                HealthBotError::ConfigError(format!("Failed to create config dir: {}", e))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| HealthBotError::ConfigError(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    /// Expand tilde in paths
    pub fn expand_path(path: &str) -> PathBuf {
        if let Some(rest) = path.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest);
            }
        }
        PathBuf::from(path)
    }

    pub fn database_path(&self) -> PathBuf {
        Self::expand_path(&self.storage.database_path)
    }

    pub fn keyword_table_path(&self) -> PathBuf {
        Self::expand_path(&self.triage.keyword_table)
    }
}
