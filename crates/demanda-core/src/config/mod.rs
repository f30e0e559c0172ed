//! Configuration management

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Chat-completion service configuration
    #[serde(default)]
    pub llm_service: LLMServiceConfig,

    /// Demand-forecast endpoint configuration
    #[serde(default)]
    pub forecast_service: ForecastServiceConfig,

    /// Retrieval-QA service configuration
    #[serde(default)]
    pub retrieval_service: RetrievalServiceConfig,

    /// Maximum conversation entries retained per session
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            llm_service: LLMServiceConfig::default(),
            forecast_service: ForecastServiceConfig::default(),
            retrieval_service: RetrievalServiceConfig::default(),
            history_limit: env_history_limit(),
        }
    }
}

/// Chat-completion (OpenAI-compatible) service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LLMServiceConfig {
    /// Base URL of the chat-completions service
    pub url: String,

    /// Model name for chat completions
    #[serde(default = "default_chat_model")]
    pub model: String,

    /// API key (optional, for authenticated services)
    #[serde(default)]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for LLMServiceConfig {
    fn default() -> Self {
        Self {
            url: std::env::var("DEMANDA_LLM_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            model: default_chat_model(),
            api_key: std::env::var("DEMANDA_LLM_API_KEY").ok(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Demand-forecast inference endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastServiceConfig {
    /// Scoring URL of the hosted forecast model
    pub url: String,

    /// Bearer token for the forecast endpoint
    #[serde(default)]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for ForecastServiceConfig {
    fn default() -> Self {
        Self {
            url: std::env::var("DEMANDA_FORECAST_URL")
                .unwrap_or_else(|_| "http://localhost:8001/score".to_string()),
            api_key: std::env::var("DEMANDA_FORECAST_API_KEY").ok(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Retrieval-QA service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalServiceConfig {
    /// Base URL of the retrieval-QA service
    pub url: String,

    /// API key (optional)
    #[serde(default)]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for RetrievalServiceConfig {
    fn default() -> Self {
        Self {
            url: std::env::var("DEMANDA_RETRIEVAL_URL")
                .unwrap_or_else(|_| "http://localhost:8002".to_string()),
            api_key: std::env::var("DEMANDA_RETRIEVAL_API_KEY").ok(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_chat_model() -> String {
    std::env::var("DEMANDA_LLM_MODEL").unwrap_or_else(|_| "gpt-4o".to_string())
}

fn default_timeout() -> u64 {
    30
}

fn default_history_limit() -> usize {
    100
}

fn env_history_limit() -> usize {
    std::env::var("DEMANDA_HISTORY_LIMIT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(default_history_limit)
}

impl Config {
    /// Load config from default path
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = serde_yaml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to default path
    pub fn save(&self) -> Result<()> {
        let path = Self::default_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(crate::CONFIG_DIR_NAME)
            .join("config.yml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeout_is_bounded() {
        let config = Config::default();
        assert_eq!(config.llm_service.timeout_secs, 30);
        assert_eq!(config.forecast_service.timeout_secs, 30);
        assert_eq!(config.retrieval_service.timeout_secs, 30);
    }

    #[test]
    fn test_yaml_roundtrip_fills_defaults() {
        let yaml = "llm_service:\n  url: http://inference.local\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.llm_service.url, "http://inference.local");
        assert_eq!(config.llm_service.timeout_secs, 30);
        assert_eq!(config.history_limit, 100);
    }
}
