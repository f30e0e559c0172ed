//! HTTP client for the general-chat completion service (OpenAI-compatible)

use crate::config::LLMServiceConfig;
use crate::error::{DemandaError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Trait for general-chat completion clients
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Complete a system instruction + user question pair
    async fn complete(&self, system: &str, user: &str) -> Result<String>;
}

/// Chat message for completion requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// OpenAI-compatible chat client
pub struct HttpChatClient {
    http_client: reqwest::Client,
    config: LLMServiceConfig,
}

impl HttpChatClient {
    /// Create new chat client from configuration
    pub fn new(config: LLMServiceConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(DemandaError::Http)?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(LLMServiceConfig::default())
    }

    /// Get model name
    pub fn model_name(&self) -> &str {
        &self.config.model
    }
}

#[async_trait]
impl ChatClient for HttpChatClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        #[derive(Serialize)]
        struct ChatRequest {
            model: String,
            messages: Vec<ChatMessage>,
            temperature: f32,
            max_tokens: u32,
        }

        #[derive(Deserialize)]
        struct ChatResponse {
            choices: Vec<ChatChoice>,
        }

        #[derive(Deserialize)]
        struct ChatChoice {
            message: ChatMessage,
        }

        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
            temperature: 0.1,
            max_tokens: 1024,
        };

        let url = format!("{}/v1/chat/completions", self.config.url);

        let mut req = self.http_client.post(&url).json(&request);

        if let Some(ref api_key) = self.config.api_key {
            req = req.header("Authorization", format!("Bearer {}", api_key));
        }

        let response = req.send().await.map_err(DemandaError::Http)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DemandaError::ExternalService(format!(
                "Chat service error (HTTP {}): {}",
                status, body
            )));
        }

        let chat_response: ChatResponse = response.json().await.map_err(DemandaError::Http)?;

        let content = chat_response
            .choices
            .first()
            .ok_or_else(|| DemandaError::Llm("No response from chat model".to_string()))?
            .message
            .content
            .clone();

        Ok(content)
    }
}
