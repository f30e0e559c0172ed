//! HTTP client for the retrieval-QA service
//!
//! The retrieval service owns document parsing, chunking and the vector
//! index; this client only sends the raw question and inspects whether
//! the answer came back grounded in any source document.

use crate::config::RetrievalServiceConfig;
use crate::error::{DemandaError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Trait for retrieval-QA clients
#[async_trait]
pub trait RetrievalQa: Send + Sync {
    /// Answer a raw question against the session's document index
    async fn ask(&self, question: &str) -> Result<RetrievalAnswer>;
}

/// Answer returned by the retrieval-QA service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RetrievalAnswer {
    /// Answer text, possibly empty
    #[serde(default)]
    pub result: String,

    /// Documents the answer was grounded in
    #[serde(default)]
    pub source_documents: Vec<SourceDocument>,
}

/// A document cited by the retrieval-QA service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceDocument {
    /// Display name of the source
    #[serde(default)]
    pub name: String,

    /// Passthrough metadata from the service
    #[serde(flatten)]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl RetrievalAnswer {
    /// Whether this answer is usable as a document-grounded response.
    ///
    /// Requires a non-empty result, at least one cited source, and an
    /// answer that does not open with the negative marker "no ".
    pub fn is_grounded(&self) -> bool {
        let text = self.result.trim();
        !text.is_empty()
            && !self.source_documents.is_empty()
            && !text.to_lowercase().starts_with("no ")
    }
}

/// Retrieval-QA client over HTTP
pub struct HttpRetrievalQa {
    http_client: reqwest::Client,
    config: RetrievalServiceConfig,
}

impl HttpRetrievalQa {
    /// Create new retrieval client from configuration
    pub fn new(config: RetrievalServiceConfig) -> Result<Self> {
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
        Self::new(RetrievalServiceConfig::default())
    }
}

#[async_trait]
impl RetrievalQa for HttpRetrievalQa {
    async fn ask(&self, question: &str) -> Result<RetrievalAnswer> {
        #[derive(Serialize)]
        struct QaRequest<'a> {
            question: &'a str,
        }

        let url = format!("{}/qa", self.config.url);

        let mut req = self
            .http_client
            .post(&url)
            .json(&QaRequest { question });

        if let Some(ref api_key) = self.config.api_key {
            req = req.header("Authorization", format!("Bearer {}", api_key));
        }

        let response = req.send().await.map_err(DemandaError::Http)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DemandaError::ExternalService(format!(
                "Retrieval service error (HTTP {}): {}",
                status, body
            )));
        }

        let answer: RetrievalAnswer = response.json().await.map_err(DemandaError::Http)?;
        Ok(answer)
    }
}
