//! Demanda Core Library
//!
//! Query-routing core for a demand-forecast chat advisor.
//!
//! # Features
//! - Intent classification of free-text questions (forecast / document-QA / general)
//! - Material and date extraction from forecast questions
//! - Dispatch to hosted forecast, retrieval-QA and chat-completion services
//! - Labeled response composition and a capped session conversation log
//! - Batch forecasting over CSV tables grouped by date

pub mod backend;
pub mod config;
pub mod error;
pub mod forecast_batch;
pub mod history;
pub mod route;

pub use backend::{
    BackendResponse, ChatClient, ChatMessage, ForecastClient, HttpChatClient, HttpForecastClient,
    HttpRetrievalQa, PredictionRow, RetrievalAnswer, RetrievalQa, SourceDocument,
};
pub use config::{Config, ForecastServiceConfig, LLMServiceConfig, RetrievalServiceConfig};
pub use error::{DemandaError, Error, Result};
pub use forecast_batch::{group_by_date, read_batch_csv, run_batch, BatchOutcome, BatchRow};
pub use history::{ConversationEntry, ConversationLog};
pub use route::{
    classify, compose, extract, Extraction, Intent, Reply, Router, CLARIFICATION,
    GENERAL_SYSTEM_PROMPT,
};

/// Default config directory name
pub const CONFIG_DIR_NAME: &str = "demanda";
