//! Query routing
//!
//! The single pipeline of this crate: classify a question, extract forecast
//! entities when relevant, dispatch to the right backend, compose the
//! labeled answer.

mod classifier;
mod composer;
mod dispatcher;
mod extract;

pub use classifier::{classify, Intent};
pub use composer::{compose, Reply};
pub use dispatcher::{CLARIFICATION, GENERAL_SYSTEM_PROMPT};
pub use extract::{extract, Extraction};

use crate::backend::{
    ChatClient, ForecastClient, HttpChatClient, HttpForecastClient, HttpRetrievalQa, RetrievalQa,
};
use crate::config::Config;
use crate::error::Result;
use std::sync::Arc;

/// Routes questions to the forecast, retrieval-QA or general-chat backend.
///
/// Owns the three backend clients; holds no conversation state. The
/// presentation layer owns the [`crate::ConversationLog`] and appends the
/// replies it gets back.
pub struct Router {
    pub(crate) forecast: Arc<dyn ForecastClient>,
    pub(crate) retrieval: Arc<dyn RetrievalQa>,
    pub(crate) chat: Arc<dyn ChatClient>,
}

impl Router {
    /// Create a router over explicit backend clients
    pub fn new(
        forecast: Arc<dyn ForecastClient>,
        retrieval: Arc<dyn RetrievalQa>,
        chat: Arc<dyn ChatClient>,
    ) -> Self {
        Self {
            forecast,
            retrieval,
            chat,
        }
    }

    /// Create a router with HTTP clients built from configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(
            Arc::new(HttpForecastClient::new(config.forecast_service.clone())?),
            Arc::new(HttpRetrievalQa::new(config.retrieval_service.clone())?),
            Arc::new(HttpChatClient::new(config.llm_service.clone())?),
        ))
    }

    /// Answer one user question: classify, dispatch, compose.
    ///
    /// Never fails; every backend problem comes back as display text with
    /// the label of the path that was attempted.
    pub async fn route_and_respond(&self, question: &str) -> Reply {
        let intent = classify(question);
        let extraction = match intent {
            Intent::Forecast => extract(question),
            _ => None,
        };

        tracing::debug!(
            "Routing question: intent={:?}, extraction={:?}",
            intent,
            extraction
        );

        let (response, effective_intent) =
            self.dispatch(question, intent, extraction.as_ref()).await;

        compose(&response, effective_intent)
    }
}
