//! External backend clients
//!
//! Traits and HTTP implementations for the three collaborators the router
//! talks to:
//! - a hosted demand-forecast model endpoint
//! - a retrieval-QA service over previously uploaded documents
//! - a general-purpose chat-completion service (OpenAI-compatible)

mod chat;
mod forecast;
mod retrieval;

pub use chat::{ChatClient, ChatMessage, HttpChatClient};
pub use forecast::{ForecastClient, HttpForecastClient, PredictionRow};
pub use retrieval::{HttpRetrievalQa, RetrievalAnswer, RetrievalQa, SourceDocument};

/// What a backend produced for one question.
///
/// Every dispatch produces exactly one of these; client errors are folded
/// into `Failure` at the call site so the session never sees a raw error.
#[derive(Debug, Clone)]
pub enum BackendResponse {
    /// Forecast rows for the requested materials and date
    Prediction {
        date: String,
        materials: Vec<String>,
        rows: Vec<PredictionRow>,
    },

    /// Answer grounded in the uploaded documents
    Grounded { text: String, has_source: bool },

    /// Answer from the general-chat model
    General(String),

    /// Human-readable failure, shown verbatim
    Failure(String),
}
