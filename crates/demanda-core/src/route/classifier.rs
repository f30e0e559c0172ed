//! Intent classification for incoming questions
//!
//! Pattern-matching is deliberately isolated behind `classify` so the
//! strategy (regex today, a small model tomorrow) can change without
//! touching the dispatcher.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// What kind of question this is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Structured demand-forecast request
    Forecast,

    /// Question to answer from the uploaded documents
    DocumentQa,

    /// General knowledge question
    General,
}

impl Intent {
    /// User-facing origin label for answers produced under this intent
    pub fn label(&self) -> &'static str {
        match self {
            Intent::Forecast => "forecast",
            Intent::DocumentQa => "documents",
            Intent::General => "general knowledge",
        }
    }
}

lazy_static! {
    static ref FORECAST_KEYWORD: Regex = Regex::new(r"\bdemanda\b").unwrap();
    static ref CONNECTOR: Regex = Regex::new(r"\b(para|de|del|en)\b").unwrap();
    static ref ISO_DATE: Regex = Regex::new(r"20\d{2}-\d{2}-\d{2}").unwrap();
    static ref NUMERIC_MATERIAL: Regex = Regex::new(r"\b\d{5,}\b").unwrap();
}

/// Tag a raw question as forecast, document-QA or general.
///
/// Forecast when the text mentions the demand keyword next to a connector
/// word, or when it carries both a material-like numeric token and an ISO
/// date. Everything else starts as document-QA; the dispatcher downgrades
/// it to general if no grounded answer is found. Total function.
pub fn classify(question: &str) -> Intent {
    let lowered = question.to_lowercase();

    if FORECAST_KEYWORD.is_match(&lowered) && CONNECTOR.is_match(&lowered) {
        return Intent::Forecast;
    }

    if ISO_DATE.is_match(&lowered) && NUMERIC_MATERIAL.is_match(&lowered) {
        return Intent::Forecast;
    }

    Intent::DocumentQa
}
