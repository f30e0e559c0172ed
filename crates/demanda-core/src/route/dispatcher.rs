//! Backend dispatch
//!
//! Routes a classified question to the forecast endpoint, the retrieval-QA
//! service or the general-chat model, and folds every client error into a
//! `Failure` so nothing propagates out of a user submission.

use super::{Extraction, Intent, Router};
use crate::backend::BackendResponse;

/// Fixed clarification shown when a forecast question lacks a date or
/// material. Surfaced verbatim, never retried.
pub const CLARIFICATION: &str = "Por favor indica la fecha (YYYY-MM-DD) y al menos un material. \
     Ejemplo: ¿Cuál será la demanda de POLLO para 2025-12-31?";

/// System instruction for the general-chat fallback
pub const GENERAL_SYSTEM_PROMPT: &str =
    "Eres un asesor de una empresa avícola. Responde de forma clara y concisa.";

impl Router {
    /// Dispatch a question to its backend.
    ///
    /// Returns the backend response together with the effective intent: a
    /// document question whose retrieval answer came back ungrounded is
    /// answered by the general-chat model, and its intent downgrades to
    /// `General` so the origin label stays honest.
    pub async fn dispatch(
        &self,
        question: &str,
        intent: Intent,
        extraction: Option<&Extraction>,
    ) -> (BackendResponse, Intent) {
        match intent {
            Intent::Forecast => {
                let Some(extraction) = extraction else {
                    return (
                        BackendResponse::Failure(CLARIFICATION.to_string()),
                        Intent::Forecast,
                    );
                };

                match self
                    .forecast
                    .predict(&extraction.date, &extraction.materials)
                    .await
                {
                    Ok(rows) => (
                        BackendResponse::Prediction {
                            date: extraction.date.clone(),
                            materials: extraction.materials.clone(),
                            rows,
                        },
                        Intent::Forecast,
                    ),
                    Err(e) => {
                        tracing::warn!("Forecast call failed: {}", e);
                        (BackendResponse::Failure(e.to_string()), Intent::Forecast)
                    }
                }
            }

            Intent::DocumentQa => match self.retrieval.ask(question).await {
                Ok(answer) if answer.is_grounded() => (
                    BackendResponse::Grounded {
                        text: answer.result,
                        has_source: true,
                    },
                    Intent::DocumentQa,
                ),
                Ok(_) => {
                    tracing::debug!("No grounded answer, falling back to general chat");
                    self.general_chat(question).await
                }
                Err(e) => {
                    tracing::warn!("Retrieval call failed: {}, falling back to general chat", e);
                    self.general_chat(question).await
                }
            },

            Intent::General => self.general_chat(question).await,
        }
    }

    async fn general_chat(&self, question: &str) -> (BackendResponse, Intent) {
        match self.chat.complete(GENERAL_SYSTEM_PROMPT, question).await {
            Ok(text) => (BackendResponse::General(text), Intent::General),
            Err(e) => {
                tracing::warn!("General chat call failed: {}", e);
                (BackendResponse::Failure(e.to_string()), Intent::General)
            }
        }
    }
}
