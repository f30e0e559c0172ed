//! End-to-end routing tests over in-process fake backends

use async_trait::async_trait;
use demanda_core::{
    run_batch, BatchRow, ChatClient, DemandaError, ForecastClient, PredictionRow, Result,
    RetrievalAnswer, RetrievalQa, Router, SourceDocument, CLARIFICATION,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct FakeForecast {
    calls: Mutex<Vec<(String, Vec<String>)>>,
    fail_with: Option<String>,
}

#[async_trait]
impl ForecastClient for FakeForecast {
    async fn predict(&self, date: &str, materials: &[String]) -> Result<Vec<PredictionRow>> {
        self.calls
            .lock()
            .unwrap()
            .push((date.to_string(), materials.to_vec()));

        if let Some(ref message) = self.fail_with {
            return Err(DemandaError::ExternalService(message.clone()));
        }

        Ok(materials
            .iter()
            .map(|material| PredictionRow {
                material: material.clone(),
                date: Some(date.to_string()),
                predicted_value: 100.0,
                extra: HashMap::new(),
            })
            .collect())
    }
}

struct FakeRetrieval {
    answer: Result<RetrievalAnswer>,
}

impl FakeRetrieval {
    fn grounded(text: &str) -> Self {
        Self {
            answer: Ok(RetrievalAnswer {
                result: text.to_string(),
                source_documents: vec![SourceDocument {
                    name: "manual.pdf".to_string(),
                    metadata: HashMap::new(),
                }],
            }),
        }
    }

    fn empty() -> Self {
        Self {
            answer: Ok(RetrievalAnswer::default()),
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            answer: Err(DemandaError::ExternalService(message.to_string())),
        }
    }
}

#[async_trait]
impl RetrievalQa for FakeRetrieval {
    async fn ask(&self, _question: &str) -> Result<RetrievalAnswer> {
        match &self.answer {
            Ok(answer) => Ok(answer.clone()),
            Err(e) => Err(DemandaError::ExternalService(e.to_string())),
        }
    }
}

struct FakeChat {
    reply: Option<String>,
}

#[async_trait]
impl ChatClient for FakeChat {
    async fn complete(&self, _system: &str, user: &str) -> Result<String> {
        match &self.reply {
            Some(text) => Ok(text.clone()),
            None => Err(DemandaError::ExternalService(format!(
                "chat unavailable for: {}",
                user
            ))),
        }
    }
}

fn router(
    forecast: Arc<FakeForecast>,
    retrieval: FakeRetrieval,
    chat: FakeChat,
) -> Router {
    Router::new(forecast, Arc::new(retrieval), Arc::new(chat))
}

#[tokio::test]
async fn forecast_question_calls_forecast_backend() {
    let forecast = Arc::new(FakeForecast::default());
    let r = router(
        forecast.clone(),
        FakeRetrieval::empty(),
        FakeChat { reply: None },
    );

    let reply = r
        .route_and_respond("¿Cuál será la demanda de POLLO para 2025-12-31?")
        .await;

    assert_eq!(reply.origin, "forecast");
    assert!(reply.text.contains("POLLO"));
    assert!(reply.text.contains("2025-12-31"));

    let calls = forecast.calls.lock().unwrap();
    assert_eq!(
        *calls,
        vec![("2025-12-31".to_string(), vec!["POLLO".to_string()])]
    );
}

#[tokio::test]
async fn forecast_without_date_yields_clarification_without_calling_backend() {
    let forecast = Arc::new(FakeForecast::default());
    let r = router(
        forecast.clone(),
        FakeRetrieval::empty(),
        FakeChat { reply: None },
    );

    let reply = r.route_and_respond("¿Cuál es la demanda de POLLO?").await;

    assert_eq!(reply.origin, "forecast");
    assert_eq!(reply.text, CLARIFICATION);
    assert!(forecast.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn forecast_http_error_surfaces_raw_text() {
    let forecast = Arc::new(FakeForecast {
        calls: Mutex::new(Vec::new()),
        fail_with: Some(
            "Forecast endpoint error (HTTP 500): internal scoring failure".to_string(),
        ),
    });
    let r = router(
        forecast,
        FakeRetrieval::empty(),
        FakeChat { reply: None },
    );

    let reply = r
        .route_and_respond("demanda de POLLO para 2025-12-31")
        .await;

    assert_eq!(reply.origin, "forecast");
    assert!(reply.text.contains("internal scoring failure"));
}

#[tokio::test]
async fn grounded_answer_is_labeled_documents() {
    let r = router(
        Arc::new(FakeForecast::default()),
        FakeRetrieval::grounded("La planta opera en dos turnos."),
        FakeChat { reply: None },
    );

    let reply = r.route_and_respond("¿Cuántos turnos tiene la planta?").await;

    assert_eq!(reply.origin, "documents");
    assert_eq!(reply.text, "La planta opera en dos turnos.");
}

#[tokio::test]
async fn empty_retrieval_falls_back_to_general_knowledge() {
    let r = router(
        Arc::new(FakeForecast::default()),
        FakeRetrieval::empty(),
        FakeChat {
            reply: Some("Respuesta general.".to_string()),
        },
    );

    let reply = r.route_and_respond("¿Qué es la gripe aviar?").await;

    assert_eq!(reply.origin, "general knowledge");
    assert_eq!(reply.text, "Respuesta general.");
}

#[tokio::test]
async fn negative_retrieval_answer_falls_back() {
    let r = router(
        Arc::new(FakeForecast::default()),
        FakeRetrieval::grounded("No encontré esa información en los documentos."),
        FakeChat {
            reply: Some("Desde conocimiento general.".to_string()),
        },
    );

    let reply = r.route_and_respond("¿Qué es un balanceado?").await;

    assert_eq!(reply.origin, "general knowledge");
    assert_eq!(reply.text, "Desde conocimiento general.");
}

#[tokio::test]
async fn retrieval_transport_error_falls_back() {
    let r = router(
        Arc::new(FakeForecast::default()),
        FakeRetrieval::failing("Retrieval service error (HTTP 503): down"),
        FakeChat {
            reply: Some("Aún puedo ayudarte.".to_string()),
        },
    );

    let reply = r.route_and_respond("¿Dónde queda la planta?").await;

    assert_eq!(reply.origin, "general knowledge");
    assert_eq!(reply.text, "Aún puedo ayudarte.");
}

#[tokio::test]
async fn chat_failure_after_fallback_is_visible_text() {
    let r = router(
        Arc::new(FakeForecast::default()),
        FakeRetrieval::empty(),
        FakeChat { reply: None },
    );

    let reply = r.route_and_respond("¿Dónde queda la planta?").await;

    assert_eq!(reply.origin, "general knowledge");
    assert!(reply.text.contains("chat unavailable"));
}

#[tokio::test]
async fn batch_issues_one_call_per_distinct_date() {
    let forecast = Arc::new(FakeForecast::default());
    let rows = vec![
        BatchRow {
            material: "POLLO".to_string(),
            fecha: "2025-12-31".to_string(),
        },
        BatchRow {
            material: "PAVO".to_string(),
            fecha: "2026-01-15".to_string(),
        },
        BatchRow {
            material: "HUEVO".to_string(),
            fecha: "2025-12-31".to_string(),
        },
    ];

    let outcomes = run_batch(forecast.as_ref(), &rows).await;

    assert_eq!(outcomes.len(), 2);
    let calls = forecast.calls.lock().unwrap();
    assert_eq!(
        *calls,
        vec![
            (
                "2025-12-31".to_string(),
                vec!["POLLO".to_string(), "HUEVO".to_string()]
            ),
            ("2026-01-15".to_string(), vec!["PAVO".to_string()]),
        ]
    );
    assert!(outcomes.iter().all(|o| o.reply.origin == "forecast"));
}
