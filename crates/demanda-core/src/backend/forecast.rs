//! HTTP client for the hosted demand-forecast model endpoint

use crate::config::ForecastServiceConfig;
use crate::error::{DemandaError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Trait for demand-forecast clients
#[async_trait]
pub trait ForecastClient: Send + Sync {
    /// Predict demand for a list of materials on a date (YYYY-MM-DD)
    async fn predict(&self, date: &str, materials: &[String]) -> Result<Vec<PredictionRow>>;
}

/// One predicted demand value returned by the forecast endpoint.
///
/// The endpoint is free to attach extra columns (plant, unit, confidence
/// bands); those pass through in `extra` untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRow {
    pub material: String,

    #[serde(default)]
    pub date: Option<String>,

    pub predicted_value: f64,

    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Forecast client over HTTP
pub struct HttpForecastClient {
    http_client: reqwest::Client,
    config: ForecastServiceConfig,
}

impl HttpForecastClient {
    /// Create new forecast client from configuration
    pub fn new(config: ForecastServiceConfig) -> Result<Self> {
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
        Self::new(ForecastServiceConfig::default())
    }
}

#[async_trait]
impl ForecastClient for HttpForecastClient {
    async fn predict(&self, date: &str, materials: &[String]) -> Result<Vec<PredictionRow>> {
        #[derive(Serialize)]
        struct ScoreRequest<'a> {
            forecast_date: &'a str,
            materials: &'a [String],
        }

        #[derive(Deserialize)]
        struct ScoreResponse {
            predictions: Vec<PredictionRow>,
        }

        let request = ScoreRequest {
            forecast_date: date,
            materials,
        };

        let mut req = self.http_client.post(&self.config.url).json(&request);

        if let Some(ref api_key) = self.config.api_key {
            req = req.header("Authorization", format!("Bearer {}", api_key));
        }

        tracing::debug!("Forecast request: {} materials for {}", materials.len(), date);

        let response = req.send().await.map_err(DemandaError::Http)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DemandaError::ExternalService(format!(
                "Forecast endpoint error (HTTP {}): {}",
                status, body
            )));
        }

        let body = response.text().await.map_err(DemandaError::Http)?;
        let parsed: ScoreResponse = serde_json::from_str(&body).map_err(|e| {
            DemandaError::ExternalService(format!(
                "Malformed forecast response: {} (body: {})",
                e, body
            ))
        })?;

        Ok(parsed.predictions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_row_passthrough_fields() {
        let json = r#"{"material": "1000110", "predicted_value": 412.5, "plant": "Lima"}"#;
        let row: PredictionRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.material, "1000110");
        assert_eq!(row.predicted_value, 412.5);
        assert_eq!(row.date, None);
        assert_eq!(row.extra["plant"], "Lima");
    }

    #[test]
    fn test_prediction_row_with_date() {
        let json = r#"{"material": "POLLO", "date": "2025-12-31", "predicted_value": 9000.0}"#;
        let row: PredictionRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.date.as_deref(), Some("2025-12-31"));
    }
}
