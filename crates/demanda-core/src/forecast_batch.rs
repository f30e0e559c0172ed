//! Batch demand forecasting from tabular files
//!
//! Reads a CSV with `material` and `fecha` columns, groups the materials
//! by date and issues one forecast call per distinct date.

use crate::backend::{BackendResponse, ForecastClient};
use crate::error::{DemandaError, Result};
use crate::route::{compose, Intent, Reply};
use csv::ReaderBuilder;
use std::path::Path;

/// One row of the batch input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRow {
    pub material: String,
    pub fecha: String,
}

/// Outcome of the forecast call for one distinct date
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub date: String,
    pub materials: Vec<String>,
    pub reply: Reply,
}

/// Read batch rows from a CSV file with `material` and `fecha` columns.
///
/// Extra columns are ignored; missing required columns are an input error.
pub fn read_batch_csv(path: &Path) -> Result<Vec<BatchRow>> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_path(path)?;

    let headers = reader.headers()?.clone();
    let material_idx = column_index(&headers, "material")?;
    let fecha_idx = column_index(&headers, "fecha")?;

    let mut rows = Vec::new();
    for (row_num, result) in reader.records().enumerate() {
        let record = result.map_err(|e| {
            DemandaError::InvalidInput(format!("Bad batch row {}: {}", row_num + 1, e))
        })?;

        let material = record.get(material_idx).unwrap_or("").trim().to_string();
        let fecha = record.get(fecha_idx).unwrap_or("").trim().to_string();
        if material.is_empty() || fecha.is_empty() {
            tracing::warn!("Skipping batch row {} with empty material or fecha", row_num + 1);
            continue;
        }

        rows.push(BatchRow { material, fecha });
    }

    Ok(rows)
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(name))
        .ok_or_else(|| {
            DemandaError::InvalidInput(
                "Batch file must have 'material' and 'fecha' columns".to_string(),
            )
        })
}

/// Group materials by date, preserving first-appearance order of dates and
/// deduplicating materials within each date.
pub fn group_by_date(rows: &[BatchRow]) -> Vec<(String, Vec<String>)> {
    let mut groups: Vec<(String, Vec<String>)> = Vec::new();

    for row in rows {
        match groups.iter_mut().find(|(date, _)| *date == row.fecha) {
            Some((_, materials)) => {
                if !materials.contains(&row.material) {
                    materials.push(row.material.clone());
                }
            }
            None => groups.push((row.fecha.clone(), vec![row.material.clone()])),
        }
    }

    groups
}

/// Issue one forecast call per distinct date and compose each result.
///
/// A failing date does not abort the batch; its outcome carries the
/// failure text like an interactive forecast would.
pub async fn run_batch(client: &dyn ForecastClient, rows: &[BatchRow]) -> Vec<BatchOutcome> {
    let mut outcomes = Vec::new();

    for (date, materials) in group_by_date(rows) {
        let response = match client.predict(&date, &materials).await {
            Ok(prediction_rows) => BackendResponse::Prediction {
                date: date.clone(),
                materials: materials.clone(),
                rows: prediction_rows,
            },
            Err(e) => {
                tracing::warn!("Batch forecast for {} failed: {}", date, e);
                BackendResponse::Failure(e.to_string())
            }
        };

        outcomes.push(BatchOutcome {
            reply: compose(&response, Intent::Forecast),
            date,
            materials,
        });
    }

    outcomes
}
