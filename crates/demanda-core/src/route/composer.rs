//! Response composition
//!
//! Turns a backend response into the single user-facing message plus the
//! origin label that tells the user where the answer came from.

use super::Intent;
use crate::backend::{BackendResponse, PredictionRow};
use std::collections::BTreeSet;

/// A composed, display-ready answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Text shown to the user
    pub text: String,

    /// Origin label: "forecast", "documents" or "general knowledge"
    pub origin: &'static str,
}

/// Compose a backend response under the intent that produced it.
///
/// Failures keep the attempted intent's label so the user can tell which
/// path failed.
pub fn compose(response: &BackendResponse, intent: Intent) -> Reply {
    match response {
        BackendResponse::Prediction {
            date,
            materials,
            rows,
        } => Reply {
            text: format!(
                "Predicción de demanda para {} el {}:\n{}",
                materials.join(", "),
                date,
                render_prediction_table(rows, date)
            ),
            origin: Intent::Forecast.label(),
        },

        BackendResponse::Grounded { text, .. } => Reply {
            text: text.clone(),
            origin: Intent::DocumentQa.label(),
        },

        BackendResponse::General(text) => Reply {
            text: text.clone(),
            origin: Intent::General.label(),
        },

        BackendResponse::Failure(message) => Reply {
            text: message.clone(),
            origin: intent.label(),
        },
    }
}

/// Render prediction rows as a pipe-separated text table.
///
/// Known columns first, then any passthrough columns the endpoint sent,
/// in stable alphabetical order.
fn render_prediction_table(rows: &[PredictionRow], request_date: &str) -> String {
    let extra_keys: BTreeSet<&str> = rows
        .iter()
        .flat_map(|row| row.extra.keys().map(String::as_str))
        .collect();

    let mut header = vec!["material", "fecha", "demanda_prevista"];
    header.extend(extra_keys.iter().copied());

    let mut out = String::new();
    out.push_str(&format!("| {} |\n", header.join(" | ")));
    out.push_str(&format!(
        "|{}|\n",
        header.iter().map(|_| "---").collect::<Vec<_>>().join("|")
    ));

    for row in rows {
        let mut cells = vec![
            row.material.clone(),
            row.date.clone().unwrap_or_else(|| request_date.to_string()),
            format!("{:.2}", row.predicted_value),
        ];
        for key in &extra_keys {
            cells.push(
                row.extra
                    .get(*key)
                    .map(render_cell)
                    .unwrap_or_default(),
            );
        }
        out.push_str(&format!("| {} |\n", cells.join(" | ")));
    }

    out
}

fn render_cell(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
