//! Entity extraction for forecast questions
//!
//! Pulls a forecast date and one or more material identifiers out of free
//! text. Material policy: numeric IDs (5+ digits) take priority; only when
//! none are present do we fall back to capturing the uppercased word list
//! following "de"/"para".

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

/// Material list and forecast date extracted from a question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Material identifiers, uppercased, in order of appearance
    pub materials: Vec<String>,

    /// Forecast date, YYYY-MM-DD
    pub date: String,
}

lazy_static! {
    static ref ISO_DATE: Regex = Regex::new(r"(20\d{2}-\d{2}-\d{2})").unwrap();
    static ref NUMERIC_MATERIAL: Regex = Regex::new(r"\b(\d{5,})\b").unwrap();
    static ref AFTER_PREPOSITION: Regex =
        Regex::new(r"(?i)\b(?:de|para)\s+([A-Za-z0-9_][A-Za-z0-9_ ,-]*)").unwrap();
}

/// Filler words that the preposition capture must not mistake for materials
const STOPWORDS: &[&str] = &[
    "EL", "LA", "LOS", "LAS", "UN", "UNA", "DE", "DEL", "PARA", "EN", "Y", "O", "MATERIAL",
    "MATERIALES",
];

/// Extract `(materials, date)` from a question, or `None` when either part
/// is missing. Partial matches count as failure; the caller is expected to
/// ask the user for a `YYYY-MM-DD` date and at least one material.
pub fn extract(question: &str) -> Option<Extraction> {
    let date = extract_date(question)?;
    let materials = extract_materials(question, &date);

    if materials.is_empty() {
        return None;
    }

    Some(Extraction { materials, date })
}

/// First ISO date in the text that is also a real calendar date.
fn extract_date(question: &str) -> Option<String> {
    let candidate = ISO_DATE.captures(question)?.get(1)?.as_str();
    NaiveDate::parse_from_str(candidate, "%Y-%m-%d").ok()?;
    Some(candidate.to_string())
}

fn extract_materials(question: &str, date: &str) -> Vec<String> {
    // Numeric-ID priority: any 5+ digit token is taken as a material code.
    let numeric: Vec<String> = NUMERIC_MATERIAL
        .captures_iter(question)
        .map(|c| c[1].to_string())
        .collect();
    if !numeric.is_empty() {
        return dedup_preserving_order(numeric);
    }

    // Fallback: uppercased phrase list after "de"/"para". The date substring
    // is stripped first so it cannot be captured as a material, and each
    // comma-separated phrase is cut at the first connector word.
    let without_date = question.replace(date, " ");
    let mut materials = Vec::new();
    for caps in AFTER_PREPOSITION.captures_iter(&without_date) {
        for phrase in caps[1].split(',') {
            if let Some(material) = clean_candidate(phrase) {
                materials.push(material);
            }
        }
    }

    dedup_preserving_order(materials)
}

/// Uppercase a captured phrase, skipping leading filler words and cutting
/// at the first connector that follows real content. "POLLO ENTERO para"
/// becomes "POLLO ENTERO"; "la para" becomes nothing.
fn clean_candidate(phrase: &str) -> Option<String> {
    let mut kept = Vec::new();
    for token in phrase.split_whitespace() {
        let token = token.to_uppercase();
        if STOPWORDS.contains(&token.as_str()) {
            if kept.is_empty() {
                continue;
            }
            break;
        }
        kept.push(token);
    }

    if kept.is_empty() {
        None
    } else {
        Some(kept.join(" "))
    }
}

fn dedup_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
