//! Hazard (`H`) and precautionary (`P`) statement normalization.
//!
//! Accepted payload layouts, probed in order:
//! 1. `{ "hpstatements": [ {code, statement}, ... ] }`
//! 2. `{ "data": [ {code, statement}, ... ] }`
//! 3. `{ "languages": [...], "codes": [...], "statements": { "latest/<lang>/<code>": text } }`
//! 4. `[ {code, statement}, ... ]`
//!
//! Anything else yields no pairs. Format drift upstream must not fail a run.

use labref_core::{HazardCode, PrecautionCode};
use serde_json::{Map, Value};

use crate::error::SourceError;
use crate::lookup::first_text;
use crate::{SourceClient, decode_json};

const CONTAINER_KEYS: [&str; 2] = ["hpstatements", "data"];
const CODE_KEYS: [&str; 4] = ["code", "Code", "CODE", "id"];
const STATEMENT_KEYS: [&str; 5] = ["statement", "Statement", "text", "desc", "description"];

/// Language picked from a keyed payload when it lists no languages.
const FALLBACK_LANGUAGE: &str = "en";
const PREFERRED_LANGUAGE: &str = "es";

/// Statement rows split by catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatementCodes {
    pub hazards: Vec<HazardCode>,
    pub precautions: Vec<PrecautionCode>,
}

/// Lazily yield trimmed, non-empty `(code, statement)` pairs from `payload`.
pub fn statement_pairs(payload: &Value) -> Box<dyn Iterator<Item = (String, String)> + '_> {
    if let Some(items) = CONTAINER_KEYS
        .iter()
        .find_map(|key| payload.get(*key).and_then(Value::as_array))
    {
        return Box::new(items.iter().filter_map(item_pair));
    }

    if let (Some(codes), Some(statements)) = (
        payload.get("codes").and_then(Value::as_array),
        payload.get("statements").and_then(Value::as_object),
    ) {
        let language = preferred_language(payload);
        return Box::new(
            codes
                .iter()
                .filter_map(move |code| keyed_pair(code, statements, &language)),
        );
    }

    match payload.as_array() {
        Some(items) => Box::new(items.iter().filter_map(item_pair)),
        None => Box::new(std::iter::empty()),
    }
}

/// Route pairs into hazard or precaution rows by case-insensitive code prefix.
///
/// Codes starting with anything other than `H` or `P` are dropped.
pub fn split_by_prefix(pairs: impl IntoIterator<Item = (String, String)>) -> StatementCodes {
    let mut codes = StatementCodes::default();
    let mut dropped = 0usize;
    for (code, statement) in pairs {
        let prefix = code.chars().next().map(|c| c.to_ascii_uppercase());
        match prefix {
            Some('H') => codes.hazards.push(HazardCode { code, statement }),
            Some('P') => codes.precautions.push(PrecautionCode { code, statement }),
            _ => dropped += 1,
        }
    }
    if dropped > 0 {
        tracing::debug!(dropped, "skipped statements with unrecognized code prefix");
    }
    codes
}

fn item_pair(item: &Value) -> Option<(String, String)> {
    let item = item.as_object()?;
    let code = first_text(item, &CODE_KEYS).unwrap_or_default();
    let statement = first_text(item, &STATEMENT_KEYS).unwrap_or_default();
    (!code.is_empty() && !statement.is_empty()).then_some((code, statement))
}

fn keyed_pair(
    code: &Value,
    statements: &Map<String, Value>,
    language: &str,
) -> Option<(String, String)> {
    let code = code.as_str()?.trim();
    if code.is_empty() {
        return None;
    }
    let statement = statements
        .get(&format!("latest/{language}/{code}"))
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())?;
    Some((code.to_string(), statement.to_string()))
}

/// `es` when listed, else the first listed language, else `en`.
fn preferred_language(payload: &Value) -> String {
    let listed: Vec<&str> = payload
        .get("languages")
        .and_then(Value::as_array)
        .map(|langs| {
            langs
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .collect()
        })
        .unwrap_or_default();

    if listed
        .iter()
        .any(|l| l.eq_ignore_ascii_case(PREFERRED_LANGUAGE))
    {
        return PREFERRED_LANGUAGE.to_string();
    }
    listed
        .first()
        .map_or_else(|| FALLBACK_LANGUAGE.to_string(), |l| (*l).to_string())
}

impl SourceClient {
    /// Fetch the statement dataset and split it into hazard and precaution rows.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the fetch fails or the body is not JSON.
    /// An unrecognized JSON shape is not an error; it yields no rows.
    pub async fn load_statement_codes(&self, location: &str) -> Result<StatementCodes, SourceError> {
        let body = self.fetch(location).await?;
        let payload = decode_json(location, &body)?;
        let codes = split_by_prefix(statement_pairs(&payload));
        tracing::info!(
            location,
            hazards = codes.hazards.len(),
            precautions = codes.precautions.len(),
            "loaded statement codes"
        );
        Ok(codes)
    }
}
