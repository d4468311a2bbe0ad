//! Schema-flexible field lookup.
//!
//! Upstream datasets name the same field in several ways (`code` / `Code` /
//! `id`, `nombre` / `name`, ...). Instead of binding to one fixed struct, the
//! normalizers probe an ordered list of candidate names and take the first
//! one that holds a usable value.

use serde_json::{Map, Value};

/// Return the first candidate key holding a non-empty scalar, as trimmed text.
///
/// Strings are taken as-is, numbers and booleans via their JSON rendering.
/// Null, arrays and objects count as absent, as do strings that are empty
/// before trimming. A whitespace-only string is returned as `""` and stops
/// the probe, which callers then filter out.
#[must_use]
pub fn first_text(item: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| item.get(*key))
        .find_map(scalar_text)
        .map(|text| text.trim().to_string())
}

/// [`first_text`] with absent values mapped to an empty string.
#[must_use]
pub fn text_or_empty(item: &Map<String, Value>, keys: &[&str]) -> String {
    first_text(item, keys).unwrap_or_default()
}

/// Index of the first header matching one of `candidates`.
///
/// Exact matches are preferred in candidate order; if none match exactly the
/// probe is repeated ignoring ASCII case.
#[must_use]
pub fn first_column(headers: &csv::StringRecord, candidates: &[&str]) -> Option<usize> {
    column_position(headers, candidates, false)
        .or_else(|| column_position(headers, candidates, true))
}

fn column_position(
    headers: &csv::StringRecord,
    candidates: &[&str],
    ignore_case: bool,
) -> Option<usize> {
    candidates.iter().find_map(|candidate| {
        headers.iter().position(|header| {
            let header = header.trim();
            if ignore_case {
                header.eq_ignore_ascii_case(candidate)
            } else {
                header == *candidate
            }
        })
    })
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
