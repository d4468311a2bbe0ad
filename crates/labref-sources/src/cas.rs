//! CAS catalog normalization from delimited text.

use labref_core::{CasEntry, defaults};

use crate::SourceClient;
use crate::error::SourceError;
use crate::lookup::first_column;

const ID_COLUMNS: [&str; 3] = ["cas_id", "cas", "CAS"];
const NAME_COLUMNS: [&str; 2] = ["nombre", "name"];
const CATEGORY_COLUMNS: [&str; 2] = ["categoria", "category"];

/// Parse a CSV document with a header row into CAS rows.
///
/// Rows whose identifier or name is empty after trimming are dropped, as are
/// all rows when the header has no identifier or name column.
///
/// # Errors
///
/// Returns [`csv::Error`] if the text is not valid CSV (bad UTF-8, broken
/// quoting).
pub fn cas_rows(text: &[u8]) -> Result<Vec<CasEntry>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text);

    let headers = reader.headers()?.clone();
    let id_col = first_column(&headers, &ID_COLUMNS);
    let name_col = first_column(&headers, &NAME_COLUMNS);
    let category_col = first_column(&headers, &CATEGORY_COLUMNS);

    let (Some(id_col), Some(name_col)) = (id_col, name_col) else {
        tracing::warn!(
            headers = ?headers,
            "CAS catalog has no identifier or name column"
        );
        // Still walk the records so malformed text surfaces as an error.
        for record in reader.records() {
            record?;
        }
        return Ok(Vec::new());
    };

    let mut rows = Vec::new();
    let mut dropped = 0usize;
    for record in reader.records() {
        let record = record?;
        let field = |col: Option<usize>| {
            col.and_then(|c| record.get(c))
                .map(str::trim)
                .unwrap_or_default()
                .to_string()
        };
        let cas_id = field(Some(id_col));
        let nombre = field(Some(name_col));
        if cas_id.is_empty() || nombre.is_empty() {
            dropped += 1;
            continue;
        }
        rows.push(CasEntry {
            cas_id,
            nombre,
            categoria: field(category_col),
        });
    }

    if dropped > 0 {
        tracing::debug!(dropped, "skipped CAS rows without identifier or name");
    }
    Ok(rows)
}

impl SourceClient {
    /// Load the CAS catalog from `location`, or the built-in sample when no
    /// location is given.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the fetch fails or the body is not CSV.
    pub async fn load_cas_catalog(
        &self,
        location: Option<&str>,
    ) -> Result<Vec<CasEntry>, SourceError> {
        let Some(location) = location.filter(|l| !l.trim().is_empty()) else {
            tracing::debug!("no CAS source configured, using built-in sample");
            return Ok(defaults::cas_sample());
        };

        let body = self.fetch(location).await?;
        let rows = cas_rows(&body).map_err(|source| SourceError::Csv {
            location: location.to_string(),
            source,
        })?;
        tracing::info!(location, cas_entries = rows.len(), "loaded CAS catalog");
        Ok(rows)
    }
}
