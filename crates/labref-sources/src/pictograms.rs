//! GHS pictogram normalization.

use labref_core::{Pictogram, defaults};
use serde_json::Value;

use crate::error::SourceError;
use crate::lookup::{first_text, text_or_empty};
use crate::{SourceClient, decode_json};

const ID_KEYS: [&str; 3] = ["ghs_id", "id", "code"];
const DESCRIPTION_KEYS: [&str; 3] = ["descripcion", "description", "name"];
const ICON_KEYS: [&str; 3] = ["icon_url", "icon", "url"];
const DETAIL_KEYS: [&str; 3] = ["detalle", "detail", "details"];

/// Pictogram rows from a `{ "pictograms": [...] }` document or a bare list.
///
/// Items without an identifier are dropped. Any other document shape yields
/// no rows.
#[must_use]
pub fn pictogram_rows(payload: &Value) -> Vec<Pictogram> {
    let items = payload
        .get("pictograms")
        .and_then(Value::as_array)
        .or_else(|| payload.as_array());

    let Some(items) = items else {
        tracing::warn!("pictogram document has no recognizable item list");
        return Vec::new();
    };

    items
        .iter()
        .filter_map(Value::as_object)
        .filter_map(|item| {
            let ghs_id = first_text(item, &ID_KEYS).filter(|id| !id.is_empty())?;
            Some(Pictogram {
                ghs_id,
                descripcion: text_or_empty(item, &DESCRIPTION_KEYS),
                icon_url: text_or_empty(item, &ICON_KEYS),
                detalle: text_or_empty(item, &DETAIL_KEYS),
            })
        })
        .collect()
}

impl SourceClient {
    /// Load pictograms from `location`, or the built-in GHS01–GHS09 table
    /// when no location is given.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the fetch fails or the body is not JSON.
    pub async fn load_pictograms(
        &self,
        location: Option<&str>,
    ) -> Result<Vec<Pictogram>, SourceError> {
        let Some(location) = location.filter(|l| !l.trim().is_empty()) else {
            tracing::debug!("no pictogram source configured, using built-in table");
            return Ok(defaults::pictograms());
        };

        let body = self.fetch(location).await?;
        let payload = decode_json(location, &body)?;
        let rows = pictogram_rows(&payload);
        tracing::info!(location, pictograms = rows.len(), "loaded pictograms");
        Ok(rows)
    }
}
