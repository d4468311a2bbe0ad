use serde::{Deserialize, Serialize};

/// A GHS hazard pictogram keyed by its `GHSnn` identifier.
///
/// Only `ghs_id` is guaranteed non-empty; the descriptive fields may be blank
/// when the source omits them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pictogram {
    pub ghs_id: String,
    pub descripcion: String,
    pub icon_url: String,
    pub detalle: String,
}
