use serde::{Deserialize, Serialize};

/// An entry of the CAS registry-number catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CasEntry {
    /// CAS registry number, e.g. `7732-18-5`.
    pub cas_id: String,
    pub nombre: String,
    /// Free-form category (`Ácido`, `Base`, ...). May be empty.
    pub categoria: String,
}
