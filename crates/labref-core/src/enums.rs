//! Catalog kinds and their storage mapping.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four independent reference catalogs loaded by a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    HazardCodes,
    PrecautionCodes,
    Pictograms,
    CasCatalog,
}

impl ReferenceKind {
    /// All kinds in the order they are reconciled and reported.
    pub const ALL: [Self; 4] = [
        Self::HazardCodes,
        Self::PrecautionCodes,
        Self::Pictograms,
        Self::CasCatalog,
    ];

    /// Return the string representation used in logs and JSON output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HazardCodes => "hazard_codes",
            Self::PrecautionCodes => "precaution_codes",
            Self::Pictograms => "pictograms",
            Self::CasCatalog => "cas_catalog",
        }
    }

    /// SQL table holding this catalog.
    #[must_use]
    pub const fn table(self) -> &'static str {
        match self {
            Self::HazardCodes => "h_codes",
            Self::PrecautionCodes => "p_codes",
            Self::Pictograms => "ghs_pictogramas",
            Self::CasCatalog => "cas_catalogo",
        }
    }

    /// Natural-key column of [`Self::table`].
    #[must_use]
    pub const fn key_column(self) -> &'static str {
        match self {
            Self::HazardCodes => "h_id",
            Self::PrecautionCodes => "p_id",
            Self::Pictograms => "ghs_id",
            Self::CasCatalog => "cas_id",
        }
    }

    /// Human label used in the summary lines.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::HazardCodes => "H-codes",
            Self::PrecautionCodes => "P-codes",
            Self::Pictograms => "Pictograms",
            Self::CasCatalog => "CAS entries",
        }
    }
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_and_keys_are_distinct() {
        let tables: std::collections::HashSet<_> =
            ReferenceKind::ALL.iter().map(|k| k.table()).collect();
        assert_eq!(tables.len(), 4);
        assert_eq!(ReferenceKind::Pictograms.key_column(), "ghs_id");
    }

    #[test]
    fn serializes_snake_case() {
        let json = serde_json::to_string(&ReferenceKind::CasCatalog).unwrap();
        assert_eq!(json, "\"cas_catalog\"");
        assert_eq!(ReferenceKind::CasCatalog.to_string(), "cas_catalog");
    }
}
