//! Output types reported by `labref` after a successful run.

use serde::{Deserialize, Serialize};

use crate::enums::ReferenceKind;

/// Number of rows loaded per catalog.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoadSummary {
    pub hazard_codes: usize,
    pub precaution_codes: usize,
    pub pictograms: usize,
    pub cas_entries: usize,
}

impl LoadSummary {
    #[must_use]
    pub const fn count(&self, kind: ReferenceKind) -> usize {
        match kind {
            ReferenceKind::HazardCodes => self.hazard_codes,
            ReferenceKind::PrecautionCodes => self.precaution_codes,
            ReferenceKind::Pictograms => self.pictograms,
            ReferenceKind::CasCatalog => self.cas_entries,
        }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.hazard_codes + self.precaution_codes + self.pictograms + self.cas_entries
    }

    /// The four `"<label> loaded: <n>"` lines, in reconcile order.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        ReferenceKind::ALL
            .iter()
            .map(|kind| format!("{} loaded: {}", kind.label(), self.count(*kind)))
            .collect()
    }
}
