//! The rows gathered by one load run.

use crate::entities::{CasEntry, HazardCode, Pictogram, PrecautionCode};
use crate::responses::LoadSummary;

/// Four independent row collections, reconciled in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceSet {
    pub hazard_codes: Vec<HazardCode>,
    pub precaution_codes: Vec<PrecautionCode>,
    pub pictograms: Vec<Pictogram>,
    pub cas_entries: Vec<CasEntry>,
}

impl ReferenceSet {
    /// Row counts per catalog.
    #[must_use]
    pub const fn summary(&self) -> LoadSummary {
        LoadSummary {
            hazard_codes: self.hazard_codes.len(),
            precaution_codes: self.precaution_codes.len(),
            pictograms: self.pictograms.len(),
            cas_entries: self.cas_entries.len(),
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.hazard_codes.is_empty()
            && self.precaution_codes.is_empty()
            && self.pictograms.is_empty()
            && self.cas_entries.is_empty()
    }
}
