//! # labref-core
//!
//! Core types shared by every labref crate:
//! - Canonical row entities for the four reference catalogs
//! - `ReferenceKind` describing each catalog and its storage table
//! - `ReferenceSet`, the rows gathered by a single load run
//! - Built-in default tables (GHS pictograms, sample CAS entries)
//! - `LoadSummary`, the per-catalog counts reported after a run

pub mod defaults;
pub mod entities;
pub mod enums;
pub mod responses;
pub mod set;

pub use defaults::DEFAULT_HP_URL;
pub use entities::{CasEntry, HazardCode, Pictogram, PrecautionCode};
pub use enums::ReferenceKind;
pub use responses::LoadSummary;
pub use set::ReferenceSet;
