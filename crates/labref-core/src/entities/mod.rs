//! Entity structs for the reference catalogs.
//!
//! Each entity maps to one table keyed by its natural identifier. Rows are
//! transient upsert payloads: they are built from source data during a load
//! run and written once.

mod cas;
mod pictogram;
mod statement;

pub use cas::CasEntry;
pub use pictogram::Pictogram;
pub use statement::{HazardCode, PrecautionCode};
