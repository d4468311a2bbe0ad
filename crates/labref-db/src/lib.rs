//! # labref-db
//!
//! libSQL persistence for the labref reference catalogs.
//!
//! Holds the four reference tables (`h_codes`, `p_codes`, `ghs_pictogramas`,
//! `cas_catalogo`) and reconciles a [`labref_core::ReferenceSet`] into them
//! with insert-or-update-on-key semantics inside a single transaction.
//!
//! Uses the `libsql` crate: local files and `:memory:` for embedded use,
//! `libsql://` / `https://` URLs for a remote server.

pub mod error;
pub mod reconcile;
mod schema;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use labref_core::{LoadSummary, ReferenceKind};
use libsql::Builder;

/// Handle to the reference-data store.
pub struct RefDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl RefDb {
    /// Open the store behind a connection string.
    ///
    /// `libsql://`, `http://` and `https://` URLs open a remote database and
    /// require `auth_token`; anything else is a local path (or `:memory:`).
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::MissingAuthToken`] for a remote URL without a
    /// token, or [`DatabaseError::LibSql`] if the database cannot be opened.
    pub async fn open(url: &str, auth_token: Option<&str>) -> Result<Self, DatabaseError> {
        let url = url.trim();
        if is_remote_url(url) {
            let token = auth_token.ok_or_else(|| DatabaseError::MissingAuthToken(url.into()))?;
            Self::open_remote(url, token).await
        } else {
            Self::open_local(url).await
        }
    }

    /// Open a local database file, or `:memory:`.
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::LibSql`] if the database cannot be opened.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;
        tracing::debug!(path, "opened local reference store");
        Ok(Self { db, conn })
    }

    /// Open a remote libSQL database.
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::LibSql`] if the connection cannot be built.
    pub async fn open_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_remote(url.to_string(), auth_token.to_string())
            .build()
            .await?;
        let conn = db.connect()?;
        tracing::debug!(url, "opened remote reference store");
        Ok(Self { db, conn })
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Current row count of every reference table.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a count query fails (e.g. a table is missing).
    pub async fn table_counts(&self) -> Result<LoadSummary, DatabaseError> {
        let mut counts = LoadSummary::default();
        for kind in ReferenceKind::ALL {
            let n = self.count_rows(kind).await?;
            match kind {
                ReferenceKind::HazardCodes => counts.hazard_codes = n,
                ReferenceKind::PrecautionCodes => counts.precaution_codes = n,
                ReferenceKind::Pictograms => counts.pictograms = n,
                ReferenceKind::CasCatalog => counts.cas_entries = n,
            }
        }
        Ok(counts)
    }

    async fn count_rows(&self, kind: ReferenceKind) -> Result<usize, DatabaseError> {
        let mut rows = self
            .conn
            .query(&format!("SELECT COUNT(*) FROM {}", kind.table()), ())
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let count = row.get::<i64>(0)?;
        usize::try_from(count)
            .map_err(|_| DatabaseError::InvalidState(format!("negative count in {}", kind.table())))
    }
}

fn is_remote_url(url: &str) -> bool {
    ["libsql://", "http://", "https://"]
        .iter()
        .any(|scheme| url.starts_with(scheme))
}
