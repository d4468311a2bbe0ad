//! Insert-or-update reconciliation of a [`ReferenceSet`].
//!
//! All four catalogs are written inside one transaction, in the order
//! H-codes, P-codes, pictograms, CAS entries. A row whose key already
//! exists has its non-key columns overwritten with the incoming values.
//! Rows absent from the input are left untouched.

use labref_core::{
    CasEntry, HazardCode, LoadSummary, Pictogram, PrecautionCode, ReferenceKind, ReferenceSet,
};
use libsql::Value;

use crate::RefDb;
use crate::error::DatabaseError;

/// A row that can be upserted into its reference table.
trait Upsert {
    const KIND: ReferenceKind;
    const SQL: &'static str;

    fn key(&self) -> &str;
    fn params(&self) -> Vec<Value>;
}

impl Upsert for HazardCode {
    const KIND: ReferenceKind = ReferenceKind::HazardCodes;
    const SQL: &'static str = "INSERT INTO h_codes (h_id, descripcion) VALUES (?1, ?2) \
         ON CONFLICT(h_id) DO UPDATE SET descripcion = excluded.descripcion";

    fn key(&self) -> &str {
        &self.code
    }

    fn params(&self) -> Vec<Value> {
        vec![text(&self.code), text(&self.statement)]
    }
}

impl Upsert for PrecautionCode {
    const KIND: ReferenceKind = ReferenceKind::PrecautionCodes;
    const SQL: &'static str = "INSERT INTO p_codes (p_id, descripcion) VALUES (?1, ?2) \
         ON CONFLICT(p_id) DO UPDATE SET descripcion = excluded.descripcion";

    fn key(&self) -> &str {
        &self.code
    }

    fn params(&self) -> Vec<Value> {
        vec![text(&self.code), text(&self.statement)]
    }
}

impl Upsert for Pictogram {
    const KIND: ReferenceKind = ReferenceKind::Pictograms;
    const SQL: &'static str = "INSERT INTO ghs_pictogramas (ghs_id, descripcion, icon_url, detalle) \
         VALUES (?1, ?2, ?3, ?4) \
         ON CONFLICT(ghs_id) DO UPDATE SET descripcion = excluded.descripcion, \
         icon_url = excluded.icon_url, detalle = excluded.detalle";

    fn key(&self) -> &str {
        &self.ghs_id
    }

    fn params(&self) -> Vec<Value> {
        vec![
            text(&self.ghs_id),
            text(&self.descripcion),
            text(&self.icon_url),
            text(&self.detalle),
        ]
    }
}

impl Upsert for CasEntry {
    const KIND: ReferenceKind = ReferenceKind::CasCatalog;
    const SQL: &'static str = "INSERT INTO cas_catalogo (cas_id, nombre, categoria) VALUES (?1, ?2, ?3) \
         ON CONFLICT(cas_id) DO UPDATE SET nombre = excluded.nombre, categoria = excluded.categoria";

    fn key(&self) -> &str {
        &self.cas_id
    }

    fn params(&self) -> Vec<Value> {
        vec![text(&self.cas_id), text(&self.nombre), text(&self.categoria)]
    }
}

fn text(s: &str) -> Value {
    Value::Text(s.to_string())
}

/// Upsert every row of one catalog, stopping at the first failure.
async fn upsert_rows<T: Upsert>(
    conn: &libsql::Connection,
    rows: &[T],
) -> Result<usize, DatabaseError> {
    for row in rows {
        conn.execute(T::SQL, row.params())
            .await
            .map_err(|source| DatabaseError::Upsert {
                table: T::KIND.table(),
                key: row.key().to_string(),
                source,
            })?;
    }
    tracing::debug!(table = T::KIND.table(), rows = rows.len(), "upserted");
    Ok(rows.len())
}

async fn upsert_all(
    conn: &libsql::Connection,
    set: &ReferenceSet,
) -> Result<LoadSummary, DatabaseError> {
    Ok(LoadSummary {
        hazard_codes: upsert_rows(conn, &set.hazard_codes).await?,
        precaution_codes: upsert_rows(conn, &set.precaution_codes).await?,
        pictograms: upsert_rows(conn, &set.pictograms).await?,
        cas_entries: upsert_rows(conn, &set.cas_entries).await?,
    })
}

impl RefDb {
    /// Upsert the whole set in a single transaction.
    ///
    /// On success every row is committed and the per-catalog counts are
    /// returned. On any failure the transaction is rolled back and the store
    /// is left exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::Upsert`] naming the failing table and key, or
    /// [`DatabaseError::LibSql`] if the transaction cannot be opened or
    /// committed.
    pub async fn reconcile(&self, set: &ReferenceSet) -> Result<LoadSummary, DatabaseError> {
        let tx = self.conn.transaction().await?;
        let written = upsert_all(&tx, set).await;

        match written {
            Ok(summary) => {
                tx.commit().await?;
                tracing::info!(
                    hazard_codes = summary.hazard_codes,
                    precaution_codes = summary.precaution_codes,
                    pictograms = summary.pictograms,
                    cas_entries = summary.cas_entries,
                    "reference data committed"
                );
                Ok(summary)
            }
            Err(e) => {
                if let Err(rollback) = tx.rollback().await {
                    tracing::warn!(error = %rollback, "rollback failed");
                }
                tracing::warn!(error = %e, "reconcile rolled back");
                Err(e)
            }
        }
    }
}
