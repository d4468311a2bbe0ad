//! Reference table bootstrap.
//!
//! Embeds the table definitions at compile time. Every statement uses
//! `IF NOT EXISTS`, so running it against an existing store is a no-op.
//! Existing tables are never altered.

use crate::RefDb;
use crate::error::DatabaseError;

/// The four reference tables.
const REFERENCE_TABLES: &str = include_str!("../schema/001_reference_tables.sql");

impl RefDb {
    /// Create any missing reference table.
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::Schema`] if a statement fails.
    pub async fn ensure_schema(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(REFERENCE_TABLES)
            .await
            .map_err(|e| DatabaseError::Schema(format!("001_reference_tables: {e}")))?;
        tracing::debug!("reference tables ensured");
        Ok(())
    }
}
