//! Shared test utilities for labref-db unit tests.

pub(crate) mod helpers {
    use crate::RefDb;

    /// In-memory store with the reference tables created.
    pub async fn test_db() -> RefDb {
        let db = RefDb::open_local(":memory:").await.unwrap();
        db.ensure_schema().await.unwrap();
        db
    }

    /// Read one text column of the row keyed by `key`.
    pub async fn column(db: &RefDb, table: &str, key_col: &str, col: &str, key: &str) -> Option<String> {
        let mut rows = db
            .conn()
            .query(
                &format!("SELECT {col} FROM {table} WHERE {key_col} = ?1"),
                [key],
            )
            .await
            .unwrap();
        rows.next()
            .await
            .unwrap()
            .map(|row| row.get::<String>(0).unwrap())
    }
}
