use rusqlite::{Connection, OptionalExtension, TransactionBehavior, params};
use serde_json::Value;
use std::path::Path;
use tracing::info;

use super::{DocumentUpdate, MatchStore, StorageError};
use crate::error::MatchPlayError;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS match_doc (
    id TEXT NOT NULL PRIMARY KEY,
    doc TEXT NOT NULL,
    updated_at TEXT NOT NULL
);";

const UPSERT: &str = "INSERT INTO match_doc (id, doc, updated_at) VALUES (?1, ?2, ?3)
    ON CONFLICT(id) DO UPDATE SET doc = excluded.doc, updated_at = excluded.updated_at;";

/// Match documents stored as JSON text, one row per match.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// # Errors
    ///
    /// Returns `StorageError` if the database cannot be opened or the table
    /// cannot be created.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        conn.execute_batch(SCHEMA)?;
        info!(db = %path.display(), "opened match store");
        Ok(Self { conn })
    }

    /// # Errors
    ///
    /// Returns `StorageError` if the in-memory database cannot be created.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    /// When the document was last written (RFC 3339, UTC).
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the query fails.
    pub fn updated_at(&self, match_id: &str) -> Result<Option<String>, StorageError> {
        Ok(self
            .conn
            .query_row(
                "SELECT updated_at FROM match_doc WHERE id = ?1",
                params![match_id],
                |row| row.get(0),
            )
            .optional()?)
    }
}

fn read_doc(conn: &Connection, match_id: &str) -> Result<Option<Value>, StorageError> {
    let text: Option<String> = conn
        .query_row(
            "SELECT doc FROM match_doc WHERE id = ?1",
            params![match_id],
            |row| row.get(0),
        )
        .optional()?;
    match text {
        Some(text) => Ok(Some(serde_json::from_str(&text)?)),
        None => Ok(None),
    }
}

fn write_doc(conn: &Connection, match_id: &str, doc: &Value) -> Result<(), StorageError> {
    let text = serde_json::to_string(doc)?;
    let now = chrono::Utc::now().to_rfc3339();
    conn.execute(UPSERT, params![match_id, text, now])?;
    Ok(())
}

impl MatchStore for SqliteStore {
    fn get_match(&self, match_id: &str) -> Result<Option<Value>, StorageError> {
        read_doc(&self.conn, match_id)
    }

    fn put_match(&mut self, match_id: &str, doc: &Value) -> Result<(), StorageError> {
        write_doc(&self.conn, match_id, doc)
    }

    fn match_ids(&self) -> Result<Vec<String>, StorageError> {
        let mut stmt = self.conn.prepare("SELECT id FROM match_doc ORDER BY id")?;
        let ids = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ids)
    }

    /// Runs the read, the update and the write inside one immediate
    /// transaction so concurrent editors of the same database serialize.
    fn update_match(
        &mut self,
        match_id: &str,
        apply: &mut DocumentUpdate<'_>,
    ) -> Result<Value, MatchPlayError> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(StorageError::from)?;
        let mut doc = read_doc(&tx, match_id)?
            .ok_or_else(|| MatchPlayError::NotFound(format!("match {match_id}")))?;
        apply(&mut doc)?;
        write_doc(&tx, match_id, &doc)?;
        tx.commit().map_err(StorageError::from)?;
        Ok(doc)
    }
}
