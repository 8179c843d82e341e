//! Document storage for match records. The scoring engine never sees this;
//! the rescore layer reads a document, recomputes, and writes it back.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use serde_json::Value;
use std::error::Error;
use std::fmt;

use crate::error::MatchPlayError;

#[derive(Debug, Clone)]
pub struct StorageError {
    message: String,
}

impl StorageError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for StorageError {}

impl From<String> for StorageError {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for StorageError {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::new(value.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::new(value.to_string())
    }
}

/// Callback applied to a document inside `MatchStore::update_match`.
pub type DocumentUpdate<'a> = dyn FnMut(&mut Value) -> Result<(), MatchPlayError> + 'a;

pub trait MatchStore {
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    fn get_match(&self, match_id: &str) -> Result<Option<Value>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn put_match(&mut self, match_id: &str, doc: &Value) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    fn match_ids(&self) -> Result<Vec<String>, StorageError>;

    /// Read-modify-write of one document. Backends that support it run the
    /// whole update as a single transaction.
    ///
    /// # Errors
    ///
    /// Returns `MatchPlayError::NotFound` for an unknown id, or whatever
    /// `apply` or the backend reports.
    fn update_match(
        &mut self,
        match_id: &str,
        apply: &mut DocumentUpdate<'_>,
    ) -> Result<Value, MatchPlayError> {
        let mut doc = self
            .get_match(match_id)?
            .ok_or_else(|| MatchPlayError::NotFound(format!("match {match_id}")))?;
        apply(&mut doc)?;
        self.put_match(match_id, &doc)?;
        Ok(doc)
    }
}
