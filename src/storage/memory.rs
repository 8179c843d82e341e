use ahash::AHashMap;
use serde_json::Value;

use super::{MatchStore, StorageError};

/// In-process store, used by tests and one-shot CLI runs.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    docs: AHashMap<String, Value>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl MatchStore for MemoryStore {
    fn get_match(&self, match_id: &str) -> Result<Option<Value>, StorageError> {
        Ok(self.docs.get(match_id).cloned())
    }

    fn put_match(&mut self, match_id: &str, doc: &Value) -> Result<(), StorageError> {
        self.docs.insert(match_id.to_string(), doc.clone());
        Ok(())
    }

    fn match_ids(&self) -> Result<Vec<String>, StorageError> {
        let mut ids: Vec<String> = self.docs.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }
}
