//! In-memory key-value backend for tests and previews.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::{KeyValueStore, Result, StorageError};

/// Shared in-memory backend.
///
/// Clones share the same map, so several services can be pointed at one
/// backend.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    values: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys held.
    pub fn len(&self) -> usize {
        self.values.lock().map(|g| g.len()).unwrap_or(0)
    }

    /// Whether no keys are held.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Other(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let mut guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Other(e.to_string()))?;
        guard.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Other(e.to_string()))?;
        guard.remove(key);
        Ok(())
    }
}
