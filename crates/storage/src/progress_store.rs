//! Whole-blob persistence of the program progress map.
//!
//! The entire map lives under one key and is re-read and re-written as a
//! unit. Failures degrade silently: an unreadable blob reads as empty, and a
//! failed encode or write leaves the previous blob in place.

use std::collections::HashMap;
use std::sync::Arc;

use kinetips_core::ProgramProgress;
use tracing::{debug, warn};

use super::KeyValueStore;

/// Key under which the progress map is stored.
pub const DEFAULT_PROGRESS_KEY: &str = "workout_progress";

/// Program id -> saved progress.
pub type ProgressMap = HashMap<String, ProgramProgress>;

/// Progress map persisted as a single JSON value.
#[derive(Clone)]
pub struct ProgressStore {
    backend: Arc<dyn KeyValueStore>,
    key: String,
}

impl ProgressStore {
    /// Store under [`DEFAULT_PROGRESS_KEY`].
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(backend, DEFAULT_PROGRESS_KEY)
    }

    /// Store under a custom key.
    pub fn with_key(backend: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Key the map is stored under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the full map. Never fails: missing or corrupt data reads as empty.
    pub fn load(&self) -> ProgressMap {
        let bytes = match self.backend.get(&self.key) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return ProgressMap::new(),
            Err(e) => {
                warn!("Failed to read {}: {}", self.key, e);
                return ProgressMap::new();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(map) => map,
            Err(e) => {
                warn!("Discarding undecodable {} ({} bytes): {}", self.key, bytes.len(), e);
                ProgressMap::new()
            }
        }
    }

    /// Replace the full map. Never fails: on error the previous value stays.
    pub fn save(&self, map: &ProgressMap) {
        let encoded = match serde_json::to_vec(map) {
            Ok(encoded) => encoded,
            Err(e) => {
                warn!("Skipping write of {}: encode failed: {}", self.key, e);
                return;
            }
        };

        match self.backend.set(&self.key, &encoded) {
            Ok(()) => debug!("Saved {} records under {}", map.len(), self.key),
            Err(e) => warn!("Failed to write {}: {}", self.key, e),
        }
    }
}

impl std::fmt::Debug for ProgressStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressStore").field("key", &self.key).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{InMemoryStore, Result, StorageError};
    use kinetips_core::time::fixed_now;

    fn record(id: &str, index: u32) -> ProgramProgress {
        ProgramProgress {
            program_id: id.to_string(),
            current_exercise_index: index,
            total_exercises: 10,
            is_completed: false,
            last_updated: fixed_now(),
            completed_today: 0,
            last_completion_date: None,
        }
    }

    #[test]
    fn test_load_empty_backend() {
        let store = ProgressStore::new(Arc::new(InMemoryStore::new()));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let backend = InMemoryStore::new();
        let store = ProgressStore::new(Arc::new(backend.clone()));

        let mut map = ProgressMap::new();
        map.insert("p_0_2_th_stretch".into(), record("p_0_2_th_stretch", 4));
        map.insert("p_2_4_th_tummy".into(), record("p_2_4_th_tummy", 1));
        store.save(&map);

        assert_eq!(store.load(), map);
        assert!(backend.get(DEFAULT_PROGRESS_KEY).unwrap().is_some());
    }

    #[test]
    fn test_corrupt_blob_reads_empty() {
        let backend = InMemoryStore::new();
        backend.set(DEFAULT_PROGRESS_KEY, b"not json").unwrap();
        let store = ProgressStore::new(Arc::new(backend));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_wrong_shape_reads_empty() {
        let backend = InMemoryStore::new();
        backend.set(DEFAULT_PROGRESS_KEY, br#"{"p_0_2_th_stretch": 3}"#).unwrap();
        let store = ProgressStore::new(Arc::new(backend));
        assert!(store.load().is_empty());
    }

    struct ReadOnlyStore(InMemoryStore);

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
            self.0.get(key)
        }
        fn set(&self, _key: &str, _value: &[u8]) -> Result<()> {
            Err(StorageError::Other("read-only".into()))
        }
        fn remove(&self, _key: &str) -> Result<()> {
            Err(StorageError::Other("read-only".into()))
        }
    }

    #[test]
    fn test_failed_write_keeps_previous_blob() {
        let inner = InMemoryStore::new();
        let mut map = ProgressMap::new();
        map.insert("p_0_2_th_stretch".into(), record("p_0_2_th_stretch", 4));
        ProgressStore::new(Arc::new(inner.clone())).save(&map);

        let store = ProgressStore::new(Arc::new(ReadOnlyStore(inner)));
        store.save(&ProgressMap::new());

        assert_eq!(store.load(), map);
    }

    #[test]
    fn test_custom_key_is_isolated() {
        let backend = InMemoryStore::new();
        let a = ProgressStore::new(Arc::new(backend.clone()));
        let b = ProgressStore::with_key(Arc::new(backend), "other_progress");

        let mut map = ProgressMap::new();
        map.insert("x".into(), record("x", 1));
        b.save(&map);

        assert_eq!(b.key(), "other_progress");
        assert!(a.load().is_empty());
        assert_eq!(b.load().len(), 1);
    }
}
