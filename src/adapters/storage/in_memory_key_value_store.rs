//! In-Memory Key-Value Store Adapter
//!
//! Keeps values in a shared map. Useful for testing and development, and for
//! exercising quota and write-failure paths.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{entry_size, validate_key, KeyValueStore, StorageError};

/// In-memory key-value storage
#[derive(Debug, Clone)]
pub struct InMemoryKeyValueStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
    quota_bytes: Option<usize>,
    fail_writes: Arc<AtomicBool>,
}

impl InMemoryKeyValueStore {
    /// Create an unbounded in-memory store
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            quota_bytes: None,
            fail_writes: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a store that rejects writes once the total footprint would
    /// exceed `quota_bytes`
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            quota_bytes: Some(quota_bytes),
            ..Self::new()
        }
    }

    /// Make every following write fail with an IO error until reset.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    /// Get the number of stored keys
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Total footprint of all entries
    pub async fn used_bytes(&self) -> usize {
        self.entries
            .read()
            .await
            .iter()
            .map(|(k, v)| entry_size(k, v))
            .sum()
    }
}

impl Default for InMemoryKeyValueStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        self.set_many(vec![(key.to_string(), value)]).await
    }

    async fn set_many(&self, entries: Vec<(String, String)>) -> Result<(), StorageError> {
        for (key, _) in &entries {
            validate_key(key)?;
        }
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Io("simulated write failure".to_string()));
        }

        let mut map = self.entries.write().await;

        if let Some(quota) = self.quota_bytes {
            let mut projected: HashMap<&str, usize> = map
                .iter()
                .map(|(k, v)| (k.as_str(), entry_size(k, v)))
                .collect();
            for (key, value) in &entries {
                projected.insert(key.as_str(), entry_size(key, value));
            }
            let required: usize = projected.values().sum();
            if required > quota {
                return Err(StorageError::QuotaExceeded { required, quota });
            }
        }

        for (key, value) in entries {
            map.insert(key, value);
        }
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Io("simulated write failure".to_string()));
        }
        self.entries.write().await.remove(key);
        Ok(())
    }
}
