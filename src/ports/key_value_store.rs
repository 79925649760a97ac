//! Key-value storage port.
//!
//! Durable string storage with browser local-storage semantics: flat string
//! keys, string values, an optional byte quota. Collections are stored as JSON
//! arrays under fixed keys.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::subscription::SubscriptionError;

/// Key holding the active subscription collection.
pub const SUBSCRIPTIONS_KEY: &str = "subscriptions";

/// Key holding the deleted subscription collection.
pub const DELETED_SUBSCRIPTIONS_KEY: &str = "deletedSubscriptions";

/// Key holding the favorites list.
pub const FAVORITES_KEY: &str = "favorites";

/// Prefix of the per-user keys holding profile edits.
pub const PROFILE_EDITS_KEY_PREFIX: &str = "unicom_user_custom_data";

/// Key holding the profile edits of `user_id`.
pub fn profile_edits_key(user_id: &UserId) -> String {
    format!("{}_{}", PROFILE_EDITS_KEY_PREFIX, user_id)
}

/// Errors that can occur during storage operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("Storage quota exceeded: {required} bytes required, {quota} allowed")]
    QuotaExceeded { required: usize, quota: usize },

    #[error("IO error: {0}")]
    Io(String),

    #[error("Failed to serialize '{key}': {reason}")]
    Serialization { key: String, reason: String },

    #[error("Failed to deserialize '{key}': {reason}")]
    Deserialization { key: String, reason: String },

    #[error("Invalid storage key: '{0}'")]
    InvalidKey(String),
}

impl From<StorageError> for SubscriptionError {
    fn from(err: StorageError) -> Self {
        SubscriptionError::Storage(err.to_string())
    }
}

impl From<StorageError> for DomainError {
    fn from(err: StorageError) -> Self {
        DomainError::new(ErrorCode::StorageError, err.to_string())
    }
}

/// Port for durable string storage.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a value. Returns `None` if the key has never been written.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a single value.
    ///
    /// # Errors
    ///
    /// - `QuotaExceeded` if the write would exceed the quota
    /// - `Io` if the write fails
    async fn set(&self, key: &str, value: String) -> Result<(), StorageError>;

    /// Write several values as one step.
    ///
    /// On error none of the entries is visible to later reads.
    async fn set_many(&self, entries: Vec<(String, String)>) -> Result<(), StorageError>;

    /// Delete a value. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Reads and decodes a JSON value stored under `key`.
pub async fn read_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match store.get(key).await? {
        Some(text) => serde_json::from_str(&text)
            .map(Some)
            .map_err(|e| StorageError::Deserialization {
                key: key.to_string(),
                reason: e.to_string(),
            }),
        None => Ok(None),
    }
}

/// Encodes `value` as a `(key, json)` entry for `set` / `set_many`.
pub fn json_entry<T: Serialize + ?Sized>(
    key: &str,
    value: &T,
) -> Result<(String, String), StorageError> {
    serde_json::to_string(value)
        .map(|json| (key.to_string(), json))
        .map_err(|e| StorageError::Serialization {
            key: key.to_string(),
            reason: e.to_string(),
        })
}

/// Storage footprint of one entry, counted like local storage does.
pub fn entry_size(key: &str, value: &str) -> usize {
    key.len() + value.len()
}

/// Keys are flat identifiers: ASCII letters, digits, `_` and `-`.
pub fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}
