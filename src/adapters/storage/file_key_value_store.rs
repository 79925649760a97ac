//! File-based Key-Value Store Adapter
//!
//! Stores each key as `<key>.json` under a base directory. A write stages
//! every value to `<key>.json.tmp`, copies the current values to
//! `<key>.json.bak`, then renames the staged files into place. If any rename
//! fails the keys already renamed are put back from their backups, so a failed
//! `set_many` leaves every file as it was.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::ports::{entry_size, validate_key, KeyValueStore, StorageError};

const VALUE_EXTENSION: &str = "json";
const STAGING_EXTENSION: &str = "json.tmp";
const BACKUP_EXTENSION: &str = "json.bak";

/// File-based key-value storage
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    base_path: PathBuf,
    quota_bytes: Option<usize>,
    #[cfg(test)]
    fail_rename_at: Option<usize>,
}

impl FileKeyValueStore {
    /// Create a new file store with a base directory
    ///
    /// # Example
    /// ```ignore
    /// let storage = FileKeyValueStore::new("./data/local-storage");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
            quota_bytes: None,
            #[cfg(test)]
            fail_rename_at: None,
        }
    }

    /// Reject writes once the total footprint would exceed `quota_bytes`
    pub fn with_quota(mut self, quota_bytes: usize) -> Self {
        self.quota_bytes = Some(quota_bytes);
        self
    }

    /// Make the rename of the `index`-th entry of every `set_many` fail.
    #[cfg(test)]
    pub(crate) fn failing_rename_at(mut self, index: usize) -> Self {
        self.fail_rename_at = Some(index);
        self
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn value_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{}.{}", key, VALUE_EXTENSION))
    }

    fn staging_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{}.{}", key, STAGING_EXTENSION))
    }

    fn backup_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{}.{}", key, BACKUP_EXTENSION))
    }

    async fn ensure_dir(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))
    }

    /// Footprint of every stored key except those about to be replaced.
    async fn used_bytes_excluding(&self, replaced: &[&str]) -> Result<usize, StorageError> {
        let mut total = 0;
        let mut dir = match fs::read_dir(&self.base_path).await {
            Ok(dir) => dir,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(StorageError::Io(e.to_string())),
        };

        while let Some(entry) = dir
            .next_entry()
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?
        {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(VALUE_EXTENSION) {
                continue;
            }
            let Some(key) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            if replaced.contains(&key) {
                continue;
            }
            let metadata = entry
                .metadata()
                .await
                .map_err(|e| StorageError::Io(e.to_string()))?;
            total += key.len() + metadata.len() as usize;
        }

        Ok(total)
    }

    /// Copies the live value of `key` aside. Returns `false` if the key has
    /// no value yet.
    async fn back_up(&self, key: &str) -> Result<bool, StorageError> {
        let live = self.value_path(key);
        match fs::metadata(&live).await {
            Ok(metadata) if metadata.is_file() => {
                fs::copy(&live, self.backup_path(key))
                    .await
                    .map_err(|e| StorageError::Io(e.to_string()))?;
                Ok(true)
            }
            Ok(_) => Err(StorageError::Io(format!(
                "{} is not a regular file",
                live.display()
            ))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StorageError::Io(e.to_string())),
        }
    }

    async fn rename_into_place(&self, index: usize, key: &str) -> std::io::Result<()> {
        if let Some(e) = self.refused_rename(index) {
            return Err(e);
        }
        fs::rename(self.staging_path(key), self.value_path(key)).await
    }

    #[cfg(test)]
    fn refused_rename(&self, index: usize) -> Option<std::io::Error> {
        (self.fail_rename_at == Some(index))
            .then(|| std::io::Error::new(ErrorKind::Other, "rename refused"))
    }

    #[cfg(not(test))]
    fn refused_rename(&self, _index: usize) -> Option<std::io::Error> {
        None
    }

    /// Puts back the previous value of every key in `committed`.
    async fn roll_back(&self, committed: &[&str], had_value: &[bool]) {
        for (key, had_value) in committed.iter().zip(had_value) {
            let restored = if *had_value {
                fs::rename(self.backup_path(key), self.value_path(key)).await
            } else {
                fs::remove_file(self.value_path(key)).await
            };
            match restored {
                Ok(()) => tracing::warn!("Rolled back '{}'", key),
                Err(e) => tracing::error!("Failed to roll back '{}': {}", key, e),
            }
        }
    }

    /// Removes staging and backup files left by a write.
    async fn discard_side_files(&self, keys: &[&str]) {
        for key in keys {
            for path in [self.staging_path(key), self.backup_path(key)] {
                if let Err(e) = fs::remove_file(&path).await {
                    if e.kind() != ErrorKind::NotFound {
                        tracing::warn!("Failed to remove {}: {}", path.display(), e);
                    }
                }
            }
        }
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        match fs::read_to_string(self.value_path(key)).await {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e.to_string())),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        self.set_many(vec![(key.to_string(), value)]).await
    }

    async fn set_many(&self, entries: Vec<(String, String)>) -> Result<(), StorageError> {
        for (key, _) in &entries {
            validate_key(key)?;
        }
        self.ensure_dir().await?;

        let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();

        if let Some(quota) = self.quota_bytes {
            let incoming: usize = entries.iter().map(|(k, v)| entry_size(k, v)).sum();
            let required = self.used_bytes_excluding(&keys).await? + incoming;
            if required > quota {
                return Err(StorageError::QuotaExceeded { required, quota });
            }
        }

        // Stage every value before touching any live file
        for (key, value) in &entries {
            if let Err(e) = fs::write(self.staging_path(key), value).await {
                self.discard_side_files(&keys).await;
                return Err(StorageError::Io(e.to_string()));
            }
        }

        let mut had_value = Vec::with_capacity(keys.len());
        for key in &keys {
            match self.back_up(key).await {
                Ok(existed) => had_value.push(existed),
                Err(e) => {
                    self.discard_side_files(&keys).await;
                    return Err(e);
                }
            }
        }

        for (index, key) in keys.iter().enumerate() {
            if let Err(e) = self.rename_into_place(index, key).await {
                tracing::error!("Failed to commit '{}': {}", key, e);
                self.roll_back(&keys[..index], &had_value).await;
                self.discard_side_files(&keys).await;
                return Err(StorageError::Io(e.to_string()));
            }
        }

        self.discard_side_files(&keys).await;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        match fs::remove_file(self.value_path(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(e.to_string())),
        }
    }
}
