//! Local Profile Store Adapter
//!
//! Keeps each user's edits as a JSON object under
//! `unicom_user_custom_data_<id>` and lays them over the built-in record on
//! every read. Logging out never touches these keys, so edits survive.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::foundation::UserId;
use crate::domain::profile::seed::demo_profiles;
use crate::domain::profile::{ProfileUpdate, UserProfile};
use crate::ports::{json_entry, profile_edits_key, read_json, KeyValueStore, ProfileStore, StorageError};

/// Profiles of the built-in accounts with edits persisted to key-value storage
pub struct LocalProfileStore {
    storage: Arc<dyn KeyValueStore>,
    base: Vec<UserProfile>,
    lock: Mutex<()>,
}

impl LocalProfileStore {
    /// Store over the two demo accounts.
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self::with_base(storage, demo_profiles())
    }

    pub fn with_base(storage: Arc<dyn KeyValueStore>, base: Vec<UserProfile>) -> Self {
        Self {
            storage,
            base,
            lock: Mutex::new(()),
        }
    }

    fn base_profile(&self, user_id: &UserId) -> Option<&UserProfile> {
        self.base.iter().find(|p| &p.id == user_id)
    }

    async fn load_edits(&self, user_id: &UserId) -> Result<ProfileUpdate, StorageError> {
        let edits: Option<ProfileUpdate> =
            read_json(self.storage.as_ref(), &profile_edits_key(user_id)).await?;
        Ok(edits.unwrap_or_default())
    }
}

#[async_trait]
impl ProfileStore for LocalProfileStore {
    async fn get(&self, user_id: &UserId) -> Result<Option<UserProfile>, StorageError> {
        let Some(base) = self.base_profile(user_id) else {
            return Ok(None);
        };
        let _guard = self.lock.lock().await;
        let edits = self.load_edits(user_id).await?;
        Ok(Some(edits.apply_to(base)))
    }

    async fn update(
        &self,
        user_id: &UserId,
        update: ProfileUpdate,
    ) -> Result<Option<UserProfile>, StorageError> {
        let Some(base) = self.base_profile(user_id) else {
            return Ok(None);
        };
        let _guard = self.lock.lock().await;
        let edits = self.load_edits(user_id).await?.merged_with(update);

        let (key, json) = json_entry(&profile_edits_key(user_id), &edits)?;
        self.storage.set(&key, json).await.map_err(|e| {
            tracing::error!("Failed to persist profile edits for user {}: {}", user_id, e);
            e
        })?;
        Ok(Some(edits.apply_to(base)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::{FileKeyValueStore, InMemoryKeyValueStore};
    use tempfile::TempDir;

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    fn bio(text: &str) -> ProfileUpdate {
        ProfileUpdate {
            bio: Some(text.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn unedited_profile_is_the_base_record() {
        let store = LocalProfileStore::new(Arc::new(InMemoryKeyValueStore::new()));

        let profile = store.get(&user("2")).await.unwrap().unwrap();

        assert_eq!(profile, demo_profiles()[1]);
    }

    #[tokio::test]
    async fn unknown_user_has_no_profile() {
        let storage = InMemoryKeyValueStore::new();
        let store = LocalProfileStore::new(Arc::new(storage.clone()));

        assert!(store.get(&user("99")).await.unwrap().is_none());
        assert!(store.update(&user("99"), bio("x")).await.unwrap().is_none());
        assert!(storage.get("unicom_user_custom_data_99").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn edits_are_merged_over_base_on_read() {
        let storage = InMemoryKeyValueStore::new();
        storage
            .set(
                "unicom_user_custom_data_2",
                r#"{"email":"me@example.com","position":"Architect"}"#.to_string(),
            )
            .await
            .unwrap();
        let store = LocalProfileStore::new(Arc::new(storage));

        let profile = store.get(&user("2")).await.unwrap().unwrap();

        assert_eq!(profile.email, "me@example.com");
        assert_eq!(profile.position, "Architect");
        assert_eq!(profile.username, "user");
        assert_eq!(profile.join_date, "2021-06-15");
    }

    #[tokio::test]
    async fn partial_updates_accumulate() {
        let store = LocalProfileStore::new(Arc::new(InMemoryKeyValueStore::new()));
        let details = ProfileUpdate {
            company: Some("Example Corp".to_string()),
            ..Default::default()
        };
        let avatar = ProfileUpdate {
            avatar: Some("data:image/png;base64,AAAA".to_string()),
            ..Default::default()
        };

        store.update(&user("2"), details).await.unwrap();
        let profile = store.update(&user("2"), avatar).await.unwrap().unwrap();

        assert_eq!(profile.company, "Example Corp");
        assert_eq!(profile.avatar, "data:image/png;base64,AAAA");
        assert_eq!(store.get(&user("2")).await.unwrap().unwrap(), profile);
    }

    #[tokio::test]
    async fn edits_are_kept_per_user() {
        let storage = InMemoryKeyValueStore::new();
        let store = LocalProfileStore::new(Arc::new(storage.clone()));

        store.update(&user("2"), bio("customer")).await.unwrap();

        let admin = store.get(&user("1")).await.unwrap().unwrap();
        assert_eq!(admin, demo_profiles()[0]);
        let raw = storage.get("unicom_user_custom_data_2").await.unwrap().unwrap();
        assert_eq!(raw, r#"{"bio":"customer"}"#);
    }

    #[tokio::test]
    async fn failed_write_keeps_previous_edits() {
        let storage = InMemoryKeyValueStore::new();
        let store = LocalProfileStore::new(Arc::new(storage.clone()));
        store.update(&user("2"), bio("first")).await.unwrap();

        storage.set_fail_writes(true);
        assert!(store.update(&user("2"), bio("second")).await.is_err());
        storage.set_fail_writes(false);

        assert_eq!(store.get(&user("2")).await.unwrap().unwrap().bio, "first");
    }

    #[tokio::test]
    async fn corrupt_edits_are_storage_error() {
        let storage = InMemoryKeyValueStore::new();
        storage
            .set("unicom_user_custom_data_2", "not json".to_string())
            .await
            .unwrap();
        let store = LocalProfileStore::new(Arc::new(storage));

        let err = store.get(&user("2")).await.unwrap_err();

        assert!(matches!(err, StorageError::Deserialization { .. }));
    }

    #[tokio::test]
    async fn edits_survive_reopen_on_file_storage() {
        let temp_dir = TempDir::new().unwrap();
        let open = || LocalProfileStore::new(Arc::new(FileKeyValueStore::new(temp_dir.path())));

        open().update(&user("1"), bio("changed")).await.unwrap();

        let profile = open().get(&user("1")).await.unwrap().unwrap();
        assert_eq!(profile.bio, "changed");
        assert!(temp_dir.path().join("unicom_user_custom_data_1.json").exists());
    }
}
