//! Local Favorites Store Adapter
//!
//! Keeps the favorites list as a JSON array under `favorites`.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::favorites::{FavoriteItem, FavoriteItemType};
use crate::ports::{
    json_entry, read_json, Clock, FavoriteToggle, FavoritesStore, KeyValueStore, StorageError,
    FAVORITES_KEY,
};

/// Favorites list persisted to key-value storage
pub struct LocalFavoritesStore {
    storage: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    lock: Mutex<()>,
}

impl LocalFavoritesStore {
    pub fn new(storage: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            storage,
            clock,
            lock: Mutex::new(()),
        }
    }

    async fn load(&self) -> Result<Vec<FavoriteItem>, StorageError> {
        let items: Option<Vec<FavoriteItem>> =
            read_json(self.storage.as_ref(), FAVORITES_KEY).await?;
        Ok(items.unwrap_or_default())
    }

    async fn save(&self, items: &[FavoriteItem]) -> Result<(), StorageError> {
        let (key, json) = json_entry(FAVORITES_KEY, items)?;
        self.storage.set(&key, json).await.map_err(|e| {
            tracing::error!("Failed to persist favorites: {}", e);
            e
        })
    }

    async fn add_locked(
        &self,
        items: &mut Vec<FavoriteItem>,
        item_id: &str,
        item_type: FavoriteItemType,
    ) -> Result<FavoriteItem, StorageError> {
        let item = FavoriteItem::new(item_id, item_type, self.clock.now());
        items.push(item.clone());
        self.save(items.as_slice()).await?;
        Ok(item)
    }
}

#[async_trait]
impl FavoritesStore for LocalFavoritesStore {
    async fn list(&self) -> Result<Vec<FavoriteItem>, StorageError> {
        let _guard = self.lock.lock().await;
        self.load().await
    }

    async fn is_favorite(
        &self,
        item_id: &str,
        item_type: FavoriteItemType,
    ) -> Result<bool, StorageError> {
        let _guard = self.lock.lock().await;
        let items = self.load().await?;
        Ok(items.iter().any(|i| i.points_at(item_id, item_type)))
    }

    async fn add(
        &self,
        item_id: &str,
        item_type: FavoriteItemType,
    ) -> Result<FavoriteItem, StorageError> {
        let _guard = self.lock.lock().await;
        let mut items = self.load().await?;
        if let Some(existing) = items.iter().find(|i| i.points_at(item_id, item_type)) {
            return Ok(existing.clone());
        }
        self.add_locked(&mut items, item_id, item_type).await
    }

    async fn remove(
        &self,
        item_id: &str,
        item_type: FavoriteItemType,
    ) -> Result<bool, StorageError> {
        let _guard = self.lock.lock().await;
        let mut items = self.load().await?;
        let before = items.len();
        items.retain(|i| !i.points_at(item_id, item_type));
        if items.len() == before {
            return Ok(false);
        }
        self.save(&items).await?;
        Ok(true)
    }

    async fn toggle(
        &self,
        item_id: &str,
        item_type: FavoriteItemType,
    ) -> Result<FavoriteToggle, StorageError> {
        let _guard = self.lock.lock().await;
        let mut items = self.load().await?;
        let before = items.len();
        items.retain(|i| !i.points_at(item_id, item_type));
        if items.len() < before {
            self.save(&items).await?;
            return Ok(FavoriteToggle::Removed);
        }
        let item = self.add_locked(&mut items, item_id, item_type).await?;
        Ok(FavoriteToggle::Added(item))
    }
}
