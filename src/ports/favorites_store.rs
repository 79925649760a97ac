//! Favorites store port.

use async_trait::async_trait;

use super::StorageError;
use crate::domain::favorites::{FavoriteItem, FavoriteItemType};

/// Outcome of toggling a favorite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoriteToggle {
    Added(FavoriteItem),
    Removed,
}

/// Port for the shared favorites list.
#[async_trait]
pub trait FavoritesStore: Send + Sync {
    /// All favorites, oldest first.
    async fn list(&self) -> Result<Vec<FavoriteItem>, StorageError>;

    async fn is_favorite(
        &self,
        item_id: &str,
        item_type: FavoriteItemType,
    ) -> Result<bool, StorageError>;

    /// Adds the item, or returns the existing entry if already present.
    async fn add(
        &self,
        item_id: &str,
        item_type: FavoriteItemType,
    ) -> Result<FavoriteItem, StorageError>;

    /// Removes the item. Returns `false` if it was not a favorite.
    async fn remove(&self, item_id: &str, item_type: FavoriteItemType)
        -> Result<bool, StorageError>;

    /// Adds the item if absent, removes it otherwise.
    async fn toggle(
        &self,
        item_id: &str,
        item_type: FavoriteItemType,
    ) -> Result<FavoriteToggle, StorageError>;
}
