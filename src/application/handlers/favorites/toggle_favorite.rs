//! ToggleFavoriteHandler - Command handler for the favorite star.

use std::sync::Arc;

use crate::domain::favorites::{FavoriteItem, FavoriteItemType};
use crate::domain::foundation::DomainError;
use crate::ports::{FavoriteToggle, FavoritesStore};

/// Command to add or remove a favorite.
#[derive(Debug, Clone)]
pub struct ToggleFavoriteCommand {
    pub item_id: String,
    pub item_type: FavoriteItemType,
}

/// Result of toggling.
#[derive(Debug, Clone)]
pub struct ToggleFavoriteResult {
    /// Whether the item is a favorite after the toggle.
    pub favorited: bool,
    pub item: Option<FavoriteItem>,
    pub notice: String,
}

/// Handler for toggling favorites.
pub struct ToggleFavoriteHandler {
    store: Arc<dyn FavoritesStore>,
}

impl ToggleFavoriteHandler {
    pub fn new(store: Arc<dyn FavoritesStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: ToggleFavoriteCommand) -> Result<ToggleFavoriteResult, DomainError> {
        let outcome = self
            .store
            .toggle(&cmd.item_id, cmd.item_type)
            .await
            .map_err(|e| {
                tracing::warn!("Toggling favorite {} failed: {}", cmd.item_id, e);
                DomainError::from(e)
            })?;

        let result = match outcome {
            FavoriteToggle::Added(item) => {
                tracing::info!("Added {} to favorites", cmd.item_id);
                ToggleFavoriteResult {
                    favorited: true,
                    item: Some(item),
                    notice: "Added to favorites".to_string(),
                }
            }
            FavoriteToggle::Removed => {
                tracing::info!("Removed {} from favorites", cmd.item_id);
                ToggleFavoriteResult {
                    favorited: false,
                    item: None,
                    notice: "Removed from favorites".to_string(),
                }
            }
        };
        Ok(result)
    }
}
