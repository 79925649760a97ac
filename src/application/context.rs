//! Application wiring.
//!
//! Builds the adapters selected by [`AppConfig`] once and hands every handler
//! the same `Arc`-shared store, catalog and clock.

use std::sync::Arc;

use crate::adapters::{
    FileKeyValueStore, InMemoryKeyValueStore, LocalFavoritesStore, LocalProfileStore,
    LocalSubscriptionStore, StaticProductCatalog, SystemClock,
};
use crate::config::{AppConfig, StorageBackend, StorageConfig};
use crate::domain::subscription::seed::demo_subscriptions;
use crate::domain::subscription::SubscriptionError;
use crate::ports::{
    Clock, FavoritesStore, KeyValueStore, ProductCatalog, ProfileStore, SubscriptionStore,
};

use super::handlers::catalog::BrowseCatalogHandler;
use super::handlers::favorites::{ListFavoriteProductsHandler, ToggleFavoriteHandler};
use super::handlers::profile::{GetProfileHandler, UpdateProfileHandler};
use super::handlers::subscription::{
    CancelSubscriptionHandler, DeleteSubscriptionHandler, ListDeletedSubscriptionsHandler,
    ListSubscriptionsHandler, PurgeSubscriptionHandler, RestoreSubscriptionHandler,
    SubscribeToProductHandler,
};

/// Shared services and the handlers built on them
pub struct AppContext {
    subscriptions: Arc<LocalSubscriptionStore>,
    favorites: Arc<dyn FavoritesStore>,
    profiles: Arc<dyn ProfileStore>,
    catalog: Arc<dyn ProductCatalog>,
    clock: Arc<dyn Clock>,
}

impl AppContext {
    /// Wire the adapters chosen by `config` with the system clock and the
    /// demo catalog.
    pub fn from_config(config: &AppConfig) -> Self {
        let storage = build_storage(&config.storage);
        Self::with_parts(
            storage,
            Arc::new(SystemClock),
            Arc::new(StaticProductCatalog::demo()),
        )
    }

    /// Wire the stores over explicit storage, clock and catalog.
    pub fn with_parts(
        storage: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
        catalog: Arc<dyn ProductCatalog>,
    ) -> Self {
        let subscriptions = Arc::new(LocalSubscriptionStore::new(storage.clone(), clock.clone()));
        let favorites = Arc::new(LocalFavoritesStore::new(storage.clone(), clock.clone()));
        let profiles = Arc::new(LocalProfileStore::new(storage));
        Self {
            subscriptions,
            favorites,
            profiles,
            catalog,
            clock,
        }
    }

    /// Seed the demo subscriptions unless a subscription collection exists.
    pub async fn seed_demo_data(&self) -> Result<bool, SubscriptionError> {
        self.subscriptions.seed_if_empty(demo_subscriptions()).await
    }

    pub fn subscription_store(&self) -> Arc<dyn SubscriptionStore> {
        self.subscriptions.clone()
    }

    pub fn favorites_store(&self) -> Arc<dyn FavoritesStore> {
        self.favorites.clone()
    }

    pub fn profile_store(&self) -> Arc<dyn ProfileStore> {
        self.profiles.clone()
    }

    pub fn catalog(&self) -> Arc<dyn ProductCatalog> {
        self.catalog.clone()
    }

    // Subscription handlers

    pub fn subscribe_to_product(&self) -> SubscribeToProductHandler {
        SubscribeToProductHandler::new(
            self.subscription_store(),
            self.catalog.clone(),
            self.clock.clone(),
        )
    }

    pub fn cancel_subscription(&self) -> CancelSubscriptionHandler {
        CancelSubscriptionHandler::new(self.subscription_store())
    }

    pub fn delete_subscription(&self) -> DeleteSubscriptionHandler {
        DeleteSubscriptionHandler::new(self.subscription_store())
    }

    pub fn restore_subscription(&self) -> RestoreSubscriptionHandler {
        RestoreSubscriptionHandler::new(self.subscription_store())
    }

    pub fn purge_subscription(&self) -> PurgeSubscriptionHandler {
        PurgeSubscriptionHandler::new(self.subscription_store())
    }

    pub fn list_subscriptions(&self) -> ListSubscriptionsHandler {
        ListSubscriptionsHandler::new(self.subscription_store())
    }

    pub fn list_deleted_subscriptions(&self) -> ListDeletedSubscriptionsHandler {
        ListDeletedSubscriptionsHandler::new(self.subscription_store())
    }

    // Catalog and favorites handlers

    pub fn browse_catalog(&self) -> BrowseCatalogHandler {
        BrowseCatalogHandler::new(self.catalog.clone())
    }

    pub fn toggle_favorite(&self) -> ToggleFavoriteHandler {
        ToggleFavoriteHandler::new(self.favorites_store())
    }

    pub fn list_favorite_products(&self) -> ListFavoriteProductsHandler {
        ListFavoriteProductsHandler::new(self.favorites_store(), self.catalog.clone())
    }

    // Profile handlers

    pub fn get_profile(&self) -> GetProfileHandler {
        GetProfileHandler::new(self.profile_store())
    }

    pub fn update_profile(&self) -> UpdateProfileHandler {
        UpdateProfileHandler::new(self.profile_store())
    }
}

fn build_storage(config: &StorageConfig) -> Arc<dyn KeyValueStore> {
    match (config.backend, config.quota_bytes) {
        (StorageBackend::File, None) => Arc::new(FileKeyValueStore::new(&config.data_dir)),
        (StorageBackend::File, Some(quota)) => {
            Arc::new(FileKeyValueStore::new(&config.data_dir).with_quota(quota))
        }
        (StorageBackend::Memory, None) => Arc::new(InMemoryKeyValueStore::new()),
        (StorageBackend::Memory, Some(quota)) => Arc::new(InMemoryKeyValueStore::with_quota(quota)),
    }
}
