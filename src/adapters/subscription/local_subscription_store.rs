//! Local Subscription Store Adapter
//!
//! Implements the SubscriptionStore port on top of any KeyValueStore. The
//! active collection is stored under `subscriptions` and the deleted one under
//! `deletedSubscriptions`, each as a JSON array.
//!
//! Nothing is cached: every operation reloads the collections it touches
//! under the store lock, and a mutation is only visible once `set_many` has
//! accepted every collection it changed.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::foundation::{SubscriptionId, UserId};
use crate::domain::subscription::{
    DeletedSubscription, Subscription, SubscriptionError, SubscriptionRequest, SubscriptionStatus,
};
use crate::ports::{
    json_entry, read_json, Clock, KeyValueStore, SubscriptionStore, DELETED_SUBSCRIPTIONS_KEY,
    SUBSCRIPTIONS_KEY,
};

/// Subscription store persisted to key-value storage
pub struct LocalSubscriptionStore {
    storage: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    lock: Mutex<()>,
}

impl LocalSubscriptionStore {
    pub fn new(storage: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            storage,
            clock,
            lock: Mutex::new(()),
        }
    }

    /// Writes `records` as the active collection if it has never been stored.
    ///
    /// Returns `true` if the seed was written.
    pub async fn seed_if_empty(&self, records: Vec<Subscription>) -> Result<bool, SubscriptionError> {
        let _guard = self.lock.lock().await;

        if self.storage.get(SUBSCRIPTIONS_KEY).await?.is_some() {
            tracing::debug!("Subscriptions already present, skipping seed");
            return Ok(false);
        }

        let count = records.len();
        self.persist(vec![json_entry(SUBSCRIPTIONS_KEY, &records)?])
            .await?;
        tracing::info!("Seeded {} demo subscriptions", count);
        Ok(true)
    }

    async fn load_active(&self) -> Result<Vec<Subscription>, SubscriptionError> {
        let records: Option<Vec<Subscription>> =
            read_json(self.storage.as_ref(), SUBSCRIPTIONS_KEY).await?;
        Ok(records.unwrap_or_default())
    }

    async fn load_deleted(&self) -> Result<Vec<DeletedSubscription>, SubscriptionError> {
        let records: Option<Vec<DeletedSubscription>> =
            read_json(self.storage.as_ref(), DELETED_SUBSCRIPTIONS_KEY).await?;
        Ok(records.unwrap_or_default())
    }

    async fn persist(&self, entries: Vec<(String, String)>) -> Result<(), SubscriptionError> {
        self.storage.set_many(entries).await.map_err(|e| {
            tracing::error!("Failed to persist subscriptions: {}", e);
            SubscriptionError::from(e)
        })
    }

    fn fresh_id(active: &[Subscription], deleted: &[DeletedSubscription]) -> SubscriptionId {
        loop {
            let id = SubscriptionId::generate();
            let taken =
                active.iter().any(|s| s.id == id) || deleted.iter().any(|d| d.id() == &id);
            if !taken {
                return id;
            }
        }
    }
}

#[async_trait]
impl SubscriptionStore for LocalSubscriptionStore {
    async fn list_active(&self, user_id: &UserId) -> Result<Vec<Subscription>, SubscriptionError> {
        let _guard = self.lock.lock().await;
        let records = self.load_active().await?;
        Ok(records
            .into_iter()
            .filter(|s| s.is_owned_by(user_id))
            .collect())
    }

    async fn list_deleted(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<DeletedSubscription>, SubscriptionError> {
        let _guard = self.lock.lock().await;
        let records = self.load_deleted().await?;
        Ok(records
            .into_iter()
            .filter(|d| d.is_owned_by(user_id))
            .collect())
    }

    async fn find_active(
        &self,
        id: &SubscriptionId,
    ) -> Result<Option<Subscription>, SubscriptionError> {
        let _guard = self.lock.lock().await;
        let records = self.load_active().await?;
        Ok(records.into_iter().find(|s| &s.id == id))
    }

    async fn find_deleted(
        &self,
        id: &SubscriptionId,
    ) -> Result<Option<DeletedSubscription>, SubscriptionError> {
        let _guard = self.lock.lock().await;
        let records = self.load_deleted().await?;
        Ok(records.into_iter().find(|d| d.id() == id))
    }

    async fn create(&self, request: SubscriptionRequest) -> Result<Subscription, SubscriptionError> {
        request.validate()?;

        let _guard = self.lock.lock().await;
        let mut active = self.load_active().await?;
        let deleted = self.load_deleted().await?;

        let id = Self::fresh_id(&active, &deleted);
        let subscription = Subscription::open(id, request)?;
        active.push(subscription.clone());

        self.persist(vec![json_entry(SUBSCRIPTIONS_KEY, &active)?])
            .await?;
        tracing::debug!("Created subscription {}", subscription.id);
        Ok(subscription)
    }

    async fn cancel(&self, id: &SubscriptionId) -> Result<Subscription, SubscriptionError> {
        let _guard = self.lock.lock().await;
        let mut active = self.load_active().await?;

        let record = active
            .iter_mut()
            .find(|s| &s.id == id && s.status == SubscriptionStatus::Active)
            .ok_or_else(|| SubscriptionError::not_found(id.clone()))?;
        record.cancel()?;
        let cancelled = record.clone();

        self.persist(vec![json_entry(SUBSCRIPTIONS_KEY, &active)?])
            .await?;
        tracing::debug!("Cancelled subscription {}", id);
        Ok(cancelled)
    }

    async fn soft_delete(
        &self,
        id: &SubscriptionId,
    ) -> Result<DeletedSubscription, SubscriptionError> {
        let _guard = self.lock.lock().await;
        let mut active = self.load_active().await?;
        let index = active
            .iter()
            .position(|s| &s.id == id)
            .ok_or_else(|| SubscriptionError::not_found(id.clone()))?;
        let mut deleted = self.load_deleted().await?;

        let record = active.remove(index).soft_delete(self.clock.now());
        deleted.push(record.clone());

        self.persist(vec![
            json_entry(SUBSCRIPTIONS_KEY, &active)?,
            json_entry(DELETED_SUBSCRIPTIONS_KEY, &deleted)?,
        ])
        .await?;
        tracing::debug!("Moved subscription {} to deleted", id);
        Ok(record)
    }

    async fn restore(&self, id: &SubscriptionId) -> Result<Subscription, SubscriptionError> {
        let _guard = self.lock.lock().await;
        let mut deleted = self.load_deleted().await?;
        let index = deleted
            .iter()
            .position(|d| d.id() == id)
            .ok_or_else(|| SubscriptionError::deleted_not_found(id.clone()))?;
        let mut active = self.load_active().await?;

        let record = deleted.remove(index).into_restored();
        active.push(record.clone());

        self.persist(vec![
            json_entry(SUBSCRIPTIONS_KEY, &active)?,
            json_entry(DELETED_SUBSCRIPTIONS_KEY, &deleted)?,
        ])
        .await?;
        tracing::debug!("Restored subscription {}", id);
        Ok(record)
    }

    async fn purge(&self, id: &SubscriptionId) -> Result<(), SubscriptionError> {
        let _guard = self.lock.lock().await;
        let mut deleted = self.load_deleted().await?;
        let index = deleted
            .iter()
            .position(|d| d.id() == id)
            .ok_or_else(|| SubscriptionError::deleted_not_found(id.clone()))?;

        deleted.remove(index);

        self.persist(vec![json_entry(DELETED_SUBSCRIPTIONS_KEY, &deleted)?])
            .await?;
        tracing::debug!("Purged subscription {}", id);
        Ok(())
    }
}
