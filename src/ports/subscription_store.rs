//! Subscription store port.
//!
//! Owns the two durable collections, active and deleted, and the only
//! operations that move records between them.
//!
//! # Guarantees
//!
//! - An id is in at most one collection, at most once
//! - Every mutation is persisted before it returns
//! - A failed mutation leaves durable state exactly as it was
//! - Operations on one store are totally ordered
//!
//! # Example
//!
//! ```ignore
//! async fn archive(store: &dyn SubscriptionStore, id: &SubscriptionId) -> Result<(), SubscriptionError> {
//!     let deleted = store.soft_delete(id).await?;
//!     tracing::info!("Archived {} at {}", deleted.id(), deleted.deleted_at);
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;

use crate::domain::foundation::{SubscriptionId, UserId};
use crate::domain::subscription::{
    DeletedSubscription, Subscription, SubscriptionError, SubscriptionRequest,
};

/// Port for the subscription lifecycle store.
#[async_trait]
pub trait SubscriptionStore: Send + Sync {
    /// All records of the user in the active collection, any status.
    async fn list_active(&self, user_id: &UserId) -> Result<Vec<Subscription>, SubscriptionError>;

    /// All records of the user in the deleted collection.
    async fn list_deleted(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<DeletedSubscription>, SubscriptionError>;

    /// Looks up a record in the active collection.
    async fn find_active(
        &self,
        id: &SubscriptionId,
    ) -> Result<Option<Subscription>, SubscriptionError>;

    /// Looks up a record in the deleted collection.
    async fn find_deleted(
        &self,
        id: &SubscriptionId,
    ) -> Result<Option<DeletedSubscription>, SubscriptionError>;

    /// Validates the request, assigns a fresh id and appends an active record.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if quantity or duration break the requirements
    /// - `Storage` on persistence failure
    async fn create(&self, request: SubscriptionRequest) -> Result<Subscription, SubscriptionError>;

    /// Flips an active record to cancelled in place.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the id is not in the active collection or its status
    ///   is not active
    /// - `Storage` on persistence failure
    async fn cancel(&self, id: &SubscriptionId) -> Result<Subscription, SubscriptionError>;

    /// Moves a record from active to deleted, stamping `deleted_at`.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the id is not in the active collection
    /// - `Storage` on persistence failure
    async fn soft_delete(
        &self,
        id: &SubscriptionId,
    ) -> Result<DeletedSubscription, SubscriptionError>;

    /// Moves a record from deleted back to active, status unchanged.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the id is not in the deleted collection
    /// - `Storage` on persistence failure
    async fn restore(&self, id: &SubscriptionId) -> Result<Subscription, SubscriptionError>;

    /// Removes a record from the deleted collection permanently.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the id is not in the deleted collection
    /// - `Storage` on persistence failure
    async fn purge(&self, id: &SubscriptionId) -> Result<(), SubscriptionError>;
}
