//! Subscription handlers.
//!
//! ## Commands
//! - Subscribing to a catalog product
//! - Cancelling, deleting, restoring and purging a subscription
//!
//! ## Queries
//! - Active subscription list
//! - Deleted subscription history
//!
//! Mutations are scoped to the acting user. Every successful command returns
//! a `notice` for display; failures carry their own message via
//! `SubscriptionError::message()`.

mod cancel_subscription;
mod delete_subscription;
mod list_deleted_subscriptions;
mod list_subscriptions;
mod ownership;
mod purge_subscription;
mod restore_subscription;
mod subscribe_to_product;

// Commands
pub use cancel_subscription::{
    CancelSubscriptionCommand, CancelSubscriptionHandler, CancelSubscriptionResult,
};
pub use delete_subscription::{
    DeleteSubscriptionCommand, DeleteSubscriptionHandler, DeleteSubscriptionResult,
};
pub use purge_subscription::{
    PurgeSubscriptionCommand, PurgeSubscriptionHandler, PurgeSubscriptionResult,
};
pub use restore_subscription::{
    RestoreSubscriptionCommand, RestoreSubscriptionHandler, RestoreSubscriptionResult,
};
pub use subscribe_to_product::{
    SubscribeToProductCommand, SubscribeToProductHandler, SubscribeToProductResult,
};

// Queries
pub use list_deleted_subscriptions::{
    DeletedSubscriptionListItem, ListDeletedSubscriptionsHandler, ListDeletedSubscriptionsQuery,
    ListDeletedSubscriptionsResult,
};
pub use list_subscriptions::{
    ListSubscriptionsHandler, ListSubscriptionsQuery, ListSubscriptionsResult,
    SubscriptionListItem,
};

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use crate::adapters::{FixedClock, InMemoryKeyValueStore, LocalSubscriptionStore};
    use crate::domain::foundation::{SubscriptionId, Timestamp, UserId};
    use crate::domain::subscription::seed::demo_subscriptions;

    /// 2024-03-01T00:00:00Z
    pub const DELETED_AT: i64 = 1_709_251_200_000;

    pub fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    pub fn sub_id(id: &str) -> SubscriptionId {
        SubscriptionId::new(id).unwrap()
    }

    pub async fn seeded_store() -> (Arc<LocalSubscriptionStore>, InMemoryKeyValueStore) {
        let storage = InMemoryKeyValueStore::new();
        let clock = FixedClock::new(Timestamp::from_unix_millis(DELETED_AT).unwrap());
        let store = LocalSubscriptionStore::new(Arc::new(storage.clone()), Arc::new(clock));
        store.seed_if_empty(demo_subscriptions()).await.unwrap();
        (Arc::new(store), storage)
    }
}
