//! ListDeletedSubscriptionsHandler - Query handler for the subscription history page.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::subscription::{matches_query, DeletedSubscription, SubscriptionError};
use crate::ports::SubscriptionStore;

/// Query for a user's deleted subscriptions.
#[derive(Debug, Clone)]
pub struct ListDeletedSubscriptionsQuery {
    pub user_id: UserId,
    pub search: String,
}

/// One row of the history list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletedSubscriptionListItem {
    pub deleted: DeletedSubscription,
    pub duration_months: i64,
}

pub type ListDeletedSubscriptionsResult = Vec<DeletedSubscriptionListItem>;

/// Handler for listing a user's subscription history.
pub struct ListDeletedSubscriptionsHandler {
    store: Arc<dyn SubscriptionStore>,
}

impl ListDeletedSubscriptionsHandler {
    pub fn new(store: Arc<dyn SubscriptionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        query: ListDeletedSubscriptionsQuery,
    ) -> Result<ListDeletedSubscriptionsResult, SubscriptionError> {
        let records = self.store.list_deleted(&query.user_id).await?;
        tracing::debug!(
            "Listing {} deleted subscriptions for user {}",
            records.len(),
            query.user_id
        );

        Ok(records
            .into_iter()
            .filter(|d| matches_query(&d.subscription, &query.search))
            .map(|deleted| DeletedSubscriptionListItem {
                duration_months: deleted.subscription.duration_months(),
                deleted,
            })
            .collect())
    }
}
