//! ListSubscriptionsHandler - Query handler for the subscription management page.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::subscription::{matches_query, Subscription, SubscriptionError};
use crate::ports::SubscriptionStore;

/// Query for a user's active-collection subscriptions.
#[derive(Debug, Clone)]
pub struct ListSubscriptionsQuery {
    pub user_id: UserId,
    /// Matched against product name, id and status. Empty matches all.
    pub search: String,
}

/// One row of the subscription list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionListItem {
    pub subscription: Subscription,
    pub duration_months: i64,
}

pub type ListSubscriptionsResult = Vec<SubscriptionListItem>;

/// Handler for listing a user's subscriptions, any status.
pub struct ListSubscriptionsHandler {
    store: Arc<dyn SubscriptionStore>,
}

impl ListSubscriptionsHandler {
    pub fn new(store: Arc<dyn SubscriptionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        query: ListSubscriptionsQuery,
    ) -> Result<ListSubscriptionsResult, SubscriptionError> {
        let records = self.store.list_active(&query.user_id).await?;
        tracing::debug!("Listing {} subscriptions for user {}", records.len(), query.user_id);

        Ok(records
            .into_iter()
            .filter(|s| matches_query(s, &query.search))
            .map(|subscription| SubscriptionListItem {
                duration_months: subscription.duration_months(),
                subscription,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::subscription::test_support::{seeded_store, sub_id, user};

    fn query(user_id: &str, search: &str) -> ListSubscriptionsQuery {
        ListSubscriptionsQuery {
            user_id: user(user_id),
            search: search.to_string(),
        }
    }

    #[tokio::test]
    async fn lists_every_status() {
        let (store, _) = seeded_store().await;
        let handler = ListSubscriptionsHandler::new(store);

        let items = handler.handle(query("2", "")).await.unwrap();

        assert_eq!(items.len(), 8);
    }

    #[tokio::test]
    async fn reports_duration_in_months() {
        let (store, _) = seeded_store().await;
        let handler = ListSubscriptionsHandler::new(store);

        let items = handler.handle(query("2", "SUB003")).await.unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].duration_months, 12);
    }

    #[tokio::test]
    async fn search_filters_by_status() {
        let (store, _) = seeded_store().await;
        let handler = ListSubscriptionsHandler::new(store);

        let items = handler.handle(query("2", "expired")).await.unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].subscription.id, sub_id("SUB007"));
    }

    #[tokio::test]
    async fn other_user_sees_nothing() {
        let (store, _) = seeded_store().await;
        let handler = ListSubscriptionsHandler::new(store);

        assert!(handler.handle(query("1", "")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn deleted_records_are_not_listed() {
        let (store, _) = seeded_store().await;
        store.soft_delete(&sub_id("SUB001")).await.unwrap();
        let handler = ListSubscriptionsHandler::new(store);

        let items = handler.handle(query("2", "")).await.unwrap();

        assert_eq!(items.len(), 7);
        assert!(items.iter().all(|i| i.subscription.id != sub_id("SUB001")));
    }
}
