//! PurgeSubscriptionHandler - Command handler for permanent deletion.

use std::sync::Arc;

use super::ownership::ensure_deleted_owner;
use crate::domain::foundation::{SubscriptionId, UserId};
use crate::domain::subscription::SubscriptionError;
use crate::ports::SubscriptionStore;

/// Command to permanently remove a subscription from history.
#[derive(Debug, Clone)]
pub struct PurgeSubscriptionCommand {
    pub user_id: UserId,
    pub subscription_id: SubscriptionId,
}

/// Result of successful purge.
#[derive(Debug, Clone)]
pub struct PurgeSubscriptionResult {
    pub subscription_id: SubscriptionId,
    pub notice: String,
}

/// Handler for purging subscriptions. Irreversible.
pub struct PurgeSubscriptionHandler {
    store: Arc<dyn SubscriptionStore>,
}

impl PurgeSubscriptionHandler {
    pub fn new(store: Arc<dyn SubscriptionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: PurgeSubscriptionCommand,
    ) -> Result<PurgeSubscriptionResult, SubscriptionError> {
        ensure_deleted_owner(self.store.as_ref(), &cmd.user_id, &cmd.subscription_id).await?;

        self.store.purge(&cmd.subscription_id).await.map_err(|e| {
            tracing::warn!("Purge of {} failed: {}", cmd.subscription_id, e);
            e
        })?;

        tracing::info!("User {} purged {}", cmd.user_id, cmd.subscription_id);
        Ok(PurgeSubscriptionResult {
            subscription_id: cmd.subscription_id,
            notice: "Subscription permanently deleted".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::subscription::test_support::{seeded_store, sub_id, user};

    fn command(user_id: &str, id: &str) -> PurgeSubscriptionCommand {
        PurgeSubscriptionCommand {
            user_id: user(user_id),
            subscription_id: sub_id(id),
        }
    }

    #[tokio::test]
    async fn purge_succeeds_once() {
        let (store, _) = seeded_store().await;
        store.soft_delete(&sub_id("SUB002")).await.unwrap();
        let handler = PurgeSubscriptionHandler::new(store.clone());

        let result = handler.handle(command("2", "SUB002")).await.unwrap();
        let err = handler.handle(command("2", "SUB002")).await.unwrap_err();

        assert_eq!(result.subscription_id, sub_id("SUB002"));
        assert!(err.is_not_found());
        assert!(store.list_deleted(&user("2")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn active_record_cannot_be_purged() {
        let (store, _) = seeded_store().await;
        let handler = PurgeSubscriptionHandler::new(store.clone());

        let err = handler.handle(command("2", "SUB001")).await.unwrap_err();

        assert!(err.is_not_found());
        assert!(store.find_active(&sub_id("SUB001")).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn other_users_history_is_not_found() {
        let (store, _) = seeded_store().await;
        store.soft_delete(&sub_id("SUB002")).await.unwrap();
        let handler = PurgeSubscriptionHandler::new(store.clone());

        let err = handler.handle(command("1", "SUB002")).await.unwrap_err();

        assert!(err.is_not_found());
        assert!(store.find_deleted(&sub_id("SUB002")).await.unwrap().is_some());
    }
}
