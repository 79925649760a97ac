//! DeleteSubscriptionHandler - Command handler for soft-deleting subscriptions.

use std::sync::Arc;

use super::ownership::ensure_active_owner;
use crate::domain::foundation::{SubscriptionId, UserId};
use crate::domain::subscription::{DeletedSubscription, SubscriptionError};
use crate::ports::SubscriptionStore;

/// Command to move a subscription to the deleted history.
#[derive(Debug, Clone)]
pub struct DeleteSubscriptionCommand {
    pub user_id: UserId,
    pub subscription_id: SubscriptionId,
}

/// Result of successful soft deletion.
#[derive(Debug, Clone)]
pub struct DeleteSubscriptionResult {
    pub deleted: DeletedSubscription,
    pub notice: String,
}

/// Handler for soft-deleting subscriptions.
///
/// Any status can be deleted. The record can be restored from history until
/// it is purged.
pub struct DeleteSubscriptionHandler {
    store: Arc<dyn SubscriptionStore>,
}

impl DeleteSubscriptionHandler {
    pub fn new(store: Arc<dyn SubscriptionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: DeleteSubscriptionCommand,
    ) -> Result<DeleteSubscriptionResult, SubscriptionError> {
        ensure_active_owner(self.store.as_ref(), &cmd.user_id, &cmd.subscription_id).await?;

        let deleted = self
            .store
            .soft_delete(&cmd.subscription_id)
            .await
            .map_err(|e| {
                tracing::warn!("Delete of {} failed: {}", cmd.subscription_id, e);
                e
            })?;

        tracing::info!("User {} deleted {}", cmd.user_id, deleted.id());
        Ok(DeleteSubscriptionResult {
            deleted,
            notice: "Subscription deleted. You can restore it from history".to_string(),
        })
    }
}
