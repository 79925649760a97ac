//! RestoreSubscriptionHandler - Command handler for restoring deleted subscriptions.

use std::sync::Arc;

use super::ownership::ensure_deleted_owner;
use crate::domain::foundation::{SubscriptionId, UserId};
use crate::domain::subscription::{Subscription, SubscriptionError};
use crate::ports::SubscriptionStore;

/// Command to restore a subscription from history.
#[derive(Debug, Clone)]
pub struct RestoreSubscriptionCommand {
    pub user_id: UserId,
    pub subscription_id: SubscriptionId,
}

/// Result of successful restore.
#[derive(Debug, Clone)]
pub struct RestoreSubscriptionResult {
    pub subscription: Subscription,
    pub notice: String,
}

/// Handler for restoring subscriptions. Status comes back unchanged.
pub struct RestoreSubscriptionHandler {
    store: Arc<dyn SubscriptionStore>,
}

impl RestoreSubscriptionHandler {
    pub fn new(store: Arc<dyn SubscriptionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: RestoreSubscriptionCommand,
    ) -> Result<RestoreSubscriptionResult, SubscriptionError> {
        ensure_deleted_owner(self.store.as_ref(), &cmd.user_id, &cmd.subscription_id).await?;

        let subscription = self.store.restore(&cmd.subscription_id).await.map_err(|e| {
            tracing::warn!("Restore of {} failed: {}", cmd.subscription_id, e);
            e
        })?;

        tracing::info!("User {} restored {}", cmd.user_id, subscription.id);
        Ok(RestoreSubscriptionResult {
            subscription,
            notice: "Subscription restored".to_string(),
        })
    }
}
