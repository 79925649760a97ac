//! CancelSubscriptionHandler - Command handler for cancelling subscriptions.

use std::sync::Arc;

use super::ownership::ensure_active_owner;
use crate::domain::foundation::{SubscriptionId, UserId};
use crate::domain::subscription::{Subscription, SubscriptionError};
use crate::ports::SubscriptionStore;

/// Command to cancel a subscription.
#[derive(Debug, Clone)]
pub struct CancelSubscriptionCommand {
    pub user_id: UserId,
    pub subscription_id: SubscriptionId,
}

/// Result of successful cancellation.
#[derive(Debug, Clone)]
pub struct CancelSubscriptionResult {
    pub subscription: Subscription,
    pub notice: String,
}

/// Handler for cancelling subscriptions.
///
/// The record stays in the active list with status `cancelled`.
pub struct CancelSubscriptionHandler {
    store: Arc<dyn SubscriptionStore>,
}

impl CancelSubscriptionHandler {
    pub fn new(store: Arc<dyn SubscriptionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: CancelSubscriptionCommand,
    ) -> Result<CancelSubscriptionResult, SubscriptionError> {
        ensure_active_owner(self.store.as_ref(), &cmd.user_id, &cmd.subscription_id).await?;

        let subscription = self.store.cancel(&cmd.subscription_id).await.map_err(|e| {
            tracing::warn!("Cancel of {} failed: {}", cmd.subscription_id, e);
            e
        })?;

        tracing::info!("User {} cancelled {}", cmd.user_id, subscription.id);
        Ok(CancelSubscriptionResult {
            subscription,
            notice: "Subscription cancelled".to_string(),
        })
    }
}
