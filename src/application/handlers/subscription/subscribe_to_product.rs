//! SubscribeToProductHandler - Command handler for subscribing from the catalog.

use std::sync::Arc;

use crate::domain::foundation::{ProductId, Timestamp, UserId};
use crate::domain::subscription::{Subscription, SubscriptionError, SubscriptionRequest};
use crate::ports::{Clock, ProductCatalog, SubscriptionStore};

/// Command to subscribe a user to a catalog product.
#[derive(Debug, Clone)]
pub struct SubscribeToProductCommand {
    pub user_id: UserId,
    pub product_id: ProductId,
    pub quantity: u32,
    pub duration_months: u32,
    /// Defaults to now.
    pub start_date: Option<Timestamp>,
}

/// Result of a successful subscription.
#[derive(Debug, Clone)]
pub struct SubscribeToProductResult {
    pub subscription: Subscription,
    /// `price * quantity * duration_months`.
    pub total_price: u64,
    pub notice: String,
}

/// Handler for subscribing to products.
///
/// Only active catalog products can be subscribed to. The product name is
/// snapshotted into the record.
pub struct SubscribeToProductHandler {
    store: Arc<dyn SubscriptionStore>,
    catalog: Arc<dyn ProductCatalog>,
    clock: Arc<dyn Clock>,
}

impl SubscribeToProductHandler {
    pub fn new(
        store: Arc<dyn SubscriptionStore>,
        catalog: Arc<dyn ProductCatalog>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            catalog,
            clock,
        }
    }

    pub async fn handle(
        &self,
        cmd: SubscribeToProductCommand,
    ) -> Result<SubscribeToProductResult, SubscriptionError> {
        // 1. Resolve the product
        let product = self
            .catalog
            .find_product(&cmd.product_id)
            .await?
            .ok_or_else(|| {
                tracing::warn!("Subscribe rejected: unknown product {}", cmd.product_id);
                SubscriptionError::validation(
                    "product_id",
                    format!("Product {} does not exist", cmd.product_id),
                )
            })?;

        if !product.is_active() {
            tracing::warn!("Subscribe rejected: product {} is inactive", product.id);
            return Err(SubscriptionError::validation(
                "product_id",
                format!("{} is not available for subscription", product.name),
            ));
        }

        // 2. Build the request from the product snapshot
        let start_date = cmd.start_date.unwrap_or_else(|| self.clock.now());
        let request = SubscriptionRequest::for_product(
            cmd.user_id.clone(),
            &product,
            cmd.quantity,
            cmd.duration_months,
            start_date,
        );

        // 3. Create
        let subscription = self.store.create(request).await.map_err(|e| {
            tracing::warn!("Subscribe to {} failed for user {}: {}", product.id, cmd.user_id, e);
            e
        })?;

        tracing::info!(
            "User {} subscribed to {} as {}",
            cmd.user_id,
            product.id,
            subscription.id
        );

        Ok(SubscribeToProductResult {
            total_price: product.total_price(cmd.quantity, cmd.duration_months),
            notice: format!("Subscribed to {}", product.name),
            subscription,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{FixedClock, InMemoryKeyValueStore, LocalSubscriptionStore, StaticProductCatalog};
    use crate::domain::subscription::SubscriptionStatus;

    fn now() -> Timestamp {
        Timestamp::from_ymd(2024, 5, 1).unwrap()
    }

    fn handler() -> (SubscribeToProductHandler, Arc<LocalSubscriptionStore>) {
        let clock = Arc::new(FixedClock::new(now()));
        let store = Arc::new(LocalSubscriptionStore::new(
            Arc::new(InMemoryKeyValueStore::new()),
            clock.clone(),
        ));
        let handler = SubscribeToProductHandler::new(
            store.clone(),
            Arc::new(StaticProductCatalog::demo()),
            clock,
        );
        (handler, store)
    }

    fn command(product: &str, quantity: u32, duration_months: u32) -> SubscribeToProductCommand {
        SubscribeToProductCommand {
            user_id: UserId::new("2").unwrap(),
            product_id: ProductId::new(product).unwrap(),
            quantity,
            duration_months,
            start_date: Timestamp::from_ymd(2023, 4, 1),
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Success Cases
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn subscribes_with_product_snapshot() {
        let (handler, store) = handler();

        let result = handler.handle(command("PROD001", 2, 3)).await.unwrap();

        assert_eq!(result.subscription.product_name, "Cloud Storage Basic");
        assert_eq!(result.subscription.status, SubscriptionStatus::Active);
        assert_eq!(
            result.subscription.end_date,
            Timestamp::from_ymd(2023, 7, 1).unwrap()
        );
        assert_eq!(result.total_price, 594);
        assert_eq!(result.notice, "Subscribed to Cloud Storage Basic");
        assert_eq!(store.list_active(&UserId::new("2").unwrap()).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn start_date_defaults_to_clock() {
        let (handler, _) = handler();
        let mut cmd = command("PROD001", 1, 1);
        cmd.start_date = None;

        let result = handler.handle(cmd).await.unwrap();

        assert_eq!(result.subscription.start_date, now());
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Rejections
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn unknown_product_is_validation_error() {
        let (handler, _) = handler();

        let err = handler.handle(command("PROD999", 1, 1)).await.unwrap_err();

        assert!(matches!(
            err,
            SubscriptionError::ValidationFailed { ref field, .. } if field == "product_id"
        ));
    }

    #[tokio::test]
    async fn inactive_product_is_validation_error() {
        let (handler, store) = handler();

        let err = handler.handle(command("PROD005", 1, 12)).await.unwrap_err();

        assert!(matches!(
            err,
            SubscriptionError::ValidationFailed { ref field, .. } if field == "product_id"
        ));
        assert!(store.list_active(&UserId::new("2").unwrap()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn quantity_above_product_max_is_rejected() {
        let (handler, _) = handler();

        let err = handler.handle(command("PROD003", 4, 1)).await.unwrap_err();

        assert!(matches!(
            err,
            SubscriptionError::ValidationFailed { ref field, .. } if field == "quantity"
        ));
    }

    #[tokio::test]
    async fn duration_below_product_minimum_is_rejected() {
        let (handler, _) = handler();

        let err = handler.handle(command("PROD004", 1, 3)).await.unwrap_err();

        assert!(matches!(
            err,
            SubscriptionError::ValidationFailed { ref field, .. } if field == "duration_months"
        ));
    }
}
