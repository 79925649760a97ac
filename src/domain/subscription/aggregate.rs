//! Subscription records and the request that creates them.
//!
//! A record lives in exactly one of two collections. `Subscription` is the
//! shape of the active collection; `DeletedSubscription` wraps it with the
//! moment it was soft-deleted. Moving between the two is by value so a record
//! can never be in both at once.

use serde::{Deserialize, Serialize};

use super::SubscriptionStatus;
use crate::domain::catalog::{Product, SubscriptionRequirements};
use crate::domain::foundation::{
    ProductId, StateMachine, SubscriptionId, Timestamp, UserId, ValidationError,
};

const MILLIS_PER_30_DAYS: f64 = 30.0 * 24.0 * 60.0 * 60.0 * 1000.0;

/// Validated input for creating a subscription.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionRequest {
    pub user_id: UserId,
    pub product_id: ProductId,

    /// Product name at subscribe time; later catalog edits do not change it.
    pub product_name: String,

    pub requirements: SubscriptionRequirements,
    pub quantity: u32,
    pub duration_months: u32,
    pub start_date: Timestamp,
}

impl SubscriptionRequest {
    /// Builds a request from a catalog product snapshot.
    pub fn for_product(
        user_id: UserId,
        product: &Product,
        quantity: u32,
        duration_months: u32,
        start_date: Timestamp,
    ) -> Self {
        Self {
            user_id,
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            requirements: product.subscription_requirements,
            quantity,
            duration_months,
            start_date,
        }
    }

    /// Checks the request against the product requirements and returns the
    /// end date `start_date + duration_months` in calendar months.
    pub fn validate(&self) -> Result<Timestamp, ValidationError> {
        if self.product_name.trim().is_empty() {
            return Err(ValidationError::empty_field("product_name"));
        }
        self.requirements.check(self.quantity, self.duration_months)?;
        self.start_date
            .checked_add_months(self.duration_months)
            .ok_or_else(|| {
                ValidationError::invalid_format("duration_months", "end date is out of range")
            })
    }
}

/// A subscription in the active collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: SubscriptionId,
    pub user_id: UserId,
    pub product_id: ProductId,
    pub product_name: String,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub quantity: u32,
    pub status: SubscriptionStatus,
}

impl Subscription {
    /// Opens a new active subscription under `id`.
    ///
    /// # Errors
    ///
    /// Returns the first requirement the request violates.
    pub fn open(id: SubscriptionId, request: SubscriptionRequest) -> Result<Self, ValidationError> {
        let end_date = request.validate()?;
        Ok(Self {
            id,
            user_id: request.user_id,
            product_id: request.product_id,
            product_name: request.product_name,
            start_date: request.start_date,
            end_date,
            quantity: request.quantity,
            status: SubscriptionStatus::Active,
        })
    }

    /// Flips an active subscription to cancelled.
    pub fn cancel(&mut self) -> Result<(), ValidationError> {
        self.status = self.status.transition_to(SubscriptionStatus::Cancelled)?;
        Ok(())
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    /// Length in months as shown to users: `(end - start) / 30 days`, rounded.
    pub fn duration_months(&self) -> i64 {
        let millis = self.end_date.duration_since(&self.start_date).num_milliseconds();
        (millis as f64 / MILLIS_PER_30_DAYS).round() as i64
    }

    /// Moves the record to the deleted collection shape.
    pub fn soft_delete(self, deleted_at: Timestamp) -> DeletedSubscription {
        DeletedSubscription {
            subscription: self,
            deleted_at,
        }
    }
}

/// A subscription in the deleted collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedSubscription {
    #[serde(flatten)]
    pub subscription: Subscription,
    pub deleted_at: Timestamp,
}

impl DeletedSubscription {
    pub fn id(&self) -> &SubscriptionId {
        &self.subscription.id
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        self.subscription.is_owned_by(user_id)
    }

    /// Strips `deleted_at`. Status is kept as it was.
    pub fn into_restored(self) -> Subscription {
        self.subscription
    }
}
