//! Product entity and its subscription requirements.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ProductId, Timestamp, ValidationError};

/// Whether a product is offered in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    Active,
    Inactive,
}

/// Bounds a subscription to a product must respect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionRequirements {
    /// Minimum subscription length in whole months.
    pub min_duration: u32,

    /// Maximum number of units per subscription.
    pub max_quantity: u32,
}

impl SubscriptionRequirements {
    pub fn new(min_duration: u32, max_quantity: u32) -> Self {
        Self {
            min_duration,
            max_quantity,
        }
    }

    /// Checks `1 <= quantity <= max_quantity`.
    pub fn check_quantity(&self, quantity: u32) -> Result<(), ValidationError> {
        if quantity == 0 || quantity > self.max_quantity {
            return Err(ValidationError::out_of_range(
                "quantity",
                1,
                i64::from(self.max_quantity),
                i64::from(quantity),
            ));
        }
        Ok(())
    }

    /// Checks `duration_months >= min_duration`.
    ///
    /// A zero-month subscription is never valid, even when the product's
    /// minimum is zero.
    pub fn check_duration(&self, duration_months: u32) -> Result<(), ValidationError> {
        let min = self.min_duration.max(1);
        if duration_months < min {
            return Err(ValidationError::below_minimum(
                "duration_months",
                i64::from(min),
                i64::from(duration_months),
            ));
        }
        Ok(())
    }

    /// Runs both checks, quantity first.
    pub fn check(&self, quantity: u32, duration_months: u32) -> Result<(), ValidationError> {
        self.check_quantity(quantity)?;
        self.check_duration(duration_months)
    }
}

/// A data service offered in the marketplace catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub category: String,

    /// Monthly price per unit, in whole currency units.
    pub price: u32,

    pub status: ProductStatus,
    pub subscription_requirements: SubscriptionRequirements,
    pub created_at: Timestamp,
}

impl Product {
    pub fn is_active(&self) -> bool {
        self.status == ProductStatus::Active
    }

    /// Total price of a subscription: `price * quantity * duration_months`.
    pub fn total_price(&self, quantity: u32, duration_months: u32) -> u64 {
        u64::from(self.price) * u64::from(quantity) * u64::from(duration_months)
    }
}
