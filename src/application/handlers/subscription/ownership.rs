//! Ownership checks shared by the mutation handlers.
//!
//! A record owned by someone else is reported exactly like a missing one.

use crate::domain::foundation::{SubscriptionId, UserId};
use crate::domain::subscription::SubscriptionError;
use crate::ports::SubscriptionStore;

pub(super) async fn ensure_active_owner(
    store: &dyn SubscriptionStore,
    user_id: &UserId,
    id: &SubscriptionId,
) -> Result<(), SubscriptionError> {
    match store.find_active(id).await? {
        Some(record) if record.is_owned_by(user_id) => Ok(()),
        _ => Err(SubscriptionError::not_found(id.clone())),
    }
}

pub(super) async fn ensure_deleted_owner(
    store: &dyn SubscriptionStore,
    user_id: &UserId,
    id: &SubscriptionId,
) -> Result<(), SubscriptionError> {
    match store.find_deleted(id).await? {
        Some(record) if record.is_owned_by(user_id) => Ok(()),
        _ => Err(SubscriptionError::deleted_not_found(id.clone())),
    }
}
