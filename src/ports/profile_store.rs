//! Profile store port.

use async_trait::async_trait;

use super::StorageError;
use crate::domain::foundation::UserId;
use crate::domain::profile::{ProfileUpdate, UserProfile};

/// Port for account profiles.
///
/// Only built-in accounts have profiles. Both operations return `None` for
/// any other user id.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// The base profile with the user's stored edits applied.
    async fn get(&self, user_id: &UserId) -> Result<Option<UserProfile>, StorageError>;

    /// Stores `update` on top of earlier edits and returns the new profile.
    ///
    /// On error the stored edits are unchanged.
    async fn update(
        &self,
        user_id: &UserId,
        update: ProfileUpdate,
    ) -> Result<Option<UserProfile>, StorageError>;
}
