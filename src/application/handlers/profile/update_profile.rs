//! UpdateProfileHandler - Command handler for profile edits.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::profile::{ProfileUpdate, UserProfile};
use crate::ports::ProfileStore;

use super::user_not_found;

/// Command to edit some profile fields.
#[derive(Debug, Clone)]
pub struct UpdateProfileCommand {
    pub user_id: UserId,
    pub update: ProfileUpdate,
}

/// Result of an edit.
#[derive(Debug, Clone)]
pub struct UpdateProfileResult {
    pub profile: UserProfile,
    pub notice: String,
}

/// Handler for editing profiles.
///
/// Fields left unset keep their current value, including earlier edits.
pub struct UpdateProfileHandler {
    store: Arc<dyn ProfileStore>,
}

impl UpdateProfileHandler {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: UpdateProfileCommand) -> Result<UpdateProfileResult, DomainError> {
        if cmd.update.is_empty() {
            return Err(DomainError::new(
                ErrorCode::ValidationFailed,
                "No profile fields to update",
            ));
        }
        cmd.update.validate()?;

        let notice = if cmd.update.is_avatar_only() {
            "Avatar updated"
        } else {
            "Profile updated"
        };

        let profile = self
            .store
            .update(&cmd.user_id, cmd.update)
            .await
            .map_err(|e| {
                tracing::warn!("Updating profile of user {} failed: {}", cmd.user_id, e);
                DomainError::from(e)
            })?
            .ok_or_else(|| user_not_found(&cmd.user_id))?;

        tracing::info!("Updated profile of user {}", cmd.user_id);
        Ok(UpdateProfileResult {
            profile,
            notice: notice.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryKeyValueStore, LocalProfileStore};
    use crate::domain::profile::seed::demo_profiles;

    fn handler(storage: InMemoryKeyValueStore) -> UpdateProfileHandler {
        UpdateProfileHandler::new(Arc::new(LocalProfileStore::new(Arc::new(storage))))
    }

    fn command(user_id: &str, update: ProfileUpdate) -> UpdateProfileCommand {
        UpdateProfileCommand {
            user_id: UserId::new(user_id).unwrap(),
            update,
        }
    }

    fn details() -> ProfileUpdate {
        ProfileUpdate {
            username: Some("data-user".to_string()),
            email: Some("data-user@example.com".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn updates_set_fields() {
        let handler = handler(InMemoryKeyValueStore::new());

        let result = handler.handle(command("2", details())).await.unwrap();

        assert_eq!(result.profile.username, "data-user");
        assert_eq!(result.profile.email, "data-user@example.com");
        assert_eq!(result.profile.phone, demo_profiles()[1].phone);
        assert_eq!(result.notice, "Profile updated");
    }

    #[tokio::test]
    async fn avatar_change_has_its_own_notice() {
        let handler = handler(InMemoryKeyValueStore::new());
        let update = ProfileUpdate {
            avatar: Some("https://example.com/me.png".to_string()),
            ..Default::default()
        };

        let result = handler.handle(command("1", update)).await.unwrap();

        assert_eq!(result.profile.avatar, "https://example.com/me.png");
        assert_eq!(result.notice, "Avatar updated");
    }

    #[tokio::test]
    async fn avatar_change_keeps_earlier_details() {
        let handler = handler(InMemoryKeyValueStore::new());
        handler.handle(command("2", details())).await.unwrap();
        let update = ProfileUpdate {
            avatar: Some("https://example.com/me.png".to_string()),
            ..Default::default()
        };

        let result = handler.handle(command("2", update)).await.unwrap();

        assert_eq!(result.profile.username, "data-user");
        assert_eq!(result.profile.avatar, "https://example.com/me.png");
    }

    #[tokio::test]
    async fn blank_username_is_rejected_before_storage() {
        let storage = InMemoryKeyValueStore::new();
        let handler = handler(storage.clone());
        let update = ProfileUpdate {
            username: Some(String::new()),
            ..Default::default()
        };

        let err = handler.handle(command("2", update)).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::EmptyField);
        assert_eq!(err.details.get("field"), Some(&"username".to_string()));
        assert!(storage.is_empty().await);
    }

    #[tokio::test]
    async fn empty_update_is_rejected() {
        let handler = handler(InMemoryKeyValueStore::new());

        let err = handler
            .handle(command("2", ProfileUpdate::default()))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let handler = handler(InMemoryKeyValueStore::new());

        let err = handler.handle(command("42", details())).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::UserNotFound);
    }

    #[tokio::test]
    async fn storage_failure_maps_to_storage_code() {
        let storage = InMemoryKeyValueStore::new();
        storage.set_fail_writes(true);
        let handler = handler(storage);

        let err = handler.handle(command("2", details())).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::StorageError);
    }
}
