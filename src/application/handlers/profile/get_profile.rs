//! GetProfileHandler - Query handler for the account page.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::profile::UserProfile;
use crate::ports::ProfileStore;

use super::user_not_found;

/// Query for a user's profile.
#[derive(Debug, Clone)]
pub struct GetProfileQuery {
    pub user_id: UserId,
}

pub type GetProfileResult = UserProfile;

/// Handler for reading a profile with the user's edits applied.
pub struct GetProfileHandler {
    store: Arc<dyn ProfileStore>,
}

impl GetProfileHandler {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetProfileQuery) -> Result<GetProfileResult, DomainError> {
        self.store
            .get(&query.user_id)
            .await?
            .ok_or_else(|| user_not_found(&query.user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryKeyValueStore, LocalProfileStore};
    use crate::domain::foundation::ErrorCode;
    use crate::domain::profile::ProfileUpdate;

    #[tokio::test]
    async fn returns_profile_with_edits() {
        let store = Arc::new(LocalProfileStore::new(Arc::new(InMemoryKeyValueStore::new())));
        let user_id = UserId::new("2").unwrap();
        store
            .update(
                &user_id,
                ProfileUpdate {
                    department: Some("Data Platform".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        let handler = GetProfileHandler::new(store);

        let profile = handler.handle(GetProfileQuery { user_id }).await.unwrap();

        assert_eq!(profile.department, "Data Platform");
        assert_eq!(profile.username, "user");
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let handler = GetProfileHandler::new(Arc::new(LocalProfileStore::new(Arc::new(
            InMemoryKeyValueStore::new(),
        ))));

        let err = handler
            .handle(GetProfileQuery {
                user_id: UserId::new("someone-else").unwrap(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::UserNotFound);
        assert_eq!(err.details.get("user_id"), Some(&"someone-else".to_string()));
    }
}
