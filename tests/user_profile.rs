//! Profile edits against the public application API.

use std::sync::Arc;

use marketplace_console::adapters::{
    FileKeyValueStore, FixedClock, InMemoryKeyValueStore, StaticProductCatalog,
};
use marketplace_console::application::{AppContext, GetProfileQuery, UpdateProfileCommand};
use marketplace_console::domain::foundation::{ErrorCode, Timestamp, UserId};
use marketplace_console::domain::profile::ProfileUpdate;
use marketplace_console::ports::KeyValueStore;
use tempfile::TempDir;

fn context_over(storage: Arc<dyn KeyValueStore>) -> AppContext {
    AppContext::with_parts(
        storage,
        Arc::new(FixedClock::new(Timestamp::from_ymd(2024, 3, 1).unwrap())),
        Arc::new(StaticProductCatalog::demo()),
    )
}

fn customer() -> UserId {
    UserId::new("2").unwrap()
}

#[tokio::test]
async fn edits_survive_logout_and_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let open = || context_over(Arc::new(FileKeyValueStore::new(temp_dir.path())));

    open()
        .update_profile()
        .handle(UpdateProfileCommand {
            user_id: customer(),
            update: ProfileUpdate {
                position: Some("Data Architect".to_string()),
                bio: Some("Builds dashboards.".to_string()),
                ..Default::default()
            },
        })
        .await
        .unwrap();
    open()
        .update_profile()
        .handle(UpdateProfileCommand {
            user_id: customer(),
            update: ProfileUpdate {
                avatar: Some("https://example.com/avatar.png".to_string()),
                ..Default::default()
            },
        })
        .await
        .unwrap();

    let profile = open()
        .get_profile()
        .handle(GetProfileQuery {
            user_id: customer(),
        })
        .await
        .unwrap();
    assert_eq!(profile.position, "Data Architect");
    assert_eq!(profile.bio, "Builds dashboards.");
    assert_eq!(profile.avatar, "https://example.com/avatar.png");
    assert_eq!(profile.username, "user");
    assert_eq!(profile.join_date, "2021-06-15");
}

#[tokio::test]
async fn failed_edit_keeps_stored_profile() {
    let storage = InMemoryKeyValueStore::new();
    let context = context_over(Arc::new(storage.clone()));
    let before = context
        .get_profile()
        .handle(GetProfileQuery {
            user_id: customer(),
        })
        .await
        .unwrap();

    storage.set_fail_writes(true);
    let err = context
        .update_profile()
        .handle(UpdateProfileCommand {
            user_id: customer(),
            update: ProfileUpdate {
                email: Some("new@example.com".to_string()),
                ..Default::default()
            },
        })
        .await
        .unwrap_err();
    storage.set_fail_writes(false);

    assert_eq!(err.code, ErrorCode::StorageError);
    let after = context
        .get_profile()
        .handle(GetProfileQuery {
            user_id: customer(),
        })
        .await
        .unwrap();
    assert_eq!(after, before);
}
