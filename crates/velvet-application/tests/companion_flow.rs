//! End-to-end companion lifecycle against real TOML storage.

use std::sync::Arc;

use tempfile::TempDir;

use velvet_application::CompanionService;
use velvet_core::profile::{ProfileRoster, RosterRepository};
use velvet_core::usage::InMemoryUsageTracker;
use velvet_core::{Result, VelvetError};
use velvet_infrastructure::{TomlRosterRepository, TomlUserProfileRepository};

fn service_at(dir: &TempDir) -> CompanionService {
    let config = dir.path().join("config.toml");
    CompanionService::new(
        Arc::new(TomlRosterRepository::with_path(config.clone())),
        Arc::new(TomlUserProfileRepository::with_path(config)),
        Arc::new(InMemoryUsageTracker::default()),
    )
}

async fn create_companion(svc: &CompanionService, name: &str) -> String {
    let mut draft = svc.begin_draft(None).await.unwrap();
    draft.name = name.to_string();
    draft.base_traits = format!("{name} is delightful");
    draft.submit().unwrap();
    svc.commit_draft(draft).await.unwrap().id
}

#[tokio::test]
async fn test_create_edit_reload_cycle() {
    let dir = TempDir::new().unwrap();

    let svc = service_at(&dir);
    svc.load().await.unwrap();
    assert!(svc.onboarding_required().await);

    // Create with tags through the two-phase flow.
    let mut draft = svc.begin_draft(None).await.unwrap();
    draft.name = "Evelyn".to_string();
    draft.base_traits = "kind and witty".to_string();
    draft.toggle_tag("Caring").unwrap();
    draft.toggle_tag("Romantic").unwrap();
    draft.submit().unwrap();
    let created = svc.commit_draft(draft).await.unwrap();
    assert_eq!(
        created.traits,
        "kind and witty\nAI Personality Types: Caring, Romantic."
    );

    // Edit: the seeded draft recovers the bare text, and identity survives.
    let mut edit = svc.begin_draft(Some(&created.id)).await.unwrap();
    assert_eq!(edit.base_traits, "kind and witty");
    edit.name = "Evelyn Prime".to_string();
    edit.submit().unwrap();
    let updated = svc.commit_draft(edit).await.unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);

    // A fresh service over the same file sees the edited companion.
    let reloaded = service_at(&dir);
    reloaded.load().await.unwrap();
    let profiles = reloaded.profiles().await;
    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0].name, "Evelyn Prime");
    assert_eq!(
        reloaded.active_profile().await.unwrap().id,
        created.id
    );
}

#[tokio::test]
async fn test_delete_active_promotes_first_and_persists() {
    let dir = TempDir::new().unwrap();
    let svc = service_at(&dir);
    svc.load().await.unwrap();

    let a = create_companion(&svc, "A").await;
    let _b = create_companion(&svc, "B").await;
    let c = create_companion(&svc, "C").await;

    // commit_draft selects each new companion, so C is active.
    assert_eq!(svc.active_profile().await.unwrap().id, c);

    svc.delete_profile(&c).await.unwrap();
    assert_eq!(svc.active_profile().await.unwrap().id, a);

    let reloaded = service_at(&dir);
    reloaded.load().await.unwrap();
    assert_eq!(reloaded.profiles().await.len(), 2);
    assert_eq!(reloaded.active_profile().await.unwrap().id, a);
}

#[tokio::test]
async fn test_deleting_last_companion_returns_to_onboarding() {
    let dir = TempDir::new().unwrap();
    let svc = service_at(&dir);
    svc.load().await.unwrap();

    let only = create_companion(&svc, "Solo").await;
    svc.delete_profile(&only).await.unwrap();

    assert!(svc.onboarding_required().await);
    assert!(svc.active_profile().await.is_none());

    let reloaded = service_at(&dir);
    reloaded.load().await.unwrap();
    assert!(reloaded.onboarding_required().await);
}

#[tokio::test]
async fn test_select_missing_profile_fails_cleanly() {
    let dir = TempDir::new().unwrap();
    let svc = service_at(&dir);
    svc.load().await.unwrap();

    let a = create_companion(&svc, "A").await;
    let err = svc.select_profile("no-such-id").await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(svc.active_profile().await.unwrap().id, a);
}

#[tokio::test]
async fn test_user_profile_round_trip() {
    let dir = TempDir::new().unwrap();
    let svc = service_at(&dir);

    assert_eq!(svc.user_profile().await.unwrap().name, "You");
    svc.rename_user("Riley").await.unwrap();

    let reloaded = service_at(&dir);
    assert_eq!(reloaded.user_profile().await.unwrap().name, "Riley");
}

/// Storage that accepts loads but refuses every save.
struct BrokenStorage;

#[async_trait::async_trait]
impl RosterRepository for BrokenStorage {
    async fn load(&self) -> Result<ProfileRoster> {
        Ok(ProfileRoster::new())
    }
    async fn save(&self, _roster: &ProfileRoster) -> Result<()> {
        Err(VelvetError::io("disk on fire"))
    }
}

#[tokio::test]
async fn test_save_failure_keeps_in_memory_state() {
    let dir = TempDir::new().unwrap();
    let svc = CompanionService::new(
        Arc::new(BrokenStorage),
        Arc::new(TomlUserProfileRepository::with_path(
            dir.path().join("config.toml"),
        )),
        Arc::new(InMemoryUsageTracker::default()),
    );
    svc.load().await.unwrap();

    let mut draft = svc.begin_draft(None).await.unwrap();
    draft.name = "Evelyn".to_string();
    draft.base_traits = "warm".to_string();
    draft.submit().unwrap();

    let err = svc.commit_draft(draft).await.unwrap_err();
    assert!(err.is_persistence());

    // The companion exists in memory even though the save failed.
    let profiles = svc.profiles().await;
    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0].name, "Evelyn");
}
