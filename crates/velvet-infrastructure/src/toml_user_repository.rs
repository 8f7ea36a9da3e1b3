//! TOML-based UserProfileRepository implementation.

use std::path::PathBuf;

use velvet_core::Result;
use velvet_core::user::{UserProfile, UserProfileRepository};

use crate::dto::{ConfigFile, UserProfileRecord};
use crate::paths::VelvetPaths;
use crate::storage::TomlStore;

/// Persists the user's display record in the shared `config.toml`,
/// preserving the roster section owned by
/// [`crate::TomlRosterRepository`].
pub struct TomlUserProfileRepository {
    store: TomlStore,
}

impl TomlUserProfileRepository {
    /// Creates a repository backed by the default config path.
    pub fn new() -> Result<Self> {
        Ok(Self {
            store: TomlStore::new(VelvetPaths::config_file()?),
        })
    }

    /// Creates a repository with a custom config path (for testing).
    pub fn with_path(config_path: PathBuf) -> Self {
        Self {
            store: TomlStore::new(config_path),
        }
    }
}

#[async_trait::async_trait]
impl UserProfileRepository for TomlUserProfileRepository {
    async fn load(&self) -> Result<UserProfile> {
        let config: ConfigFile = self.store.load()?.unwrap_or_default();
        Ok(config
            .user_profile
            .map(UserProfile::from)
            .unwrap_or_default())
    }

    async fn save(&self, profile: &UserProfile) -> Result<()> {
        let mut config: ConfigFile = self.store.load()?.unwrap_or_default();
        config.user_profile = Some(UserProfileRecord::from(profile));
        self.store.save(&config)?;
        tracing::debug!(name = %profile.name, "saved user profile");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toml_roster_repository::TomlRosterRepository;
    use tempfile::TempDir;
    use velvet_core::profile::{ProfileDraft, ProfileRoster, RosterRepository};

    #[tokio::test]
    async fn test_load_missing_file_is_default_profile() {
        let temp_dir = TempDir::new().unwrap();
        let repo = TomlUserProfileRepository::with_path(temp_dir.path().join("config.toml"));

        let profile = repo.load().await.unwrap();
        assert_eq!(profile, UserProfile::default());
    }

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let repo = TomlUserProfileRepository::with_path(temp_dir.path().join("config.toml"));

        let profile = UserProfile {
            name: "Riley".to_string(),
            avatar_url: Some("avatar://riley".to_string()),
        };
        repo.save(&profile).await.unwrap();

        assert_eq!(repo.load().await.unwrap(), profile);
    }

    #[tokio::test]
    async fn test_sections_survive_each_other() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        let users = TomlUserProfileRepository::with_path(path.clone());
        let rosters = TomlRosterRepository::with_path(path);

        // Save the user record first, then the roster over the same file.
        let user = UserProfile {
            name: "Riley".to_string(),
            avatar_url: None,
        };
        users.save(&user).await.unwrap();

        let mut draft = ProfileDraft::new();
        draft.name = "Evelyn".to_string();
        draft.base_traits = "warm".to_string();
        draft.submit().unwrap();
        let mut roster = ProfileRoster::new();
        roster.create(draft.confirm().unwrap());
        rosters.save(&roster).await.unwrap();

        // Both records are still there.
        assert_eq!(users.load().await.unwrap(), user);
        assert_eq!(rosters.load().await.unwrap().len(), 1);
    }
}
