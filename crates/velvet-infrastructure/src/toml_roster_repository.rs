//! TOML-based RosterRepository implementation.

use std::path::PathBuf;

use velvet_core::Result;
use velvet_core::profile::{ProfileRoster, RosterRepository};

use crate::dto::{ConfigFile, ProfileRecord};
use crate::paths::VelvetPaths;
use crate::storage::TomlStore;

/// Persists the companion roster in the shared `config.toml`.
///
/// Responsibilities:
/// - Load/save profile records and the active pointer
/// - Convert between DTOs and domain models
/// - Preserve the user-profile section owned by
///   [`crate::TomlUserProfileRepository`]
pub struct TomlRosterRepository {
    store: TomlStore,
}

impl TomlRosterRepository {
    /// Creates a repository backed by the default config path
    /// (`~/.config/velvet/config.toml`).
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
impl RosterRepository for TomlRosterRepository {
    async fn load(&self) -> Result<ProfileRoster> {
        let config: ConfigFile = self.store.load()?.unwrap_or_default();

        let profiles = config
            .profiles
            .into_iter()
            .map(ProfileRecord::into_domain)
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(count = profiles.len(), "loaded companion roster");
        Ok(ProfileRoster::from_parts(profiles, config.active_profile_id))
    }

    async fn save(&self, roster: &ProfileRoster) -> Result<()> {
        // Re-read so the user-profile section survives a roster save.
        let mut config: ConfigFile = self.store.load()?.unwrap_or_default();

        config.active_profile_id = roster.active_id().map(str::to_string);
        config.profiles = roster.profiles().iter().map(ProfileRecord::from).collect();

        self.store.save(&config)?;
        tracing::debug!(count = roster.len(), "saved companion roster");
        Ok(())
    }
}
