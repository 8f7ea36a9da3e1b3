//! Companion use-case layer.
//!
//! `CompanionService` wires the in-memory roster to the persistence
//! collaborators and drives the draft workflow end to end. All roster
//! mutations go through here so the save-after-mutation contract holds in
//! one place.
//!
//! Persistence semantics: the in-memory transition is applied first and is
//! authoritative. A failed save is logged, surfaced as
//! [`VelvetError::Persistence`], and never rolls the transition back;
//! retrying the save is the storage collaborator's concern.

use std::sync::Arc;
use tokio::sync::RwLock;

use velvet_core::profile::{
    CharacterProfile, ProfileDraft, ProfileRoster, RosterRepository,
};
use velvet_core::usage::{InMemoryUsageTracker, UsageSnapshot, UsageTracker};
use velvet_core::user::{UserProfile, UserProfileRepository};
use velvet_core::{Result, VelvetError};

use velvet_infrastructure::{TomlRosterRepository, TomlUserProfileRepository};

/// Coordinates the companion roster, draft sessions, and persistence.
pub struct CompanionService {
    /// In-memory roster; authoritative for the current session
    roster: Arc<RwLock<ProfileRoster>>,
    /// Persistent storage backend for the roster
    rosters: Arc<dyn RosterRepository>,
    /// Persistent storage backend for the user's display record
    users: Arc<dyn UserProfileRepository>,
    /// Read-only usage collaborator
    usage: Arc<dyn UsageTracker>,
}

impl CompanionService {
    /// Creates a service with explicit collaborators.
    pub fn new(
        rosters: Arc<dyn RosterRepository>,
        users: Arc<dyn UserProfileRepository>,
        usage: Arc<dyn UsageTracker>,
    ) -> Self {
        Self {
            roster: Arc::new(RwLock::new(ProfileRoster::new())),
            rosters,
            users,
            usage,
        }
    }

    /// Creates a service backed by the default TOML storage and an
    /// in-process usage tracker.
    pub fn with_default_storage() -> Result<Self> {
        Ok(Self::new(
            Arc::new(TomlRosterRepository::new()?),
            Arc::new(TomlUserProfileRepository::new()?),
            Arc::new(InMemoryUsageTracker::default()),
        ))
    }

    /// Loads the persisted roster into memory. Called once at startup.
    pub async fn load(&self) -> Result<()> {
        let loaded = self.rosters.load().await?;
        tracing::debug!(count = loaded.len(), "restored companion roster");
        *self.roster.write().await = loaded;
        Ok(())
    }

    /// All profiles in insertion order.
    pub async fn profiles(&self) -> Vec<CharacterProfile> {
        self.roster.read().await.profiles().to_vec()
    }

    /// The active profile, if any.
    pub async fn active_profile(&self) -> Option<CharacterProfile> {
        self.roster.read().await.active().cloned()
    }

    /// True when no profiles exist and onboarding should show.
    pub async fn onboarding_required(&self) -> bool {
        self.roster.read().await.is_empty()
    }

    /// Starts a draft session: empty for a new companion, seeded from the
    /// stored profile when `profile_id` is given.
    ///
    /// # Errors
    ///
    /// `NotFound` when `profile_id` names no stored profile.
    pub async fn begin_draft(&self, profile_id: Option<&str>) -> Result<ProfileDraft> {
        match profile_id {
            None => Ok(ProfileDraft::new()),
            Some(id) => {
                let roster = self.roster.read().await;
                let profile = roster
                    .get(id)
                    .ok_or_else(|| VelvetError::not_found("profile", id))?;
                Ok(ProfileDraft::edit_of(profile))
            }
        }
    }

    /// Finalizes a confirmed draft into the roster.
    ///
    /// The draft must be at the confirmation gate. An edit session replaces
    /// the stored entry; a new companion is appended and selected so the UI
    /// lands on it.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` when the draft was not submitted
    /// - `Persistence` when the roster changed but could not be saved
    pub async fn commit_draft(&self, mut draft: ProfileDraft) -> Result<CharacterProfile> {
        let profile = draft.confirm()?;

        let mut roster = self.roster.write().await;
        if roster.get(&profile.id).is_some() {
            roster.update(profile.clone())?;
        } else {
            roster.create(profile.clone());
            roster.select(&profile.id)?;
        }

        self.persist(&roster).await?;
        Ok(profile)
    }

    /// Makes the profile with `id` active.
    pub async fn select_profile(&self, id: &str) -> Result<()> {
        let mut roster = self.roster.write().await;
        roster.select(id)?;
        self.persist(&roster).await
    }

    /// Deletes the profile with `id` and returns it.
    ///
    /// The roster resolves the replacement active profile; an emptied
    /// roster re-enters the onboarding state.
    pub async fn delete_profile(&self, id: &str) -> Result<CharacterProfile> {
        let mut roster = self.roster.write().await;
        let removed = roster.delete(id)?;
        self.persist(&roster).await?;
        Ok(removed)
    }

    /// The user's display record.
    pub async fn user_profile(&self) -> Result<UserProfile> {
        self.users.load().await
    }

    /// Renames the user's display record.
    pub async fn rename_user(&self, name: &str) -> Result<UserProfile> {
        if name.trim().is_empty() {
            return Err(VelvetError::validation("name", "name is required"));
        }
        let mut profile = self.users.load().await?;
        profile.name = name.to_string();
        self.users.save(&profile).await?;
        Ok(profile)
    }

    /// Current usage snapshot for display.
    pub fn usage(&self) -> UsageSnapshot {
        self.usage.snapshot()
    }

    async fn persist(&self, roster: &ProfileRoster) -> Result<()> {
        if let Err(err) = self.rosters.save(roster).await {
            tracing::warn!(error = %err, "roster save failed; in-memory state kept");
            return Err(VelvetError::persistence(err.to_string()));
        }
        Ok(())
    }
}
