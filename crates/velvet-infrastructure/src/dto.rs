//! On-disk DTOs for the config file.
//!
//! The stored format keeps enum-like fields as plain strings so the file
//! stays hand-editable; conversion into domain models is where stored data
//! gets validated (unknown theme ids error, missing themes fall back to the
//! baseline).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use velvet_core::profile::{CharacterProfile, IntimacyLevel, Relationship};
use velvet_core::theme::ThemeId;
use velvet_core::user::UserProfile;
use velvet_core::{Result, VelvetError};

/// Root structure of `config.toml`.
///
/// Field order matters for TOML output: plain values first, then tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Id of the active companion profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_profile_id: Option<String>,

    /// The user's own display record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_profile: Option<UserProfileRecord>,

    /// Companion profiles, in insertion order.
    #[serde(default, rename = "profile", skip_serializing_if = "Vec::is_empty")]
    pub profiles: Vec<ProfileRecord>,
}

/// Stored form of the user's display record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfileRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl From<&UserProfile> for UserProfileRecord {
    fn from(profile: &UserProfile) -> Self {
        Self {
            name: profile.name.clone(),
            avatar_url: profile.avatar_url.clone(),
        }
    }
}

impl From<UserProfileRecord> for UserProfile {
    fn from(record: UserProfileRecord) -> Self {
        Self {
            name: record.name,
            avatar_url: record.avatar_url,
        }
    }
}

/// Stored form of one companion profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub id: String,
    pub name: String,
    /// Relationship label; preset kinds are stored by their display name
    pub relationship: String,
    pub traits: String,
    /// Intimacy tier; missing defaults to the standard tier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intimacy: Option<String>,
    /// Theme id; missing means the profile predates theme selection and
    /// falls back to the baseline
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&CharacterProfile> for ProfileRecord {
    fn from(profile: &CharacterProfile) -> Self {
        Self {
            id: profile.id.clone(),
            name: profile.name.clone(),
            relationship: profile.relationship.label(),
            traits: profile.traits.clone(),
            intimacy: Some(profile.intimacy.to_string()),
            theme_id: Some(profile.theme_id.to_string()),
            tags: profile.tags.clone(),
            avatar_url: profile.avatar_url.clone(),
            created_at: profile.created_at,
        }
    }
}

impl ProfileRecord {
    /// Converts the stored record into the domain model.
    ///
    /// # Returns
    ///
    /// - `Err(VelvetError::UnknownTheme)`: The stored theme id is not in
    ///   the registry (never silently defaulted)
    /// - `Err(VelvetError::Serialization)`: The stored intimacy tier is
    ///   not one of the known values
    pub fn into_domain(self) -> Result<CharacterProfile> {
        let theme_id = match self.theme_id.as_deref() {
            Some(raw) => ThemeId::parse(raw)?,
            None => ThemeId::baseline(),
        };

        let intimacy = match self.intimacy.as_deref() {
            Some(raw) => raw.parse::<IntimacyLevel>().map_err(|_| {
                VelvetError::Serialization {
                    format: "TOML".to_string(),
                    message: format!("unknown intimacy tier '{raw}'"),
                }
            })?,
            None => IntimacyLevel::default(),
        };

        Ok(CharacterProfile {
            id: self.id,
            name: self.name,
            relationship: Relationship::resolve(&self.relationship),
            traits: self.traits,
            intimacy,
            theme_id,
            tags: self.tags,
            avatar_url: self.avatar_url,
            created_at: self.created_at,
        })
    }
}
