//! User profile repository trait.

use super::model::UserProfile;
use crate::error::Result;

/// An abstract repository for the user's display record.
///
/// Stored independently of the companion roster (spec: the persistence
/// collaborator handles the two records separately).
#[async_trait::async_trait]
pub trait UserProfileRepository: Send + Sync {
    /// Loads the stored user profile, or the default when none is stored.
    async fn load(&self) -> Result<UserProfile>;

    /// Persists the user profile.
    async fn save(&self, profile: &UserProfile) -> Result<()>;
}
