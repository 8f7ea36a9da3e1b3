//! Roster repository trait.
//!
//! Defines the interface for roster persistence operations.

use super::roster::ProfileRoster;
use crate::error::Result;

/// An abstract repository for persisting the companion roster.
///
/// This trait defines the contract for storing and retrieving the full
/// profile set plus the active pointer, decoupling the core from the
/// specific storage mechanism (e.g., TOML file, database, remote API).
///
/// Retry and conflict resolution are the implementation's responsibility;
/// the core calls `load` once at startup and `save` after every mutating
/// operation.
#[async_trait::async_trait]
pub trait RosterRepository: Send + Sync {
    /// Loads the persisted roster.
    ///
    /// A missing or empty store loads as an empty roster.
    ///
    /// # Returns
    ///
    /// - `Ok(ProfileRoster)`: The stored roster, active pointer resolved
    /// - `Err(VelvetError)`: Error if retrieval fails
    async fn load(&self) -> Result<ProfileRoster>;

    /// Persists the full roster, replacing the stored one.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: Roster saved durably
    /// - `Err(VelvetError)`: Error if the save fails
    async fn save(&self, roster: &ProfileRoster) -> Result<()>;
}
