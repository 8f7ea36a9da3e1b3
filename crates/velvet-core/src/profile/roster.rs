//! Companion roster: the owned set of finalized profiles.
//!
//! The roster centralizes the active-profile invariant: exactly one profile
//! is active while the roster is non-empty, none while it is empty. Every
//! mutation below upholds that rule; callers never adjust the pointer to
//! compensate for a create or delete.

use super::model::CharacterProfile;
use crate::error::{Result, VelvetError};

/// The ordered collection of finalized profiles plus the active pointer.
///
/// Profiles keep insertion order; the deterministic replacement rule on
/// deletion is "first remaining profile in insertion order".
#[derive(Debug, Clone, Default)]
pub struct ProfileRoster {
    profiles: Vec<CharacterProfile>,
    active_id: Option<String>,
}

impl ProfileRoster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a roster from persisted parts.
    ///
    /// A stored pointer that no longer names a member (or a missing pointer
    /// while profiles exist) is repaired to the first profile so a loaded
    /// roster always satisfies the active invariant.
    pub fn from_parts(profiles: Vec<CharacterProfile>, active_id: Option<String>) -> Self {
        let active_id = match active_id {
            Some(id) if profiles.iter().any(|p| p.id == id) => Some(id),
            _ => profiles.first().map(|p| p.id.clone()),
        };
        Self {
            profiles,
            active_id,
        }
    }

    /// All profiles in insertion order.
    pub fn profiles(&self) -> &[CharacterProfile] {
        &self.profiles
    }

    /// Number of profiles in the roster.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// True when no profiles exist; this is the zero-profile onboarding
    /// state.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Id of the active profile, if any.
    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    /// The active profile, if any.
    pub fn active(&self) -> Option<&CharacterProfile> {
        let id = self.active_id.as_deref()?;
        self.profiles.iter().find(|p| p.id == id)
    }

    /// Looks up a profile by id.
    pub fn get(&self, id: &str) -> Option<&CharacterProfile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    /// Appends a finalized profile to the roster.
    ///
    /// The first profile of an empty roster becomes active; otherwise the
    /// pointer is untouched until the caller explicitly selects.
    pub fn create(&mut self, profile: CharacterProfile) {
        if self.profiles.is_empty() {
            self.active_id = Some(profile.id.clone());
        }
        self.profiles.push(profile);
        self.assert_active_invariant();
    }

    /// Sets the active pointer to `id`.
    ///
    /// Succeeds as a no-op when `id` is already active. Fails with
    /// `NotFound` (pointer untouched) when `id` is not a member.
    pub fn select(&mut self, id: &str) -> Result<()> {
        if self.get(id).is_none() {
            return Err(VelvetError::not_found("profile", id));
        }
        self.active_id = Some(id.to_string());
        self.assert_active_invariant();
        Ok(())
    }

    /// Replaces the entry sharing `profile.id`.
    ///
    /// Identity is preserved by id, so the active pointer never moves here,
    /// even when the updated profile is the active one.
    pub fn update(&mut self, profile: CharacterProfile) -> Result<()> {
        let Some(slot) = self.profiles.iter_mut().find(|p| p.id == profile.id) else {
            return Err(VelvetError::not_found("profile", profile.id));
        };
        *slot = profile;
        self.assert_active_invariant();
        Ok(())
    }

    /// Removes the profile with `id` and returns it.
    ///
    /// When the removed profile was active and others remain, the first
    /// remaining profile in insertion order becomes active. When the roster
    /// empties, the pointer clears and the onboarding state begins.
    pub fn delete(&mut self, id: &str) -> Result<CharacterProfile> {
        let Some(idx) = self.profiles.iter().position(|p| p.id == id) else {
            return Err(VelvetError::not_found("profile", id));
        };
        let removed = self.profiles.remove(idx);

        if self.active_id.as_deref() == Some(id) {
            self.active_id = self.profiles.first().map(|p| p.id.clone());
        }
        self.assert_active_invariant();
        Ok(removed)
    }

    /// Invariant: exactly one active profile while non-empty, none while
    /// empty, and the pointer always names a member.
    fn assert_active_invariant(&self) {
        debug_assert_eq!(self.active_id.is_none(), self.profiles.is_empty());
        if let Some(id) = self.active_id.as_deref() {
            debug_assert!(self.profiles.iter().any(|p| p.id == id));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::draft::ProfileDraft;

    fn profile(name: &str) -> CharacterProfile {
        let mut draft = ProfileDraft::new();
        draft.name = name.to_string();
        draft.base_traits = format!("{name} is delightful");
        draft.submit().unwrap();
        draft.confirm().unwrap()
    }

    #[test]
    fn test_first_profile_becomes_active() {
        let mut roster = ProfileRoster::new();
        let p = profile("Evelyn");
        let id = p.id.clone();
        roster.create(p);
        assert_eq!(roster.active_id(), Some(id.as_str()));
    }

    #[test]
    fn test_create_keeps_existing_active() {
        let mut roster = ProfileRoster::new();
        let a = profile("A");
        let a_id = a.id.clone();
        roster.create(a);
        roster.create(profile("B"));
        roster.create(profile("C"));
        assert_eq!(roster.active_id(), Some(a_id.as_str()));
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn test_select_missing_id_fails_without_moving_pointer() {
        let mut roster = ProfileRoster::new();
        let a = profile("A");
        let a_id = a.id.clone();
        roster.create(a);

        let err = roster.select("no-such-id").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(roster.active_id(), Some(a_id.as_str()));
    }

    #[test]
    fn test_select_already_active_is_noop_success() {
        let mut roster = ProfileRoster::new();
        let a = profile("A");
        let a_id = a.id.clone();
        roster.create(a);
        roster.select(&a_id).unwrap();
        assert_eq!(roster.active_id(), Some(a_id.as_str()));
    }

    #[test]
    fn test_delete_active_promotes_first_remaining() {
        let mut roster = ProfileRoster::new();
        let a = profile("A");
        let a_id = a.id.clone();
        roster.create(a);
        roster.create(profile("B"));
        let c = profile("C");
        let c_id = c.id.clone();
        roster.create(c);

        roster.select(&c_id).unwrap();
        roster.delete(&c_id).unwrap();

        // Replacement rule: first remaining in insertion order.
        assert_eq!(roster.active_id(), Some(a_id.as_str()));
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn test_delete_inactive_keeps_pointer() {
        let mut roster = ProfileRoster::new();
        let a = profile("A");
        let a_id = a.id.clone();
        roster.create(a);
        let b = profile("B");
        let b_id = b.id.clone();
        roster.create(b);

        roster.delete(&b_id).unwrap();
        assert_eq!(roster.active_id(), Some(a_id.as_str()));
    }

    #[test]
    fn test_delete_last_profile_clears_pointer() {
        let mut roster = ProfileRoster::new();
        let a = profile("A");
        let a_id = a.id.clone();
        roster.create(a);

        roster.delete(&a_id).unwrap();
        assert!(roster.is_empty());
        assert!(roster.active_id().is_none());
        assert!(roster.active().is_none());
    }

    #[test]
    fn test_delete_missing_id_fails() {
        let mut roster = ProfileRoster::new();
        roster.create(profile("A"));
        assert!(roster.delete("missing").unwrap_err().is_not_found());
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_update_replaces_by_id_without_moving_pointer() {
        let mut roster = ProfileRoster::new();
        let a = profile("A");
        roster.create(a.clone());
        let b = profile("B");
        let b_id = b.id.clone();
        roster.create(b.clone());
        roster.select(&b_id).unwrap();

        let mut edited = a.clone();
        edited.name = "A2".to_string();
        roster.update(edited).unwrap();

        assert_eq!(roster.get(&a.id).unwrap().name, "A2");
        assert_eq!(roster.active_id(), Some(b_id.as_str()));
    }

    #[test]
    fn test_update_missing_id_fails() {
        let mut roster = ProfileRoster::new();
        let orphan = profile("Nobody");
        assert!(roster.update(orphan).unwrap_err().is_not_found());
    }

    #[test]
    fn test_from_parts_repairs_dangling_pointer() {
        let a = profile("A");
        let a_id = a.id.clone();
        let roster = ProfileRoster::from_parts(vec![a], Some("gone".to_string()));
        assert_eq!(roster.active_id(), Some(a_id.as_str()));
    }

    #[test]
    fn test_from_parts_empty() {
        let roster = ProfileRoster::from_parts(Vec::new(), Some("gone".to_string()));
        assert!(roster.is_empty());
        assert!(roster.active_id().is_none());
    }
}
