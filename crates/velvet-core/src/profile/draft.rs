//! Profile draft state machine.
//!
//! A draft holds the in-progress form fields for one create/edit session and
//! gates finalization behind an explicit confirmation step:
//!
//! ```text
//! Editing -> PendingConfirmation -> Finalized
//!    |              |
//!    v              v
//! Cancelled      Editing (user backs out of the gate)
//! ```
//!
//! No finalized profile can exist without passing through
//! `PendingConfirmation`. A draft is discarded after confirmation or cancel;
//! it is never persisted.

use chrono::Utc;
use uuid::Uuid;

use super::codec;
use super::model::{CharacterProfile, IntimacyLevel, Relationship, RelationshipKind};
use crate::error::{Result, VelvetError};
use crate::theme::ThemeId;

/// The closed vocabulary of personality tags offered by the editor.
pub const PERSONALITY_TAGS: [&str; 8] = [
    "Caring",
    "Dominant",
    "Flirting",
    "Submissive",
    "Shy",
    "Romantic",
    "Humorous",
    "Arrogant",
];

/// State of a draft session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftState {
    /// Form fields are editable
    Editing,
    /// Submitted and waiting at the confirmation gate
    PendingConfirmation,
    /// Confirmed; the finalized profile has been produced
    Finalized,
    /// Abandoned without side effects
    Cancelled,
}

impl DraftState {
    fn name(&self) -> &'static str {
        match self {
            DraftState::Editing => "editing",
            DraftState::PendingConfirmation => "pending confirmation",
            DraftState::Finalized => "finalized",
            DraftState::Cancelled => "cancelled",
        }
    }
}

/// An in-progress companion create/edit session.
///
/// Mirrors the editable profile fields plus the custom-relationship toggle.
/// Both the preset selection and the custom text survive toggle flips within
/// one session, so switching back never loses typed input.
#[derive(Debug, Clone)]
pub struct ProfileDraft {
    state: DraftState,
    /// The profile being edited, when this is an edit session
    seed: Option<CharacterProfile>,
    pub name: String,
    pub relationship_kind: RelationshipKind,
    pub custom_relationship: String,
    pub use_custom_relationship: bool,
    /// User-authored traits text, without the encoded tag suffix
    pub base_traits: String,
    tags: Vec<String>,
    pub intimacy: IntimacyLevel,
}

impl ProfileDraft {
    /// Creates an empty draft for a new companion.
    pub fn new() -> Self {
        Self {
            state: DraftState::Editing,
            seed: None,
            name: String::new(),
            relationship_kind: RelationshipKind::default(),
            custom_relationship: String::new(),
            use_custom_relationship: false,
            base_traits: String::new(),
            tags: Vec::new(),
            intimacy: IntimacyLevel::default(),
        }
    }

    /// Creates a draft seeded from an existing profile (edit mode).
    ///
    /// The base traits text is recovered by stripping the encoded tag
    /// suffix. Tags come from the profile's structured `tags` field; when
    /// that field is empty (older stored data), they are re-parsed from the
    /// suffix itself.
    pub fn edit_of(profile: &CharacterProfile) -> Self {
        let base_traits = codec::strip_tag_suffix(&profile.traits).to_string();
        let tags = if profile.tags.is_empty() {
            codec::decode(&profile.traits).tags
        } else {
            profile.tags.clone()
        };

        let (relationship_kind, custom_relationship, use_custom_relationship) =
            match &profile.relationship {
                Relationship::Preset(kind) => (*kind, String::new(), false),
                Relationship::Custom(text) => {
                    (RelationshipKind::default(), text.clone(), true)
                }
            };

        Self {
            state: DraftState::Editing,
            seed: Some(profile.clone()),
            name: profile.name.clone(),
            relationship_kind,
            custom_relationship,
            use_custom_relationship,
            base_traits,
            tags,
            intimacy: profile.intimacy,
        }
    }

    /// Current machine state.
    pub fn state(&self) -> DraftState {
        self.state
    }

    /// True when this draft edits an existing profile.
    pub fn is_edit(&self) -> bool {
        self.seed.is_some()
    }

    /// Currently selected personality tags, in selection order.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// The relationship text that would be finalized right now: the custom
    /// string when the toggle is set, the preset label otherwise.
    pub fn resolved_relationship(&self) -> String {
        if self.use_custom_relationship {
            self.custom_relationship.clone()
        } else {
            self.relationship_kind.to_string()
        }
    }

    /// Toggles a personality tag.
    ///
    /// Selecting an already-selected tag removes it; otherwise it is
    /// appended, so tag order is stable insertion order. Tags outside the
    /// fixed vocabulary are rejected.
    pub fn toggle_tag(&mut self, tag: &str) -> Result<()> {
        self.require(DraftState::Editing, "toggle tag")?;
        if !PERSONALITY_TAGS.contains(&tag) {
            return Err(VelvetError::validation(
                "tags",
                format!("'{tag}' is not a known personality tag"),
            ));
        }
        match self.tags.iter().position(|t| t == tag) {
            Some(idx) => {
                self.tags.remove(idx);
            }
            None => self.tags.push(tag.to_string()),
        }
        Ok(())
    }

    /// Submits the form, moving to the confirmation gate.
    ///
    /// Guards: non-empty name, non-empty resolved relationship, non-empty
    /// traits text. On failure the draft stays editable and the offending
    /// field is reported.
    pub fn submit(&mut self) -> Result<()> {
        self.require(DraftState::Editing, "submit")?;

        if self.name.trim().is_empty() {
            return Err(VelvetError::validation("name", "name is required"));
        }
        if self.resolved_relationship().trim().is_empty() {
            return Err(VelvetError::validation(
                "relationship",
                "relationship is required",
            ));
        }
        if self.base_traits.trim().is_empty() {
            return Err(VelvetError::validation(
                "traits",
                "personality description is required",
            ));
        }

        self.state = DraftState::PendingConfirmation;
        Ok(())
    }

    /// Backs out of the confirmation gate; every field stays intact.
    pub fn back_to_editing(&mut self) -> Result<()> {
        self.require(DraftState::PendingConfirmation, "back out")?;
        self.state = DraftState::Editing;
        Ok(())
    }

    /// Confirms the draft and produces the finalized profile.
    ///
    /// Only valid at the confirmation gate. An edit session reuses the seed
    /// profile's id, creation timestamp, avatar, and theme; a new session
    /// mints a fresh id, stamps the current time, and assigns the baseline
    /// theme.
    pub fn confirm(&mut self) -> Result<CharacterProfile> {
        self.require(DraftState::PendingConfirmation, "confirm")?;

        let traits = codec::encode(&self.base_traits, &self.tags);
        let relationship = Relationship::resolve(&self.resolved_relationship());

        let profile = match &self.seed {
            Some(seed) => CharacterProfile {
                id: seed.id.clone(),
                name: self.name.clone(),
                relationship,
                traits,
                intimacy: self.intimacy,
                theme_id: seed.theme_id,
                tags: self.tags.clone(),
                avatar_url: seed.avatar_url.clone(),
                created_at: seed.created_at,
            },
            None => CharacterProfile {
                id: Uuid::new_v4().to_string(),
                name: self.name.clone(),
                relationship,
                traits,
                intimacy: self.intimacy,
                theme_id: ThemeId::baseline(),
                tags: self.tags.clone(),
                avatar_url: None,
                created_at: Utc::now(),
            },
        };

        self.state = DraftState::Finalized;
        Ok(profile)
    }

    /// Abandons the draft entirely. Terminal; no side effect on the roster.
    pub fn cancel(&mut self) -> Result<()> {
        self.require(DraftState::Editing, "cancel")?;
        self.state = DraftState::Cancelled;
        Ok(())
    }

    fn require(&self, expected: DraftState, action: &'static str) -> Result<()> {
        if self.state != expected {
            return Err(VelvetError::invalid_transition(self.state.name(), action));
        }
        Ok(())
    }
}

impl Default for ProfileDraft {
    fn default() -> Self {
        Self::new()
    }
}
