//! Character profile domain model.
//!
//! Represents AI companions the user has composed. Each profile carries a
//! free-text personality description, a structured intimacy tier, a visual
//! theme, and the personality tags selected in the editor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::theme::{ThemeConfig, ThemeId};

/// The fixed relationship choices offered by the companion editor.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum RelationshipKind {
    Girlfriend,
    Boyfriend,
    Wife,
    Husband,
    Friend,
}

impl Default for RelationshipKind {
    fn default() -> Self {
        RelationshipKind::Girlfriend
    }
}

/// The relationship between the user and a companion.
///
/// Either one of the fixed [`RelationshipKind`] choices or an arbitrary
/// user-authored label ("Teacher", "Manager", ...). Custom labels are kept
/// verbatim; `resolve` maps a stored string back onto a preset when it
/// matches one exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Relationship {
    Preset(RelationshipKind),
    Custom(String),
}

impl Relationship {
    /// Resolves a relationship label: preset when the text names one of the
    /// fixed kinds, custom otherwise.
    pub fn resolve(text: &str) -> Self {
        match text.parse::<RelationshipKind>() {
            Ok(kind) => Relationship::Preset(kind),
            Err(_) => Relationship::Custom(text.to_string()),
        }
    }

    /// The display label for this relationship.
    pub fn label(&self) -> String {
        match self {
            Relationship::Preset(kind) => kind.to_string(),
            Relationship::Custom(text) => text.clone(),
        }
    }
}

/// Content-tone tier for a companion, orthogonal to theme.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum IntimacyLevel {
    Normal,
    Medium,
    High,
}

impl Default for IntimacyLevel {
    fn default() -> Self {
        IntimacyLevel::Medium
    }
}

impl IntimacyLevel {
    /// Short mood description shown next to the tier selector.
    pub fn description(&self) -> &'static str {
        match self {
            IntimacyLevel::Normal => "Ambient Blue: Friendly, safe, and platonic connection.",
            IntimacyLevel::Medium => "Standard Mode: Romantic, teasing, and playful.",
            IntimacyLevel::High => "Ambient Pink: Intense, bold, and unfiltered passion.",
        }
    }
}

/// A finalized companion profile.
///
/// Profiles are produced by the draft confirmation flow and owned by the
/// roster. `id` and `created_at` are assigned exactly once at first creation
/// and carried unchanged through every subsequent edit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterProfile {
    /// Unique identifier (UUID format), never reassigned
    pub id: String,
    /// Display name of the companion
    pub name: String,
    /// Relationship between the user and the companion
    pub relationship: Relationship,
    /// Free-text personality description, possibly carrying an encoded
    /// personality-tag suffix (see [`crate::profile::codec`])
    pub traits: String,
    /// Content-tone tier
    #[serde(default)]
    pub intimacy: IntimacyLevel,
    /// Visual theme for this companion
    pub theme_id: ThemeId,
    /// Personality tags, duplicated inside `traits` by the codec
    #[serde(default)]
    pub tags: Vec<String>,
    /// Opaque avatar reference; populated by an external generator, never
    /// by this core
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Creation timestamp, set once
    pub created_at: DateTime<Utc>,
}

impl CharacterProfile {
    /// The display configuration for this profile's theme.
    pub fn theme(&self) -> &'static ThemeConfig {
        ThemeConfig::of(self.theme_id)
    }
}
