//! UserProfile domain model.
//!
//! Represents the user's own display information shown in the menu drawer:
//! a name and an optional avatar reference.

use serde::{Deserialize, Serialize};

/// User profile domain model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// User's display name
    pub name: String,
    /// Opaque avatar reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "You".to_string(),
            avatar_url: None,
        }
    }
}
