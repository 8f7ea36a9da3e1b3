//! Theme domain model.
//!
//! A theme bundles the display styling for one companion: colors, a
//! gradient, and descriptive copy. The core treats the styling fields as an
//! opaque bag; only the identifier and the gradient stops feed cross-cutting
//! logic (loading-screen gradients).

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::error::{Result, VelvetError};

/// Identifier for one of the built-in themes.
///
/// The set is closed: profiles only ever reference these five ids, and an
/// unrecognized id in stored data is an error rather than a silent default.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ThemeId {
    Midnight,
    Crimson,
    Aurora,
    Sunset,
    Pastel,
}

impl ThemeId {
    /// The theme assigned to profiles created without an explicit choice.
    pub fn baseline() -> Self {
        ThemeId::Midnight
    }

    /// Parses a stored theme id string.
    ///
    /// # Returns
    ///
    /// - `Ok(ThemeId)`: The id names a registry entry
    /// - `Err(VelvetError::UnknownTheme)`: The id is not in the registry
    pub fn parse(value: &str) -> Result<Self> {
        value
            .parse::<ThemeId>()
            .map_err(|_| VelvetError::unknown_theme(value))
    }
}

/// Display configuration for a single theme.
///
/// All color fields are hex color strings. `gradient_stops` always has at
/// least two entries so gradient rendering never degenerates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeConfig {
    /// The identifier this record belongs to
    pub id: ThemeId,
    /// Human-readable theme name
    pub name: &'static str,
    /// Short descriptive copy shown in pickers
    pub description: &'static str,
    /// Page background color
    pub background: &'static str,
    /// Card/bubble surface color
    pub surface: &'static str,
    /// Accent color for active states
    pub accent: &'static str,
    /// Ordered gradient color stops, outermost first
    pub gradient_stops: &'static [&'static str],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_id() {
        assert_eq!(ThemeId::parse("midnight").unwrap(), ThemeId::Midnight);
        assert_eq!(ThemeId::parse("pastel").unwrap(), ThemeId::Pastel);
    }

    #[test]
    fn test_parse_unknown_id() {
        let err = ThemeId::parse("vaporwave").unwrap_err();
        assert!(err.is_unknown_theme());
    }

    #[test]
    fn test_baseline_is_midnight() {
        assert_eq!(ThemeId::baseline(), ThemeId::Midnight);
    }

    #[test]
    fn test_display_round_trip() {
        assert_eq!(ThemeId::Crimson.to_string(), "crimson");
        assert_eq!(ThemeId::parse("crimson").unwrap(), ThemeId::Crimson);
    }
}
