//! Built-in theme table.
//!
//! Five fixed themes cover the moods the companion UI ships with. The table
//! is immutable; profile data references entries by [`ThemeId`] only.

use super::model::{ThemeConfig, ThemeId};

const THEMES: [ThemeConfig; 5] = [
    ThemeConfig {
        id: ThemeId::Midnight,
        name: "Cosmic Blue",
        description: "Deep, futuristic, and cool.",
        background: "#020617",
        surface: "#1e293b",
        accent: "#0ea5e9",
        gradient_stops: &["#0ea5e9", "#3b82f6", "#020617"],
    },
    ThemeConfig {
        id: ThemeId::Crimson,
        name: "Electric Violet",
        description: "Vibrant, intense, and magnetic.",
        background: "#17082e",
        surface: "#2e1065",
        accent: "#8b5cf6",
        gradient_stops: &["#8b5cf6", "#d946ef", "#17082e"],
    },
    ThemeConfig {
        id: ThemeId::Aurora,
        name: "Neo Mint",
        description: "Fresh, clean, and energetic.",
        background: "#042f2e",
        surface: "#134e4a",
        accent: "#10b981",
        gradient_stops: &["#14b8a6", "#10b981", "#042f2e"],
    },
    ThemeConfig {
        id: ThemeId::Sunset,
        name: "Solar Flare",
        description: "Warm, glowing, and radiant.",
        background: "#1c1917",
        surface: "#292524",
        accent: "#f59e0b",
        gradient_stops: &["#f97316", "#f43f5e", "#1c1917"],
    },
    ThemeConfig {
        id: ThemeId::Pastel,
        name: "Cloud Nine",
        description: "Soft, airy, and dreamy.",
        background: "#f8fafc",
        surface: "#ffffff",
        accent: "#38bdf8",
        gradient_stops: &["#7dd3fc", "#818cf8", "#f8fafc"],
    },
];

/// Returns the full built-in theme table.
pub fn registry() -> &'static [ThemeConfig] {
    &THEMES
}

impl ThemeConfig {
    /// Looks up the configuration record for a theme id.
    ///
    /// Every `ThemeId` has exactly one entry, so the lookup cannot miss.
    pub fn of(id: ThemeId) -> &'static ThemeConfig {
        THEMES
            .iter()
            .find(|t| t.id == id)
            .expect("every ThemeId has a registry entry")
    }
}
