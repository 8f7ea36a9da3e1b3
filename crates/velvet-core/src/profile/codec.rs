//! Personality-tag codec for the free-text traits field.
//!
//! Selected personality tags are embedded into the single `traits` string as
//! a suffix line, keeping the field human-readable while leaving the tags
//! machine-recoverable for re-editing. The marker line is reserved: it must
//! not appear inside user-authored text, or the split becomes ambiguous.

/// Leading segment of the reserved marker; decoding splits on the first
/// occurrence of this string.
pub const TAG_MARKER: &str = "\nAI Personality Types";

/// Full marker prefix used when encoding.
const TAG_MARKER_PREFIX: &str = "\nAI Personality Types: ";

/// Result of decoding a traits string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedTraits {
    /// User-authored text with the tag suffix removed
    pub base_text: String,
    /// Tags recovered from the suffix segment, in encoded order
    pub tags: Vec<String>,
}

/// Embeds `tags` into `base` as a suffix line.
///
/// Returns `base` unchanged when `tags` is empty.
pub fn encode(base: &str, tags: &[String]) -> String {
    if tags.is_empty() {
        return base.to_string();
    }
    format!("{}{}{}.", base, TAG_MARKER_PREFIX, tags.join(", "))
}

/// Strips the tag suffix from a traits string, returning only the
/// user-authored text.
///
/// This is the exact seeding behavior of the companion editor: everything
/// before the first occurrence of [`TAG_MARKER`], or the whole input when no
/// marker is present. Tags are not recovered here; callers that need them
/// read the profile's structured `tags` field, or fall back to [`decode`].
pub fn strip_tag_suffix(traits: &str) -> &str {
    match traits.find(TAG_MARKER) {
        Some(idx) => &traits[..idx],
        None => traits,
    }
}

/// Decodes a traits string into its user-authored text and embedded tags.
///
/// The suffix segment is parsed back into individual tags: the marker prefix
/// and trailing period are dropped and the remainder splits on commas. A
/// traits string without a marker decodes to itself with no tags.
pub fn decode(traits: &str) -> DecodedTraits {
    let Some(idx) = traits.find(TAG_MARKER) else {
        return DecodedTraits {
            base_text: traits.to_string(),
            tags: Vec::new(),
        };
    };

    let base_text = traits[..idx].to_string();
    let segment = &traits[idx..];

    let tags = segment
        .strip_prefix(TAG_MARKER_PREFIX)
        .map(|rest| {
            rest.trim_end()
                .trim_end_matches('.')
                .split(',')
                .map(|tag| tag.trim().to_string())
                .filter(|tag| !tag.is_empty())
                .collect()
        })
        .unwrap_or_default();

    DecodedTraits { base_text, tags }
}
