//! Companion profile domain module.
//!
//! This module contains the profile lifecycle core: the domain model, the
//! personality-tag codec, the draft state machine, the roster, and the
//! persistence seam.
//!
//! # Module Structure
//!
//! - `model`: Profile domain models (`CharacterProfile`, `Relationship`,
//!   `IntimacyLevel`)
//! - `codec`: Personality-tag encoding inside the traits field
//! - `draft`: The two-phase create/edit state machine
//! - `roster`: The profile set and its active-pointer invariant
//! - `repository`: Repository trait for roster persistence

pub mod codec;
mod draft;
mod model;
mod repository;
mod roster;

// Re-export public API
pub use draft::{DraftState, ProfileDraft, PERSONALITY_TAGS};
pub use model::{CharacterProfile, IntimacyLevel, Relationship, RelationshipKind};
pub use repository::RosterRepository;
pub use roster::ProfileRoster;
