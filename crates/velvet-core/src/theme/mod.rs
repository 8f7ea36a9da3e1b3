//! Theme domain module.
//!
//! Themes are static visual configurations selected per companion profile.
//! The registry is a fixed table; it is consumed, never mutated.
//!
//! # Module Structure
//!
//! - `model`: Theme identifiers and the display configuration record
//! - `preset`: The built-in theme table and lookup helpers

mod model;
mod preset;

pub use model::{ThemeConfig, ThemeId};
pub use preset::registry;
