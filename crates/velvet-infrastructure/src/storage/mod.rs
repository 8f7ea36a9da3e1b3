//! File storage primitives.

mod toml_store;

pub use toml_store::TomlStore;
