//! Unified path management for velvet configuration files.
//!
//! All velvet data lives in one platform config directory so storage,
//! repositories, and the CLI agree on locations.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/velvet/            # Config directory (XDG on Linux)
//! └── config.toml              # User profile + companion roster
//! ```

use std::path::PathBuf;
use velvet_core::{Result, VelvetError};

/// Unified path management for velvet.
pub struct VelvetPaths;

impl VelvetPaths {
    /// Returns the velvet configuration directory.
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("velvet"))
            .ok_or_else(|| VelvetError::io("Cannot find config directory"))
    }

    /// Returns the path of the main config file.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }
}
