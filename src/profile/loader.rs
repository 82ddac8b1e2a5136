use super::{validator::ProfileValidator, ServerProfile};
use crate::Result;
use std::path::Path;
use tracing::debug;

/// Loads and validates server profiles from TOML files.
pub struct ProfileLoader;

impl ProfileLoader {
    /// Load a profile from a TOML file and validate every field.
    ///
    /// The returned record is the crate's validated-input boundary: the
    /// engine and assembler accept it as-is.
    pub fn from_path(path: &Path) -> Result<ServerProfile> {
        debug!("Loading server profile from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse and validate a profile from TOML text.
    pub fn from_toml(content: &str) -> Result<ServerProfile> {
        let profile: ServerProfile = toml::from_str(content)?;
        ProfileValidator::validate(&profile)?;
        Ok(profile)
    }
}
