//! Per-game detection profiles
//!
//! Detection parameters are per-game configuration data, not something the
//! locator infers. A profile bundles the identity of a game with the
//! [`DetectionConfig`] tuned for its dialogue box, and loads from TOML or
//! JSON files (the authoring tools write both formats).

pub mod registry;

pub use registry::ProfileRegistry;

use crate::config::DetectionConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors from loading a profile file
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid profile toml: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid profile json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported profile format: {0}")]
    UnsupportedFormat(String),
}

/// Detection profile for one game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameProfile {
    /// Stable identifier (e.g. "chrono_quest")
    pub id: String,
    /// Display name
    pub name: String,
    /// Window title fragments used to pick this profile for a capture target
    #[serde(default)]
    pub window_titles: Vec<String>,
    /// Textbox detection parameters
    pub detection: DetectionConfig,
}

impl GameProfile {
    /// Load a profile from a TOML or JSON file, chosen by extension
    pub fn load(path: &Path) -> Result<Self, ProfileError> {
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Ok(toml::from_str(&content)?),
            Some("json") => Ok(serde_json::from_str(&content)?),
            other => Err(ProfileError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }

    /// Whether this profile claims the given window title
    pub fn matches_window_title(&self, title: &str) -> bool {
        let title = title.to_lowercase();
        self.window_titles
            .iter()
            .any(|fragment| title.contains(&fragment.to_lowercase()))
    }
}
