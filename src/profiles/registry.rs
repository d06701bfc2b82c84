//! Profile registry
//!
//! Holds the loaded game profiles and answers "which game is this capture
//! target" questions by window title.

use std::collections::HashMap;
use std::path::Path;

use super::{GameProfile, ProfileError};

/// Registry of loaded game profiles
pub struct ProfileRegistry {
    profiles: HashMap<String, GameProfile>,
}

impl ProfileRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            profiles: HashMap::new(),
        }
    }

    /// Register a profile, replacing any previous one with the same id
    pub fn register(&mut self, profile: GameProfile) {
        self.profiles.insert(profile.id.clone(), profile);
    }

    /// Load every profile file in a directory
    ///
    /// Files that fail to parse are logged and skipped; one broken profile
    /// must not take the rest down. Returns how many profiles were loaded.
    pub fn load_from_dir(&mut self, dir: &Path) -> Result<usize, ProfileError> {
        let mut loaded = 0;
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            let ext = path.extension().and_then(|e| e.to_str());
            if !matches!(ext, Some("toml") | Some("json")) {
                continue;
            }
            match GameProfile::load(&path) {
                Ok(profile) => {
                    log::info!("loaded profile '{}' from {:?}", profile.id, path);
                    self.register(profile);
                    loaded += 1;
                }
                Err(e) => {
                    log::warn!("skipping profile {:?}: {}", path, e);
                }
            }
        }
        log::info!("profile registry holds {} profiles", self.profiles.len());
        Ok(loaded)
    }

    /// Get a profile by id
    pub fn get(&self, id: &str) -> Option<&GameProfile> {
        self.profiles.get(id)
    }

    /// Find the profile claiming the given window title
    pub fn find_by_window_title(&self, title: &str) -> Option<&GameProfile> {
        self.profiles
            .values()
            .find(|p| p.matches_window_title(title))
    }

    /// All registered profile ids
    pub fn ids(&self) -> Vec<&str> {
        self.profiles.keys().map(|s| s.as_str()).collect()
    }

    /// Number of registered profiles
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self::new()
    }
}
