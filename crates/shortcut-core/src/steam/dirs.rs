//! Locations inside a Steam installation.

use super::images::resolve_images;
use crate::config::SteamConfig;
use crate::error::{ShortcutError, Result};
use crate::shortcut::Images;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A Steam installation rooted at a directory such as `~/.steam/steam`.
///
/// ```text
/// <root>/userdata/<user>/config/shortcuts.vdf
/// <root>/userdata/<user>/config/grid/<appid>p.png
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SteamDirs {
    root: PathBuf,
}

impl SteamDirs {
    /// Use an explicit Steam root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Find the default Steam root under the user's home directory.
    pub fn discover() -> Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| ShortcutError::Configuration {
            message: "Could not determine home directory".to_string(),
        })?;
        let root = SteamConfig::BASE_DIR
            .iter()
            .fold(home, |path, part| path.join(part));
        debug!("Using Steam directory {}", root.display());
        Ok(Self::new(root))
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }

    pub fn userdata_dir(&self) -> PathBuf {
        self.root.join(SteamConfig::USERDATA_DIR_NAME)
    }

    /// Ids of every Steam user with a userdata directory, sorted.
    pub fn users(&self) -> Result<Vec<String>> {
        let userdata = self.userdata_dir();
        let entries =
            fs::read_dir(&userdata).map_err(|e| ShortcutError::io_with_path(e, &userdata))?;

        let mut users = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| ShortcutError::io_with_path(e, &userdata))?;
            if !entry.path().is_dir() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                users.push(name.to_string());
            }
        }
        users.sort();
        Ok(users)
    }

    pub fn has_user(&self, user: &str) -> bool {
        self.user_dir(user).is_dir()
    }

    fn user_dir(&self, user: &str) -> PathBuf {
        self.userdata_dir().join(user)
    }

    fn config_dir(&self, user: &str) -> PathBuf {
        self.user_dir(user).join(SteamConfig::CONFIG_DIR_NAME)
    }

    /// Grid artwork directory of a user.
    pub fn images_dir(&self, user: &str) -> PathBuf {
        self.config_dir(user).join(SteamConfig::GRID_DIR_NAME)
    }

    pub fn shortcuts_path(&self, user: &str) -> PathBuf {
        self.config_dir(user).join(SteamConfig::SHORTCUTS_FILENAME)
    }

    pub fn has_shortcuts(&self, user: &str) -> bool {
        self.shortcuts_path(user).is_file()
    }

    /// Existing artwork of `app_id` for `user`.
    pub fn resolve_images(&self, user: &str, app_id: u64) -> Images {
        resolve_images(&self.images_dir(user), app_id)
    }
}
