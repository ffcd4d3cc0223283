//! Typed shortcut records and the keyed collection that owns them.

use crate::appid::calculate_big_picture_id;
use crate::error::{ShortcutError, Result};
use crate::steam::ArtworkSlot;
use crate::vdf::VdfMap;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::debug;

/// A single non-Steam game entry of `shortcuts.vdf`.
///
/// Flags are stored as 0/1 integers because the file format has no boolean
/// type. `images` is filled in for display only and is never written back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortcut {
    #[serde(rename = "AllowDesktopConfig")]
    pub allow_desktop_config: u32,
    #[serde(rename = "AllowOverlay")]
    pub allow_overlay: u32,
    #[serde(rename = "AppName")]
    pub app_name: String,
    #[serde(rename = "Devkit")]
    pub devkit: u32,
    #[serde(rename = "DevkitGameID")]
    pub devkit_game_id: String,
    #[serde(rename = "DevkitOverrideAppID")]
    pub devkit_override_app_id: u32,
    /// Command line of the executable, usually quoted.
    #[serde(rename = "Exe")]
    pub exe: String,
    #[serde(rename = "FlatpakAppID")]
    pub flatpak_app_id: String,
    #[serde(rename = "IsHidden")]
    pub is_hidden: u32,
    /// Unix timestamp of the last launch, 0 if never played.
    #[serde(rename = "LastPlayTime")]
    pub last_play_time: u32,
    #[serde(rename = "LaunchOptions")]
    pub launch_options: String,
    #[serde(rename = "OpenVR")]
    pub open_vr: u32,
    #[serde(rename = "ShortcutPath")]
    pub shortcut_path: String,
    #[serde(rename = "StartDir")]
    pub start_dir: String,
    /// Read from the file as-is; only new shortcuts compute it.
    #[serde(rename = "appid")]
    pub app_id: u64,
    #[serde(rename = "icon")]
    pub icon: String,
    #[serde(rename = "tags")]
    pub tags: VdfMap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Images>,
}

impl Shortcut {
    /// App id formatted the way grid image file names use it.
    pub fn app_id_string(&self) -> String {
        self.app_id.to_string()
    }

    /// Id used by Big Picture mode for this shortcut.
    pub fn big_picture_id(&self) -> u64 {
        calculate_big_picture_id(&self.exe, &self.app_name)
    }

    /// Merge resolved artwork paths onto the shortcut.
    pub fn merge_images(&mut self, resolved: &HashMap<ArtworkSlot, PathBuf>) {
        if resolved.is_empty() {
            return;
        }
        self.images
            .get_or_insert_with(Images::default)
            .merge(resolved);
    }
}

/// Local paths of the grid artwork for a shortcut.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Images {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portrait: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landscape: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<PathBuf>,
}

impl Images {
    pub fn get(&self, slot: ArtworkSlot) -> Option<&PathBuf> {
        match slot {
            ArtworkSlot::Portrait => self.portrait.as_ref(),
            ArtworkSlot::Landscape => self.landscape.as_ref(),
            ArtworkSlot::Hero => self.hero.as_ref(),
            ArtworkSlot::Logo => self.logo.as_ref(),
            ArtworkSlot::Icon => self.icon.as_ref(),
        }
    }

    pub fn set(&mut self, slot: ArtworkSlot, path: PathBuf) {
        let field = match slot {
            ArtworkSlot::Portrait => &mut self.portrait,
            ArtworkSlot::Landscape => &mut self.landscape,
            ArtworkSlot::Hero => &mut self.hero,
            ArtworkSlot::Logo => &mut self.logo,
            ArtworkSlot::Icon => &mut self.icon,
        };
        *field = Some(path);
    }

    /// Overwrite every slot present in `resolved`; other slots are kept.
    pub fn merge(&mut self, resolved: &HashMap<ArtworkSlot, PathBuf>) {
        for (slot, path) in resolved {
            self.set(*slot, path.clone());
        }
    }

    pub fn is_empty(&self) -> bool {
        ArtworkSlot::ALL.iter().all(|slot| self.get(*slot).is_none())
    }
}

/// The shortcuts of one Steam user, keyed by "0", "1", "2", ...
///
/// Keys are kept in insertion order, which is also the order they had in
/// the file and the order they are written back in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortcuts {
    #[serde(rename = "shortcuts")]
    entries: IndexMap<String, Shortcut>,
}

impl Shortcuts {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from already-keyed entries, as read from a file.
    pub(crate) fn from_entries(entries: IndexMap<String, Shortcut>) -> Self {
        Self { entries }
    }

    /// Add a shortcut under the next free key and return that key.
    ///
    /// Duplicates are allowed: adding the same shortcut twice creates two
    /// entries.
    pub fn add(&mut self, shortcut: Shortcut) -> Result<String> {
        let key = self.next_key()?;
        debug!("Adding shortcut {:?} as key {}", shortcut.app_name, key);
        self.entries.insert(key.clone(), shortcut);
        Ok(key)
    }

    /// One past the highest numeric key, or "0" when empty.
    ///
    /// Fails if any key is not a number.
    pub fn next_key(&self) -> Result<String> {
        let mut highest: Option<u64> = None;
        for key in self.entries.keys() {
            let n: u64 = key.parse().map_err(|_| ShortcutError::Configuration {
                message: format!("non-number shortcut key {:?}", key),
            })?;
            highest = Some(highest.map_or(n, |h| h.max(n)));
        }
        let next = match highest {
            None => 0,
            Some(h) => h.checked_add(1).ok_or_else(|| ShortcutError::Configuration {
                message: format!("shortcut key {} has no successor", h),
            })?,
        };
        Ok(next.to_string())
    }

    /// First shortcut whose name matches exactly.
    pub fn lookup_by_name(&self, name: &str) -> Result<&Shortcut> {
        self.entries
            .values()
            .find(|s| s.app_name == name)
            .ok_or_else(|| ShortcutError::not_found(format!("name: {}", name)))
    }

    /// First shortcut with the given app id.
    pub fn lookup_by_id(&self, app_id: u64) -> Result<&Shortcut> {
        self.entries
            .values()
            .find(|s| s.app_id == app_id)
            .ok_or_else(|| ShortcutError::not_found(format!("id: {}", app_id)))
    }

    /// Remove every shortcut with the given name and renumber the rest.
    ///
    /// Survivors keep their relative order but get fresh keys starting at
    /// "0", so any key held from before the call is stale afterwards.
    /// Returns the number of shortcuts removed.
    pub fn remove(&mut self, name: &str) -> usize {
        let before = self.entries.len();
        let survivors: Vec<Shortcut> = std::mem::take(&mut self.entries)
            .into_values()
            .filter(|s| s.app_name != name)
            .collect();

        self.entries = survivors
            .into_iter()
            .enumerate()
            .map(|(i, s)| (i.to_string(), s))
            .collect();

        let removed = before - self.entries.len();
        debug!("Removed {} shortcuts named {:?}", removed, name);
        removed
    }

    pub fn get(&self, key: &str) -> Option<&Shortcut> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Shortcut)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut Shortcut> {
        self.entries.values_mut()
    }
}
