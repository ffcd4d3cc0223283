//! Grid artwork naming and lookup.
//!
//! Steam looks for custom artwork in `userdata/<user>/config/grid` under
//! names derived from the app id:
//!
//! | Slot      | File stem          |
//! |-----------|--------------------|
//! | landscape | `<appid>`          |
//! | portrait  | `<appid>p`         |
//! | hero      | `<appid>_hero`     |
//! | logo      | `<appid>_logo`     |
//! | icon      | `<appid>_icon`     |

use crate::config::SteamConfig;
use crate::error::{ShortcutError, Result};
use crate::shortcut::Images;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where a piece of artwork is shown in the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtworkSlot {
    Portrait,
    Landscape,
    Hero,
    Logo,
    Icon,
}

impl ArtworkSlot {
    pub const ALL: [ArtworkSlot; 5] = [
        ArtworkSlot::Portrait,
        ArtworkSlot::Landscape,
        ArtworkSlot::Hero,
        ArtworkSlot::Logo,
        ArtworkSlot::Icon,
    ];

    /// Suffix appended to the app id in the file stem.
    pub fn suffix(self) -> &'static str {
        match self {
            ArtworkSlot::Portrait => SteamConfig::PORTRAIT_SUFFIX,
            ArtworkSlot::Landscape => "",
            ArtworkSlot::Hero => SteamConfig::HERO_SUFFIX,
            ArtworkSlot::Logo => SteamConfig::LOGO_SUFFIX,
            ArtworkSlot::Icon => SteamConfig::ICON_SUFFIX,
        }
    }

    /// File name without extension for `app_id`.
    pub fn file_stem(self, app_id: u64) -> String {
        format!("{}{}", app_id, self.suffix())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ArtworkSlot::Portrait => "portrait",
            ArtworkSlot::Landscape => "landscape",
            ArtworkSlot::Hero => "hero",
            ArtworkSlot::Logo => "logo",
            ArtworkSlot::Icon => "icon",
        }
    }
}

impl fmt::Display for ArtworkSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Find the artwork file for one slot, trying known extensions in order.
pub fn find_image(images_dir: &Path, app_id: u64, slot: ArtworkSlot) -> Result<PathBuf> {
    let stem = slot.file_stem(app_id);
    SteamConfig::IMAGE_EXTENSIONS
        .iter()
        .map(|ext| images_dir.join(format!("{}.{}", stem, ext)))
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| ShortcutError::not_found(format!("{} image for app id {}", slot, app_id)))
}

/// Every slot that has a file on disk for `app_id`.
pub fn find_images(images_dir: &Path, app_id: u64) -> HashMap<ArtworkSlot, PathBuf> {
    ArtworkSlot::ALL
        .iter()
        .filter_map(|slot| {
            find_image(images_dir, app_id, *slot)
                .ok()
                .map(|path| (*slot, path))
        })
        .collect()
}

/// Collect existing artwork for `app_id` into an [`Images`] value.
pub fn resolve_images(images_dir: &Path, app_id: u64) -> Images {
    let mut images = Images::default();
    images.merge(&find_images(images_dir, app_id));
    debug!(
        "Resolved artwork for {} in {}: {:?}",
        app_id,
        images_dir.display(),
        images
    );
    images
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_file_stems() {
        assert_eq!(ArtworkSlot::Landscape.file_stem(42), "42");
        assert_eq!(ArtworkSlot::Portrait.file_stem(42), "42p");
        assert_eq!(ArtworkSlot::Hero.file_stem(42), "42_hero");
        assert_eq!(ArtworkSlot::Logo.file_stem(42), "42_logo");
        assert_eq!(ArtworkSlot::Icon.file_stem(42), "42_icon");
    }

    #[test]
    fn test_find_image_tries_extensions_in_order() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("42p.jpg"), b"jpg").unwrap();
        fs::write(temp_dir.path().join("42p.ico"), b"ico").unwrap();

        let found = find_image(temp_dir.path(), 42, ArtworkSlot::Portrait).unwrap();
        assert_eq!(found, temp_dir.path().join("42p.jpg"));

        fs::write(temp_dir.path().join("42p.png"), b"png").unwrap();
        let found = find_image(temp_dir.path(), 42, ArtworkSlot::Portrait).unwrap();
        assert_eq!(found, temp_dir.path().join("42p.png"));
    }

    #[test]
    fn test_find_image_missing() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("42.gif"), b"gif").unwrap();

        let err = find_image(temp_dir.path(), 42, ArtworkSlot::Landscape).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_resolve_images() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("7_hero.png"), b"").unwrap();
        fs::write(temp_dir.path().join("7_logo.jpeg"), b"").unwrap();
        // Another app's art is ignored
        fs::write(temp_dir.path().join("8.png"), b"").unwrap();

        let images = resolve_images(temp_dir.path(), 7);
        assert_eq!(images.hero, Some(temp_dir.path().join("7_hero.png")));
        assert_eq!(images.logo, Some(temp_dir.path().join("7_logo.jpeg")));
        assert!(images.landscape.is_none());
        assert!(images.portrait.is_none());
    }

    #[test]
    fn test_resolve_images_missing_dir() {
        let images = resolve_images(Path::new("/nonexistent/grid"), 7);
        assert!(images.is_empty());
    }
}
