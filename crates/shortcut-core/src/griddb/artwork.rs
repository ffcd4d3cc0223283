//! Artwork sources and the download flow for a single shortcut.

use super::filter::ImageFilter;
use super::types::{ImageResult, SearchResult};
use crate::error::Result;
use crate::shortcut::Shortcut;
use crate::steam::ArtworkSlot;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Image categories offered by SteamGridDB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageCategory {
    Grid,
    Hero,
    Logo,
    Icon,
}

impl ImageCategory {
    pub const ALL: [ImageCategory; 4] = [
        ImageCategory::Grid,
        ImageCategory::Hero,
        ImageCategory::Logo,
        ImageCategory::Icon,
    ];

    /// API path segment, as in `/grids/game/{id}`.
    pub fn endpoint(self) -> &'static str {
        match self {
            ImageCategory::Grid => "grids",
            ImageCategory::Hero => "heroes",
            ImageCategory::Logo => "logos",
            ImageCategory::Icon => "icons",
        }
    }

    /// Library slot a downloaded image of this category fills.
    pub fn slot(self) -> ArtworkSlot {
        match self {
            ImageCategory::Grid => ArtworkSlot::Portrait,
            ImageCategory::Hero => ArtworkSlot::Hero,
            ImageCategory::Logo => ArtworkSlot::Logo,
            ImageCategory::Icon => ArtworkSlot::Icon,
        }
    }
}

impl fmt::Display for ImageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ImageCategory::Grid => "grid",
            ImageCategory::Hero => "hero",
            ImageCategory::Logo => "logo",
            ImageCategory::Icon => "icon",
        })
    }
}

/// Somewhere artwork can be searched for and downloaded from.
#[async_trait]
pub trait ArtworkSource: Send + Sync {
    /// Games matching `term`, best match first.
    async fn search(&self, term: &str) -> Result<Vec<SearchResult>>;

    /// Images of one category for a game, after applying `filters`.
    async fn fetch_category_images(
        &self,
        game_id: u64,
        category: ImageCategory,
        filters: &[ImageFilter],
    ) -> Result<Vec<ImageResult>>;

    /// Download `url` to `destination`, replacing any existing file.
    async fn fetch(&self, url: &str, destination: &Path) -> Result<()>;

    /// Download `url` unless `destination` already exists.
    ///
    /// Returns whether a download happened.
    async fn cached_fetch(&self, url: &str, destination: &Path) -> Result<bool> {
        if destination.exists() {
            debug!("Skipping download, {} exists", destination.display());
            return Ok(false);
        }
        self.fetch(url, destination).await?;
        Ok(true)
    }
}

/// Download artwork for `shortcut` into `images_dir`.
///
/// The first search result for the shortcut's name is used. For each
/// category the candidates are tried in order until one downloads. The
/// returned map holds the file of every slot that now has artwork and can
/// be merged onto the shortcut with [`Shortcut::merge_images`].
pub async fn download_artwork(
    source: &dyn ArtworkSource,
    images_dir: &Path,
    shortcut: &Shortcut,
    categories: &[ImageCategory],
) -> Result<HashMap<ArtworkSlot, PathBuf>> {
    let mut downloaded = HashMap::new();

    let results = source.search(&shortcut.app_name).await?;
    let Some(game) = results.first() else {
        info!("No SteamGridDB results for {:?}", shortcut.app_name);
        return Ok(downloaded);
    };
    debug!("Using SteamGridDB game {} ({})", game.id, game.name);

    for &category in categories {
        let images = source.fetch_category_images(game.id, category, &[]).await?;
        let slot = category.slot();

        for image in &images {
            let file_name = format!("{}{}", slot.file_stem(shortcut.app_id), extension_of(&image.url));
            let destination = images_dir.join(file_name);

            match source.cached_fetch(&image.url, &destination).await {
                Ok(_) => {
                    info!("Saved {} artwork to {}", category, destination.display());
                    downloaded.insert(slot, destination);
                    break;
                }
                Err(e) => warn!("Failed to download {}: {}", image.url, e),
            }
        }

        if !downloaded.contains_key(&slot) {
            debug!("No {} artwork downloaded for {:?}", category, shortcut.app_name);
        }
    }

    Ok(downloaded)
}

/// File extension of the URL's path, including the dot, or "" if none.
fn extension_of(url: &str) -> String {
    let path = match url::Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => url.to_string(),
    };
    Path::new(&path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext))
        .unwrap_or_default()
}
