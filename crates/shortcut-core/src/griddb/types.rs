//! SteamGridDB API response types.

use crate::error::{ShortcutError, Result};
use serde::{Deserialize, Serialize};

/// Envelope shared by every API response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<String>,
    pub data: Option<T>,
}

impl<T: Default> ApiResponse<T> {
    /// Unwrap the payload, turning `success: false` into an error.
    pub fn into_result(self) -> Result<T> {
        if !self.success {
            let message = if self.errors.is_empty() {
                "request was not successful".to_string()
            } else {
                self.errors.join(", ")
            };
            return Err(ShortcutError::GridDb(message));
        }
        Ok(self.data.unwrap_or_default())
    }
}

/// One game returned by `/search/autocomplete/{term}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub verified: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub steam64: String,
    #[serde(default)]
    pub avatar: String,
}

/// One grid, hero, logo or icon image.
///
/// Grids always carry their dimensions; other categories may not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageResult {
    pub id: u64,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub style: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub nsfw: bool,
    #[serde(default)]
    pub humor: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime: Option<String>,
    pub url: String,
    #[serde(default)]
    pub thumb: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub author: Author,
}
