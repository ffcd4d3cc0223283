//! Centralized configuration for the shortcut library.
//!
//! Directory layout of a Steam installation and SteamGridDB API settings.

use std::time::Duration;

/// Steam installation layout.
pub struct SteamConfig;

impl SteamConfig {
    /// Steam root relative to the home directory.
    pub const BASE_DIR: [&'static str; 2] = [".steam", "steam"];
    pub const USERDATA_DIR_NAME: &'static str = "userdata";
    pub const CONFIG_DIR_NAME: &'static str = "config";
    pub const GRID_DIR_NAME: &'static str = "grid";
    pub const SHORTCUTS_FILENAME: &'static str = "shortcuts.vdf";

    /// Top-level key of the shortcuts document.
    pub const SHORTCUTS_ROOT_KEY: &'static str = "shortcuts";

    // Grid image suffixes appended to the app id
    pub const PORTRAIT_SUFFIX: &'static str = "p";
    pub const HERO_SUFFIX: &'static str = "_hero";
    pub const LOGO_SUFFIX: &'static str = "_logo";
    pub const ICON_SUFFIX: &'static str = "_icon";

    /// Extensions tried, in order, when looking for existing artwork.
    pub const IMAGE_EXTENSIONS: [&'static str; 4] = ["png", "jpg", "jpeg", "ico"];
}

/// SteamGridDB API configuration.
pub struct GridDbConfig;

impl GridDbConfig {
    pub const API_BASE: &'static str = "https://www.steamgriddb.com/api/v2";
    pub const API_KEY_ENV: &'static str = "STEAMGRIDDB_API_KEY";
    pub const USER_AGENT: &'static str = "steam-shortcut-manager/0.3";
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
    pub const DOWNLOAD_TEMP_SUFFIX: &'static str = "part";

    // Grid aspect ratios (width, height)
    pub const VERTICAL_GRID: (u32, u32) = (600, 900);
    pub const HORIZONTAL_GRID: (u32, u32) = (920, 430);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_has_no_trailing_slash() {
        assert!(!GridDbConfig::API_BASE.ends_with('/'));
    }

    #[test]
    fn test_image_extensions_prefer_png() {
        assert_eq!(SteamConfig::IMAGE_EXTENSIONS[0], "png");
    }
}
