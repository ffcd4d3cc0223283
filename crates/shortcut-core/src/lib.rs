//! Shortcut Core - Headless library for Steam non-Steam-game shortcuts.
//!
//! Reads and writes the binary `shortcuts.vdf` store of a Steam user,
//! computes the app ids Steam assigns to shortcuts, and fetches library
//! artwork from SteamGridDB.
//!
//! # Example
//!
//! ```rust,ignore
//! use shortcut_core::{store, Shortcut, SteamDirs};
//!
//! fn main() -> shortcut_core::Result<()> {
//!     let steam = SteamDirs::discover()?;
//!     for user in steam.users()? {
//!         let path = steam.shortcuts_path(&user);
//!         let mut shortcuts = store::load_or_default(&path)?;
//!         shortcuts.add(Shortcut::builder("Firefox", "/usr/bin/firefox").build())?;
//!         store::save(&shortcuts, &path)?;
//!     }
//!     Ok(())
//! }
//! ```

pub mod appid;
pub mod config;
pub mod error;
pub mod griddb;
pub mod shortcut;
pub mod steam;
pub mod vdf;

// Re-export commonly used types
pub use appid::{calculate_app_id, calculate_big_picture_id};
pub use config::{GridDbConfig, SteamConfig};
pub use error::{Result, ShortcutError};
pub use griddb::{download_artwork, ArtworkSource, ImageCategory, ImageFilter, SteamGridDbClient};
pub use shortcut::{store, Images, Shortcut, ShortcutBuilder, Shortcuts};
pub use steam::{ArtworkSlot, SteamDirs};
pub use vdf::{VdfMap, VdfValue};
