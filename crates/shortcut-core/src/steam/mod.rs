//! Steam installation layout and local grid artwork.

mod dirs;
mod images;

pub use self::dirs::SteamDirs;
pub use images::{find_image, find_images, resolve_images, ArtworkSlot};
