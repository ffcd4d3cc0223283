//! SteamGridDB artwork search and download.

mod artwork;
mod client;
mod filter;
mod types;

pub use artwork::{download_artwork, ArtworkSource, ImageCategory};
pub use client::SteamGridDbClient;
pub use filter::{apply_filters, ImageFilter};
pub use types::{ApiResponse, Author, ImageResult, SearchResult};
