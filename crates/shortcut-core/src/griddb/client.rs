//! HTTP client for the SteamGridDB v2 API.
//!
//! API calls are authenticated with a bearer token. Image downloads go
//! straight to the CDN without credentials, stream into a `.part` file and
//! are renamed into place once complete.

use super::artwork::{ArtworkSource, ImageCategory};
use super::filter::{apply_filters, ImageFilter};
use super::types::{ApiResponse, ImageResult, SearchResult};
use crate::config::GridDbConfig;
use crate::error::{ShortcutError, Result};
use async_trait::async_trait;
use futures::StreamExt;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

/// SteamGridDB API client.
pub struct SteamGridDbClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl SteamGridDbClient {
    /// Create a client for the public API.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, GridDbConfig::API_BASE)
    }

    /// Create a client against another API root, without a trailing slash.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ShortcutError::Configuration {
                message: "SteamGridDB API key is required".to_string(),
            });
        }

        let client = Client::builder()
            .timeout(GridDbConfig::REQUEST_TIMEOUT)
            .user_agent(GridDbConfig::USER_AGENT)
            .build()
            .map_err(|e| ShortcutError::Network {
                message: format!("Failed to create HTTP client: {}", e),
                source: Some(e),
            })?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn search_path(term: &str) -> String {
        format!("/search/autocomplete/{}", urlencoding::encode(term))
    }

    fn category_path(game_id: u64, category: ImageCategory) -> String {
        format!("/{}/game/{}", category.endpoint(), game_id)
    }

    async fn get(&self, url: &str, authenticated: bool) -> Result<Response> {
        debug!("GET {}", url);
        let mut request = self.client.get(url);
        if authenticated {
            request = request.bearer_auth(&self.api_key);
        }

        let response = request.send().await.map_err(|e| ShortcutError::Network {
            message: format!("GET {} failed: {}", url, e),
            source: Some(e),
        })?;

        let status = response.status();
        if !status.is_success() {
            if let Ok(body) = response.text().await {
                debug!("Response body from {}: {}", url, body);
            }
            return Err(ShortcutError::Http {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    async fn get_api<T: DeserializeOwned + Default>(&self, path: &str) -> Result<T> {
        let url = self.api_url(path);
        let response = self.get(&url, true).await?;
        let body: ApiResponse<T> = response.json().await.map_err(|e| ShortcutError::Network {
            message: format!("Invalid response from {}: {}", url, e),
            source: Some(e),
        })?;
        body.into_result()
    }

    async fn download_to(&self, url: &str, temp_path: &Path) -> Result<u64> {
        let response = self.get(url, false).await?;

        let mut file = tokio::fs::File::create(temp_path)
            .await
            .map_err(|e| ShortcutError::io_with_path(e, temp_path))?;

        let mut written: u64 = 0;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| ShortcutError::Network {
                message: format!("Error reading download stream: {}", e),
                source: Some(e),
            })?;
            file.write_all(&chunk)
                .await
                .map_err(|e| ShortcutError::io_with_path(e, temp_path))?;
            written += chunk.len() as u64;
        }

        file.flush()
            .await
            .map_err(|e| ShortcutError::io_with_path(e, temp_path))?;
        Ok(written)
    }
}

#[async_trait]
impl ArtworkSource for SteamGridDbClient {
    async fn search(&self, term: &str) -> Result<Vec<SearchResult>> {
        self.get_api(&Self::search_path(term)).await
    }

    async fn fetch_category_images(
        &self,
        game_id: u64,
        category: ImageCategory,
        filters: &[ImageFilter],
    ) -> Result<Vec<ImageResult>> {
        let images: Vec<ImageResult> = self.get_api(&Self::category_path(game_id, category)).await?;
        Ok(apply_filters(images, filters))
    }

    async fn fetch(&self, url: &str, destination: &Path) -> Result<()> {
        if let Some(parent) = destination.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| ShortcutError::io_with_path(e, parent))?;
        }

        let temp_path = part_path(destination);
        match self.download_to(url, &temp_path).await {
            Ok(bytes) => {
                if let Err(e) = tokio::fs::rename(&temp_path, destination).await {
                    let _ = tokio::fs::remove_file(&temp_path).await;
                    return Err(ShortcutError::Io {
                        message: format!("Failed to move download to final destination: {}", e),
                        path: Some(destination.to_path_buf()),
                        source: Some(e),
                    });
                }
                info!("Downloaded {} bytes to {}", bytes, destination.display());
                Ok(())
            }
            Err(e) => {
                let _ = tokio::fs::remove_file(&temp_path).await;
                Err(e)
            }
        }
    }
}

/// Temp path a download is written to before the final rename.
fn part_path(destination: &Path) -> PathBuf {
    let mut name = destination.as_os_str().to_owned();
    name.push(".");
    name.push(GridDbConfig::DOWNLOAD_TEMP_SUFFIX);
    PathBuf::from(name)
}
