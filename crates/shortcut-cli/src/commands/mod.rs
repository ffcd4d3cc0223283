//! Subcommand implementations.

pub mod add;
pub mod download;
pub mod list;
pub mod remove;
pub mod search;
pub mod users;

use crate::output::OutputFormat;
use anyhow::bail;
use shortcut_core::{SteamDirs, SteamGridDbClient};

/// User selector meaning "every user with a shortcuts file".
pub const ALL_USERS: &str = "all";

/// State shared by every command.
pub struct Context {
    pub steam: SteamDirs,
    pub output: OutputFormat,
}

impl Context {
    /// Users a store-editing command applies to.
    ///
    /// `all` selects every user that already has a shortcuts file. A single
    /// user id must exist in userdata but need not have a file yet.
    pub fn target_users(&self, selector: &str) -> anyhow::Result<Vec<String>> {
        if selector == ALL_USERS {
            let users = self
                .steam
                .users()?
                .into_iter()
                .filter(|user| self.steam.has_shortcuts(user))
                .collect();
            return Ok(users);
        }

        if !self.steam.has_user(selector) {
            bail!("user not found: {}", selector);
        }
        Ok(vec![selector.to_string()])
    }
}

/// Build a SteamGridDB client, failing early without a key.
pub fn griddb_client(api_key: Option<&str>) -> anyhow::Result<SteamGridDbClient> {
    match api_key {
        Some(key) if !key.trim().is_empty() => Ok(SteamGridDbClient::new(key)?),
        _ => bail!("no API key specified"),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// A Steam root with the given users; users listed in `with_store` get an
    /// empty shortcuts file.
    pub fn context(users: &[&str], with_store: &[&str]) -> (TempDir, Context) {
        let temp_dir = TempDir::new().unwrap();
        let steam = SteamDirs::new(temp_dir.path());
        for user in users {
            fs::create_dir_all(steam.images_dir(user)).unwrap();
        }
        for user in with_store {
            shortcut_core::store::save(&Default::default(), &steam.shortcuts_path(user)).unwrap();
        }
        let ctx = Context {
            steam,
            output: OutputFormat::Json,
        };
        (temp_dir, ctx)
    }
}
