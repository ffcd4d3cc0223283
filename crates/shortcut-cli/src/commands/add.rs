//! `add <name> <exe>`

use super::{griddb_client, Context, ALL_USERS};
use crate::output::{print_json, OutputFormat};
use anyhow::bail;
use clap::{ArgAction, Args};
use shortcut_core::{download_artwork, store, ArtworkSource, ImageCategory, Shortcut};
use std::collections::BTreeMap;
use tracing::{info, warn};

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Name shown in the Steam library
    pub name: String,

    /// Command line of the executable
    pub exe: String,

    /// Allow desktop config
    #[arg(long, action = ArgAction::Set, default_value_t = true, num_args = 0..=1,
          default_missing_value = "true", require_equals = true)]
    pub allow_desktop_config: bool,

    /// Allow steam overlay
    #[arg(long, action = ArgAction::Set, default_value_t = true, num_args = 0..=1,
          default_missing_value = "true", require_equals = true)]
    pub allow_overlay: bool,

    /// Whether or not the shortcut is hidden
    #[arg(long)]
    pub is_hidden: bool,

    /// Use OpenVR for the shortcut
    #[arg(long)]
    pub openvr: bool,

    /// Flatpak ID of the shortcut
    #[arg(long, default_value = "")]
    pub flatpak_id: String,

    /// Launch options for the shortcut
    #[arg(long, default_value = "")]
    pub launch_options: String,

    /// Path to the shortcut file for this application
    #[arg(long, default_value = "")]
    pub shortcut_path: String,

    /// Working directory where the app is started
    #[arg(long, default_value = "")]
    pub start_dir: String,

    /// Path to the icon to use for this application
    #[arg(long, default_value = "")]
    pub icon: String,

    /// Comma-separated list of tags
    #[arg(long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Steam user ID to add the shortcut for
    #[arg(long, default_value = ALL_USERS)]
    pub user: String,

    /// Download artwork from SteamGridDB (requires an API key). The shortcut
    /// is saved for every user first; download failures are reported at the end
    #[arg(short = 'i', long)]
    pub download_images: bool,

    /// SteamGridDB API key
    #[arg(short = 'k', long, env = "STEAMGRIDDB_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
}

impl AddArgs {
    fn to_shortcut(&self) -> Shortcut {
        Shortcut::builder(&self.name, &self.exe)
            .allow_desktop_config(self.allow_desktop_config)
            .allow_overlay(self.allow_overlay)
            .hidden(self.is_hidden)
            .open_vr(self.openvr)
            .flatpak_app_id(&self.flatpak_id)
            .launch_options(&self.launch_options)
            .shortcut_path(&self.shortcut_path)
            .start_dir(&self.start_dir)
            .icon(&self.icon)
            .tags(self.tags.iter().cloned())
            .build()
    }
}

pub async fn run(ctx: &Context, args: AddArgs) -> anyhow::Result<()> {
    // Check the key before touching any file
    let client = if args.download_images {
        Some(griddb_client(args.api_key.as_deref())?)
    } else {
        None
    };

    let mut added = add_to_users(ctx, &args)?;
    let failures = match &client {
        Some(client) => download_for_users(client, ctx, &mut added).await,
        None => Vec::new(),
    };

    match ctx.output {
        OutputFormat::Term => {
            for (user, shortcut) in &added {
                println!("Added {} ({}) for user {}", shortcut.app_name, shortcut.app_id, user);
            }
        }
        OutputFormat::Json => print_json(&added)?,
    }

    if !failures.is_empty() {
        let report: Vec<String> = failures
            .iter()
            .map(|(user, err)| format!("user {}: {:#}", user, err))
            .collect();
        bail!("artwork download failed; {}", report.join("; "));
    }
    Ok(())
}

/// Add and save the shortcut for every target user.
fn add_to_users(ctx: &Context, args: &AddArgs) -> anyhow::Result<BTreeMap<String, Shortcut>> {
    let mut added = BTreeMap::new();
    for user in ctx.target_users(&args.user)? {
        let path = ctx.steam.shortcuts_path(&user);
        let mut shortcuts = store::load_or_default(&path)?;

        let shortcut = args.to_shortcut();
        shortcuts.add(shortcut.clone())?;
        store::save(&shortcuts, &path)?;
        info!("Added {:?} ({}) for user {}", shortcut.app_name, shortcut.app_id, user);

        added.insert(user, shortcut);
    }
    Ok(added)
}

/// Download artwork for each added shortcut, continuing past failures.
///
/// Returns the users whose download failed, with the error.
async fn download_for_users(
    source: &dyn ArtworkSource,
    ctx: &Context,
    added: &mut BTreeMap<String, Shortcut>,
) -> Vec<(String, anyhow::Error)> {
    let mut failures = Vec::new();
    for (user, shortcut) in added.iter_mut() {
        let images_dir = ctx.steam.images_dir(user);
        match download_artwork(source, &images_dir, shortcut, &ImageCategory::ALL).await {
            Ok(downloaded) => shortcut.merge_images(&downloaded),
            Err(e) => {
                warn!("Artwork download failed for user {}: {}", user, e);
                failures.push((user.clone(), e.into()));
            }
        }
    }
    failures
}
