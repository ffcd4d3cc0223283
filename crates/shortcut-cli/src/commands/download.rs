//! `download <name> --app-id <id>`

use super::{griddb_client, Context};
use crate::output::{print_json, OutputFormat};
use anyhow::bail;
use clap::Args;
use shortcut_core::{download_artwork, ArtworkSlot, ImageCategory, Shortcut};
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct DownloadArgs {
    /// Game name to search SteamGridDB for
    pub name: String,

    /// Steam app id of the shortcut the images are for
    #[arg(long)]
    pub app_id: u64,

    /// SteamGridDB API key
    #[arg(short = 'k', long, env = "STEAMGRIDDB_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Steam user ID whose grid directory receives the images
    #[arg(long, conflicts_with = "destination_dir")]
    pub user: Option<String>,

    /// Directory to save the images to instead of a user's grid directory
    #[arg(long)]
    pub destination_dir: Option<PathBuf>,

    /// Only download grid image
    #[arg(long)]
    pub only_grid: bool,

    /// Only download hero image
    #[arg(long)]
    pub only_hero: bool,

    /// Only download logo image
    #[arg(long)]
    pub only_logo: bool,

    /// Only download icon image
    #[arg(long)]
    pub only_icon: bool,
}

impl DownloadArgs {
    /// Categories selected by the `--only-*` flags, or all of them.
    fn categories(&self) -> Vec<ImageCategory> {
        let selected: Vec<ImageCategory> = [
            (self.only_grid, ImageCategory::Grid),
            (self.only_hero, ImageCategory::Hero),
            (self.only_logo, ImageCategory::Logo),
            (self.only_icon, ImageCategory::Icon),
        ]
        .into_iter()
        .filter_map(|(only, category)| only.then_some(category))
        .collect();

        if selected.is_empty() {
            ImageCategory::ALL.to_vec()
        } else {
            selected
        }
    }
}

/// Target directories: an explicit destination, one user, or every user.
fn destinations(ctx: &Context, args: &DownloadArgs) -> anyhow::Result<Vec<PathBuf>> {
    if let Some(dir) = &args.destination_dir {
        return Ok(vec![dir.clone()]);
    }
    if let Some(user) = &args.user {
        if !ctx.steam.has_user(user) {
            bail!("user not found: {}", user);
        }
        return Ok(vec![ctx.steam.images_dir(user)]);
    }

    let users = ctx.steam.users()?;
    if users.is_empty() {
        bail!("unable to discover download directory");
    }
    Ok(users.iter().map(|user| ctx.steam.images_dir(user)).collect())
}

pub async fn run(ctx: &Context, args: DownloadArgs) -> anyhow::Result<()> {
    if args.app_id == 0 {
        bail!("Shortcut app id is required");
    }
    let client = griddb_client(args.api_key.as_deref())?;

    let shortcut = Shortcut {
        app_name: args.name.clone(),
        app_id: args.app_id,
        ..Shortcut::default()
    };
    let categories = args.categories();

    let mut saved: BTreeMap<String, BTreeMap<ArtworkSlot, PathBuf>> = BTreeMap::new();
    for dir in destinations(ctx, &args)? {
        let downloaded = download_artwork(&client, &dir, &shortcut, &categories).await?;
        saved.insert(dir.display().to_string(), downloaded.into_iter().collect());
    }

    match ctx.output {
        OutputFormat::Term => {
            for (dir, files) in &saved {
                if files.is_empty() {
                    println!("No artwork found for {} in {}", shortcut.app_name, dir);
                }
                for (slot, path) in files {
                    println!("{}: {}", slot, path.display());
                }
            }
            Ok(())
        }
        OutputFormat::Json => print_json(&saved),
    }
}
