//! `remove <name>`

use super::{Context, ALL_USERS};
use crate::output::{print_json, OutputFormat};
use clap::Args;
use shortcut_core::store;
use std::collections::BTreeMap;
use tracing::info;

#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Name of the shortcut(s) to remove
    pub name: String,

    /// Steam user ID to remove the shortcut for
    #[arg(long, default_value = ALL_USERS)]
    pub user: String,
}

pub fn run(ctx: &Context, args: RemoveArgs) -> anyhow::Result<()> {
    let mut removed = BTreeMap::new();
    for user in ctx.target_users(&args.user)? {
        let path = ctx.steam.shortcuts_path(&user);
        if !path.is_file() {
            continue;
        }

        let mut shortcuts = store::load(&path)?;
        let count = shortcuts.remove(&args.name);
        store::save(&shortcuts, &path)?;
        info!("Removed {} shortcuts named {:?} for user {}", count, args.name, user);
        removed.insert(user, count);
    }

    match ctx.output {
        OutputFormat::Term => {
            for (user, count) in &removed {
                println!("Removed {} shortcut(s) for user {}", count, user);
            }
        }
        OutputFormat::Json => print_json(&removed)?,
    }
    Ok(())
}
