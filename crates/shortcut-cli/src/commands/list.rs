//! `list`

use super::{Context, ALL_USERS};
use crate::output::print_json;
use shortcut_core::{store, Shortcuts};
use std::collections::BTreeMap;

/// Load every user's shortcuts with their local artwork resolved.
pub fn collect(ctx: &Context) -> anyhow::Result<BTreeMap<String, Shortcuts>> {
    let mut results = BTreeMap::new();
    for user in ctx.target_users(ALL_USERS)? {
        let mut shortcuts = store::load(&ctx.steam.shortcuts_path(&user))?;
        for shortcut in shortcuts.values_mut() {
            let images = ctx.steam.resolve_images(&user, shortcut.app_id);
            if !images.is_empty() {
                shortcut.images = Some(images);
            }
        }
        results.insert(user, shortcuts);
    }
    Ok(results)
}

/// Both output formats print JSON; there is no tabular view.
pub fn run(ctx: &Context) -> anyhow::Result<()> {
    print_json(&collect(ctx)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::context;
    use shortcut_core::Shortcut;
    use std::fs;

    #[test]
    fn test_collect_resolves_images() {
        let (_temp_dir, ctx) = context(&["100", "200"], &["100"]);
        let path = ctx.steam.shortcuts_path("100");

        let mut shortcuts = store::load(&path).unwrap();
        let shortcut = Shortcut::builder("Firefox", "/usr/bin/firefox").build();
        let app_id = shortcut.app_id;
        shortcuts.add(shortcut).unwrap();
        store::save(&shortcuts, &path).unwrap();
        fs::write(ctx.steam.images_dir("100").join(format!("{}p.png", app_id)), b"").unwrap();

        let results = collect(&ctx).unwrap();
        assert_eq!(results.keys().collect::<Vec<_>>(), vec!["100"]);

        let firefox = results["100"].lookup_by_name("Firefox").unwrap();
        let images = firefox.images.as_ref().unwrap();
        assert!(images.portrait.as_ref().unwrap().ends_with(format!("{}p.png", app_id)));

        let json = serde_json::to_value(&results).unwrap();
        assert_eq!(json["100"]["shortcuts"]["0"]["AppName"], "Firefox");
        assert!(json["100"]["shortcuts"]["0"]["images"]["portrait"].is_string());
    }

    #[test]
    fn test_collect_skips_shortcuts_without_artwork() {
        let (_temp_dir, ctx) = context(&["100"], &["100"]);
        let path = ctx.steam.shortcuts_path("100");
        let mut shortcuts = store::load(&path).unwrap();
        shortcuts.add(Shortcut::builder("A", "/a").build()).unwrap();
        store::save(&shortcuts, &path).unwrap();

        let results = collect(&ctx).unwrap();
        assert!(results["100"].get("0").unwrap().images.is_none());
    }
}
